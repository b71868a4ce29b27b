use crate::classify::get_sv_type;
use crate::diagnostics::DiagnosticsSink;
use crate::errors::SvStatsError;
use crate::sv_type::SVType;
use crate::variant_record::{
    InfoFieldNames, VariantRecord, get_info_int, get_sv_length_from_coordinates,
    get_sv_length_from_ref_alt,
};

/// Length reported for all translocations
///
/// Translocations have no linear size, so this value is reserved for TRA records.
///
pub const TRA_SV_LENGTH: i64 = 0;

/// Get the size of an SV record
///
/// The length hint INFO field is preferred for all types except TRA. Without it, DUP, INV and DEL
/// sizes come from the END coordinate, and INS sizes from the REF/ALT allele length difference.
/// Deletions are negative unless `abs_value` is set.
///
/// # Arguments
/// * `sv_type` - Type of the record, if already known. The record is classified if this is None.
/// * `abs_value` - Return the absolute value of the length
///
pub fn get_sv_length(
    record: &impl VariantRecord,
    sv_type: Option<SVType>,
    abs_value: bool,
    field_names: &InfoFieldNames,
    diagnostics: &mut dyn DiagnosticsSink,
) -> Result<i64, SvStatsError> {
    let sv_type = match sv_type {
        Some(x) => x,
        None => get_sv_type(record, field_names, diagnostics),
    };

    let len_hint = || get_info_int(record, &field_names.sv_len);

    let length = match sv_type {
        SVType::Tra => TRA_SV_LENGTH,
        SVType::Dup | SVType::Inv => match len_hint()? {
            Some(x) => x,
            None => get_sv_length_from_coordinates(record)?,
        },
        SVType::Ins => match len_hint()? {
            Some(x) => x,
            None => get_sv_length_from_ref_alt(record),
        },
        SVType::Del => {
            let x = match len_hint()? {
                Some(x) => x,
                None => get_sv_length_from_coordinates(record)?,
            };
            if x > 0 { -x } else { x }
        }
    };

    Ok(if abs_value { length.abs() } else { length })
}
