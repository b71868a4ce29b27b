//! SV type classification from heterogeneous VCF annotations
//!

use crate::diagnostics::DiagnosticsSink;
use crate::sv_type::SVType;
use crate::variant_record::{
    CHR2_INFO_KEY, InfoFieldNames, STRANDS_INFO_KEY, VariantRecord, get_info_int,
    get_sv_length_from_coordinates,
};

/// Get the mate chromosome from a breakend ALT allele such as 'N[chr2:3000[' or ']chr2:3000]N'
///
/// Returns None if the allele is not in breakend notation or has no 'chrom:pos' component.
///
pub fn get_chrom_from_breakend_alt(alt: &str) -> Option<&str> {
    let splitter = if alt.contains('[') {
        '['
    } else if alt.contains(']') {
        ']'
    } else {
        return None;
    };
    let mate = alt.split(splitter).find(|x| x.contains(':'))?;
    mate.split(':').next()
}

/// Get the chromosome of the second breakend
///
/// This is taken from the CHR2 INFO field when available, then from a breakend ALT allele, and
/// otherwise defaults to the record's own chromosome.
///
fn get_chrom2(record: &impl VariantRecord) -> String {
    if let Some(chr2) = record.info_value(CHR2_INFO_KEY) {
        return chr2;
    }
    let alt = String::from_utf8_lossy(record.alt_allele());
    match get_chrom_from_breakend_alt(&alt) {
        Some(x) => x.to_string(),
        None => record.chrom().to_string(),
    }
}

/// Determine the SV type of a variant record
///
/// Rules are applied in a fixed precedence order:
/// 1. Breakends on different chromosomes are TRA
/// 2. STRANDS of '--' or '++' are INV
/// 3. STRANDS of '-+' is DUP
/// 4. A type hint containing 'INS' or 'DEL' gives that type
/// 5. A coordinate length of 0 or 1 is INS
/// 6. A negative length hint is DEL
/// 7. Anything else defaults to DEL, with a warning sent to `diagnostics`
///
/// Classification always succeeds. Malformed optional fields are treated as absent.
///
pub fn get_sv_type(
    record: &impl VariantRecord,
    field_names: &InfoFieldNames,
    diagnostics: &mut dyn DiagnosticsSink,
) -> SVType {
    let chrom1 = record.chrom();
    let chrom2 = get_chrom2(record);
    if chrom1 != chrom2 {
        return SVType::Tra;
    }

    let strands = record.info_value(STRANDS_INFO_KEY);
    match strands.as_deref() {
        Some("--") | Some("++") => return SVType::Inv,
        Some("-+") => return SVType::Dup,
        _ => {}
    }

    if let Some(type_hint) = record.info_value(&field_names.sv_type) {
        if type_hint.contains("INS") {
            return SVType::Ins;
        }
        if type_hint.contains("DEL") {
            return SVType::Del;
        }
    }

    if let Ok(coord_length) = get_sv_length_from_coordinates(record) {
        if coord_length == 0 || coord_length == 1 {
            return SVType::Ins;
        }
    }

    if let Ok(Some(len_hint)) = get_info_int(record, &field_names.sv_len) {
        if len_hint < 0 {
            return SVType::Del;
        }
    }

    diagnostics.warn(&format!(
        "Can't determine the SV type for VCF record {}. Defaulting to DEL",
        record.describe()
    ));
    SVType::Del
}
