use camino::Utf8PathBuf;
use clap::{ArgAction, Args};
use simple_error::SimpleResult;

use super::defaults::{DEFAULT_REPORT_TYPES, DEFAULT_SUPPORT_BINS};
use super::utils::{
    check_info_field_name, check_required_filename, parse_bin_list, parse_report_types,
};
use crate::sv_type::SVType;
use crate::variant_record::InfoFieldNames;

#[derive(Args)]
pub struct SvSupportsSettings {
    /// SV calls in VCF or BCF format
    #[arg(value_name = "VCF")]
    pub vcf_filename: String,

    /// Comma-separated read support bin boundaries. Negative values are ignored, and 0 is always
    /// included.
    #[arg(
        long = "supports",
        value_name = "BINS",
        default_value = DEFAULT_SUPPORT_BINS,
        allow_hyphen_values = true
    )]
    pub supports_list: String,

    /// This value will be filled in by supports_list
    #[arg(skip)]
    pub supports: Vec<i64>,

    /// Comma-separated SV types to report. Records of any other type are not counted.
    #[arg(long = "types", value_name = "TYPES", default_value = DEFAULT_REPORT_TYPES)]
    pub types_list: String,

    /// This value will be filled in by types_list
    #[arg(skip)]
    pub sv_types: Vec<SVType>,

    /// Report file. Output is written to stdout by default
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Don't write the header row
    #[arg(long = "no-out-header", action = ArgAction::SetFalse)]
    pub out_header: bool,

    /// Don't write the total-by-bin column
    #[arg(long = "no-out-total-b", action = ArgAction::SetFalse)]
    pub out_total_bins: bool,

    /// Don't write the per-type columns
    #[arg(long = "no-out-type", action = ArgAction::SetFalse)]
    pub out_indiv_types: bool,

    /// INFO field holding the supporting read count
    #[arg(long, value_name = "KEY", default_value = "RE")]
    pub info_support_field: String,

    /// INFO field holding the comma-separated supporting read names. This is used when the
    /// supporting read count is absent or zero.
    #[arg(long, value_name = "KEY", default_value = "RNAMES")]
    pub info_reads_field: String,

    /// INFO field holding the SV type
    #[arg(long, value_name = "KEY", default_value = "SVTYPE")]
    pub info_type_field: String,

    /// INFO field holding the SV length
    #[arg(long, value_name = "KEY", default_value = "SVLEN")]
    pub info_len_field: String,

    /// Skip records with a malformed support field instead of stopping with an error
    #[arg(long)]
    pub skip_invalid_records: bool,

    /// Write run statistics in json format to this file
    #[arg(long, value_name = "FILE")]
    pub run_stats: Option<Utf8PathBuf>,
}

impl SvSupportsSettings {
    pub fn field_names(&self) -> InfoFieldNames {
        InfoFieldNames {
            sv_type: self.info_type_field.clone(),
            sv_len: self.info_len_field.clone(),
            support: self.info_support_field.clone(),
            read_names: self.info_reads_field.clone(),
        }
    }
}

/// Validate settings and update to parameters that can't be processed automatically by clap.
///
/// Assumes that the logger is not setup
///
pub fn validate_and_fix_sv_supports_settings(
    mut settings: SvSupportsSettings,
) -> SimpleResult<SvSupportsSettings> {
    check_required_filename(&settings.vcf_filename, "variant")?;
    check_info_field_name(&settings.info_support_field, "info-support-field")?;
    check_info_field_name(&settings.info_reads_field, "info-reads-field")?;
    check_info_field_name(&settings.info_type_field, "info-type-field")?;
    check_info_field_name(&settings.info_len_field, "info-len-field")?;

    settings.supports = parse_bin_list(&settings.supports_list, "supports")?;
    settings.sv_types = parse_report_types(&settings.types_list)?;

    Ok(settings)
}
