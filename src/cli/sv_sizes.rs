use camino::Utf8PathBuf;
use clap::{ArgAction, Args};
use simple_error::SimpleResult;

use super::defaults::{DEFAULT_LENGTH_BINS, DEFAULT_REPORT_TYPES};
use super::utils::{
    check_info_field_name, check_required_filename, parse_bin_list, parse_report_types,
};
use crate::sv_type::SVType;
use crate::variant_record::InfoFieldNames;

#[derive(Args)]
pub struct SvSizesSettings {
    /// SV calls in VCF or BCF format
    #[arg(value_name = "VCF")]
    pub vcf_filename: String,

    /// Comma-separated length bin boundaries. Each value is the inclusive lower bound of a bin
    /// extending to the next larger value.
    #[arg(
        long = "bins",
        value_name = "BINS",
        default_value = DEFAULT_LENGTH_BINS,
        allow_hyphen_values = true
    )]
    pub bins_list: String,

    /// This value will be filled in by bins_list
    #[arg(skip)]
    pub bins: Vec<i64>,

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

    /// Don't write the total-by-type row
    #[arg(long = "no-out-total-t", action = ArgAction::SetFalse)]
    pub out_total_type: bool,

    /// Don't write the total-by-bin column
    #[arg(long = "no-out-total-s", action = ArgAction::SetFalse)]
    pub out_total_size: bool,

    /// Don't write the individual bin rows
    #[arg(long = "no-out-indiv-bins", action = ArgAction::SetFalse)]
    pub out_indiv_bins: bool,

    /// Keep the sign of SV lengths, so that deletions are binned as negative values
    #[arg(long = "no-abs-length", action = ArgAction::SetFalse)]
    pub abs_length: bool,

    /// INFO field holding the SV length
    #[arg(long, value_name = "KEY", default_value = "SVLEN")]
    pub info_len_field: String,

    /// INFO field holding the SV type
    #[arg(long, value_name = "KEY", default_value = "SVTYPE")]
    pub info_type_field: String,

    /// Skip records with a missing or malformed required field instead of stopping with an error
    #[arg(long)]
    pub skip_invalid_records: bool,

    /// Write run statistics in json format to this file
    #[arg(long, value_name = "FILE")]
    pub run_stats: Option<Utf8PathBuf>,
}

impl SvSizesSettings {
    pub fn field_names(&self) -> InfoFieldNames {
        InfoFieldNames {
            sv_type: self.info_type_field.clone(),
            sv_len: self.info_len_field.clone(),
            ..Default::default()
        }
    }
}

/// Validate settings and update to parameters that can't be processed automatically by clap.
///
/// Assumes that the logger is not setup
///
pub fn validate_and_fix_sv_sizes_settings(
    mut settings: SvSizesSettings,
) -> SimpleResult<SvSizesSettings> {
    check_required_filename(&settings.vcf_filename, "variant")?;
    check_info_field_name(&settings.info_len_field, "info-len-field")?;
    check_info_field_name(&settings.info_type_field, "info-type-field")?;

    settings.bins = parse_bin_list(&settings.bins_list, "bins")?;
    settings.sv_types = parse_report_types(&settings.types_list)?;

    Ok(settings)
}
