use itertools::Itertools;
use simple_error::{SimpleError, SimpleResult, bail};

use crate::sv_type::{SVType, is_sv_type_subset, parse_sv_type_list};

/// Check a required input filename
///
/// Assumes no logger has been configured yet
///
pub fn check_required_filename(filename: &str, label: &str) -> SimpleResult<()> {
    if filename.is_empty() {
        bail!("Must specify {} file", label);
    }
    let path = std::path::Path::new(&filename);
    if !path.exists() {
        bail!("Can't find specified {} file: '{}'", label, filename);
    }
    if !path.is_file() {
        bail!(
            "Specified {} file path does not appear to be a file: '{}'",
            label,
            filename
        );
    }
    Ok(())
}

/// Parse a comma-separated list of integer bin boundaries
///
pub fn parse_bin_list(list: &str, option_name: &str) -> SimpleResult<Vec<i64>> {
    let mut bins = Vec::new();
    for value in list.split(',') {
        match value.trim().parse::<i64>() {
            Ok(x) => bins.push(x),
            Err(_) => {
                bail!(
                    "--{} argument contains invalid integer value '{}': '{}'",
                    option_name,
                    value,
                    list
                );
            }
        }
    }
    Ok(bins)
}

/// Parse the SV types requested for a report
///
pub fn parse_report_types(list: &str) -> SimpleResult<Vec<SVType>> {
    let names = list.split(',').map(str::trim).collect::<Vec<_>>();
    if !is_sv_type_subset(&names) {
        bail!(
            "Supplied type list '{}' is not a subset of the standardized SV types: {}",
            list,
            SVType::ALL.iter().join(",")
        );
    }
    parse_sv_type_list(list).map_err(|err| {
        SimpleError::new(format!(
            "Supplied type list '{list}' is not a subset of the standardized SV types. {err}"
        ))
    })
}

/// Check that a user-specified INFO field name is usable
///
pub fn check_info_field_name(name: &str, option_name: &str) -> SimpleResult<()> {
    if name.is_empty() || name.contains([';', '=', ',']) || name.contains(char::is_whitespace) {
        bail!(
            "--{} argument is not a valid INFO field name: '{}'",
            option_name,
            name
        );
    }
    Ok(())
}
