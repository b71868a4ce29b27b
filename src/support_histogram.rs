//! Cumulative histogram of SV read support by type
//!

use std::io::Write;

use itertools::Itertools;
use log::{debug, info};

use crate::bcf_record::scan_variant_file;
use crate::bins::{BinBoundaries, BinCounts};
use crate::classify::get_sv_type;
use crate::cli::{SharedSettings, SvSupportsSettings};
use crate::diagnostics::{DiagnosticsSink, LogDiagnostics};
use crate::errors::SvStatsError;
use crate::os_utils::open_output_writer;
use crate::run_stats::{RecordOutcome, RunStats, write_run_stats};
use crate::sv_support::get_sv_support_count;
use crate::sv_type::SVType;
use crate::variant_record::{InfoFieldNames, VariantRecord};

/// Sections of the support histogram report to write
#[derive(Clone, Debug)]
pub struct SupportReportOptions {
    pub header: bool,
    pub total_by_bin: bool,
    pub indiv_types: bool,
}

impl Default for SupportReportOptions {
    fn default() -> Self {
        Self {
            header: true,
            total_by_bin: true,
            indiv_types: true,
        }
    }
}

impl SupportReportOptions {
    fn from_settings(settings: &SvSupportsSettings) -> Self {
        Self {
            header: settings.out_header,
            total_by_bin: settings.out_total_bins,
            indiv_types: settings.out_indiv_types,
        }
    }
}

/// For each support bin, the count of records of each type with support at or above the bin's
/// lower boundary
///
/// Rows are in ascending boundary order, and each row's counts are in the table's type order.
///
pub fn get_cumulative_support_rows(counts: &BinCounts) -> Vec<(i64, Vec<u64>)> {
    let mut remaining = counts.type_totals();
    let mut rows = Vec::new();
    for (bin_index, &bin_value) in counts.boundaries().values().iter().enumerate() {
        rows.push((bin_value, remaining.clone()));
        for (total, &count) in remaining.iter_mut().zip(counts.bin_counts(bin_index)) {
            *total -= count;
        }
    }
    assert!(
        remaining.iter().all(|&x| x == 0),
        "Cumulative support totals did not reach zero: {remaining:?}"
    );
    rows
}

pub struct SupportHistogram {
    counts: BinCounts,
    field_names: InfoFieldNames,
}

impl SupportHistogram {
    pub fn new(
        supports: &[i64],
        sv_types: &[SVType],
        field_names: InfoFieldNames,
        diagnostics: &mut dyn DiagnosticsSink,
    ) -> Self {
        let boundaries = BinBoundaries::for_supports(supports, diagnostics);
        Self {
            counts: BinCounts::new(boundaries, sv_types),
            field_names,
        }
    }

    pub fn counts(&self) -> &BinCounts {
        &self.counts
    }

    /// Classify one record and count it in its read support bin
    ///
    pub fn add_record(
        &mut self,
        record: &impl VariantRecord,
        diagnostics: &mut dyn DiagnosticsSink,
    ) -> Result<RecordOutcome, SvStatsError> {
        let sv_type = get_sv_type(record, &self.field_names, diagnostics);
        if !self.counts.includes_type(sv_type) {
            return Ok(RecordOutcome::FilteredType);
        }

        let support = get_sv_support_count(record, &self.field_names)?;

        // Zero is always the lowest support boundary, so every support count has a bin
        let bin_index = self
            .counts
            .boundaries()
            .bin_index(support)
            .unwrap_or_else(|| panic!("Support count {support} is below all support bins"));

        self.counts.add(bin_index, sv_type);
        Ok(RecordOutcome::Counted)
    }

    /// Write the cumulative histogram in csv format
    ///
    pub fn write_report(
        &self,
        options: &SupportReportOptions,
        out: &mut dyn Write,
    ) -> std::io::Result<()> {
        if options.header {
            let mut header = vec!["bin".to_string()];
            if options.indiv_types {
                header.extend(self.counts.sv_types().iter().map(|x| x.to_string()));
            }
            if options.total_by_bin {
                header.push("total".to_string());
            }
            writeln!(out, "{}", header.join(","))?;
        }

        for (bin_value, values) in get_cumulative_support_rows(&self.counts) {
            let mut row = bin_value.to_string();
            if options.indiv_types {
                row += &format!(",{}", values.iter().join(","));
            }
            if options.total_by_bin {
                row += &format!(",{}", values.iter().sum::<u64>());
            }
            writeln!(out, "{row}")?;
        }
        Ok(())
    }
}

/// Run the SV read support histogram report
///
pub fn run_sv_supports(
    _shared_settings: &SharedSettings,
    settings: &SvSupportsSettings,
) -> Result<(), SvStatsError> {
    let mut diagnostics = LogDiagnostics::default();
    let mut histogram = SupportHistogram::new(
        &settings.supports,
        &settings.sv_types,
        settings.field_names(),
        &mut diagnostics,
    );
    debug!(
        "bins: [{}]",
        histogram.counts().boundaries().values().iter().join(",")
    );

    info!("Reading SV calls from file: '{}'", settings.vcf_filename);

    let mut run_stats = RunStats::default();
    scan_variant_file(
        &settings.vcf_filename,
        settings.skip_invalid_records,
        &mut run_stats,
        |record| histogram.add_record(record, &mut diagnostics),
    )?;
    run_stats.diagnostic_warning_count = diagnostics.warning_count;
    run_stats.diagnostic_error_count = diagnostics.error_count;

    let mut out = open_output_writer(settings.output.as_deref())?;
    histogram.write_report(&SupportReportOptions::from_settings(settings), &mut out)?;
    out.flush()?;

    run_stats.log_summary();
    if let Some(filename) = &settings.run_stats {
        write_run_stats(filename, &run_stats)?;
    }
    Ok(())
}
