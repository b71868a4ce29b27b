//! Histogram of SV lengths by type
//!

use std::io::Write;

use itertools::Itertools;
use log::{debug, info};

use crate::bcf_record::scan_variant_file;
use crate::bins::{BinBoundaries, BinCounts, bin_label};
use crate::classify::get_sv_type;
use crate::cli::{SharedSettings, SvSizesSettings};
use crate::diagnostics::{DiagnosticsSink, LogDiagnostics};
use crate::errors::SvStatsError;
use crate::os_utils::open_output_writer;
use crate::run_stats::{RecordOutcome, RunStats, write_run_stats};
use crate::sv_length::get_sv_length;
use crate::sv_type::SVType;
use crate::variant_record::{InfoFieldNames, VariantRecord};

/// Sections of the length histogram report to write
#[derive(Clone, Debug)]
pub struct SizeReportOptions {
    pub header: bool,
    pub total_by_type: bool,
    pub total_by_bin: bool,
    pub indiv_bins: bool,
}

impl Default for SizeReportOptions {
    fn default() -> Self {
        Self {
            header: true,
            total_by_type: true,
            total_by_bin: true,
            indiv_bins: true,
        }
    }
}

impl SizeReportOptions {
    fn from_settings(settings: &SvSizesSettings) -> Self {
        Self {
            header: settings.out_header,
            total_by_type: settings.out_total_type,
            total_by_bin: settings.out_total_size,
            indiv_bins: settings.out_indiv_bins,
        }
    }
}

pub struct SizeHistogram {
    counts: BinCounts,
    field_names: InfoFieldNames,
    abs_length: bool,
}

impl SizeHistogram {
    pub fn new(
        bins: &[i64],
        sv_types: &[SVType],
        field_names: InfoFieldNames,
        abs_length: bool,
    ) -> Self {
        let boundaries = BinBoundaries::for_lengths(bins);
        Self {
            counts: BinCounts::new(boundaries, sv_types),
            field_names,
            abs_length,
        }
    }

    pub fn counts(&self) -> &BinCounts {
        &self.counts
    }

    /// Classify and size one record, then count it in its length bin
    ///
    /// Records with a type outside of the report types are not sized or counted.
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

        let sv_length = get_sv_length(
            record,
            Some(sv_type),
            self.abs_length,
            &self.field_names,
            diagnostics,
        )?;

        match self.counts.boundaries().bin_index(sv_length) {
            Some(bin_index) => {
                self.counts.add(bin_index, sv_type);
                Ok(RecordOutcome::Counted)
            }
            None => {
                diagnostics.error(&format!(
                    "Length {sv_length} of {sv_type} record is below all length bins, record is not counted: {}",
                    record.describe()
                ));
                Ok(RecordOutcome::OutOfRange)
            }
        }
    }

    /// Write the histogram in csv format
    ///
    /// Each bin row is labeled with its half-open length range. Lengths at or above the upper
    /// sentinel are only reflected in the total-by-type row.
    ///
    pub fn write_report(
        &self,
        options: &SizeReportOptions,
        out: &mut dyn Write,
    ) -> std::io::Result<()> {
        let sv_types = self.counts.sv_types();

        if options.header {
            let mut header = vec!["bin".to_string()];
            header.extend(sv_types.iter().map(|x| x.to_string()));
            if options.total_by_bin {
                header.push("total".to_string());
            }
            writeln!(out, "{}", header.join(","))?;
        }

        if options.indiv_bins {
            let boundaries = self.counts.boundaries().values();
            for (bin_index, (&lv, &rv)) in boundaries.iter().tuple_windows().enumerate() {
                let values = self.counts.bin_counts(bin_index);
                let mut row = format!(
                    "[{} - {}),{}",
                    bin_label(lv),
                    bin_label(rv),
                    values.iter().join(",")
                );
                if options.total_by_bin {
                    row += &format!(",{}", values.iter().sum::<u64>());
                }
                writeln!(out, "{row}")?;
            }
        }

        if options.total_by_type {
            writeln!(out, "total,{}", self.counts.type_totals().iter().join(","))?;
        }
        Ok(())
    }
}

/// Run the SV length histogram report
///
pub fn run_sv_sizes(
    _shared_settings: &SharedSettings,
    settings: &SvSizesSettings,
) -> Result<(), SvStatsError> {
    let mut histogram = SizeHistogram::new(
        &settings.bins,
        &settings.sv_types,
        settings.field_names(),
        settings.abs_length,
    );
    debug!(
        "bins: [{}]",
        histogram.counts().boundaries().values().iter().join(",")
    );

    info!(
        "Reading SV calls from file: '{}'",
        settings.vcf_filename
    );

    let mut run_stats = RunStats::default();
    let mut diagnostics = LogDiagnostics::default();
    scan_variant_file(
        &settings.vcf_filename,
        settings.skip_invalid_records,
        &mut run_stats,
        |record| histogram.add_record(record, &mut diagnostics),
    )?;
    run_stats.diagnostic_warning_count = diagnostics.warning_count;
    run_stats.diagnostic_error_count = diagnostics.error_count;

    let mut out = open_output_writer(settings.output.as_deref())?;
    histogram.write_report(&SizeReportOptions::from_settings(settings), &mut out)?;
    out.flush()?;

    run_stats.log_summary();
    if let Some(filename) = &settings.run_stats {
        write_run_stats(filename, &run_stats)?;
    }
    Ok(())
}
