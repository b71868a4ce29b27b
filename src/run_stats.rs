//! Track stats for a single report run
//!

use std::fs::File;

use camino::Utf8Path;
use log::info;
use serde::Serialize;

use crate::errors::SvStatsError;

/// How a single variant record contributed to the report
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordOutcome {
    Counted,

    /// The record's SV type was not among the requested report types
    FilteredType,

    /// The record's value fell outside of all bins
    OutOfRange,
}

#[derive(Default, Serialize)]
pub struct RunStats {
    pub record_count: usize,
    pub counted_record_count: usize,
    pub filtered_type_record_count: usize,
    pub out_of_range_record_count: usize,

    /// Records skipped because a required field was missing or malformed
    ///
    /// This can only be non-zero when invalid records are skipped instead of ending the run.
    pub invalid_record_count: usize,

    pub diagnostic_warning_count: usize,
    pub diagnostic_error_count: usize,
}

impl RunStats {
    pub fn add_outcome(&mut self, outcome: RecordOutcome) {
        match outcome {
            RecordOutcome::Counted => self.counted_record_count += 1,
            RecordOutcome::FilteredType => self.filtered_type_record_count += 1,
            RecordOutcome::OutOfRange => self.out_of_range_record_count += 1,
        }
    }

    pub fn log_summary(&self) {
        info!("Variant records read: {}", self.record_count);
        info!("Variant records counted: {}", self.counted_record_count);
        info!(
            "Variant records excluded by type: {}",
            self.filtered_type_record_count
        );
        if self.out_of_range_record_count > 0 {
            info!(
                "Variant records outside of all bins: {}",
                self.out_of_range_record_count
            );
        }
        if self.invalid_record_count > 0 {
            info!(
                "Invalid variant records skipped: {}",
                self.invalid_record_count
            );
        }
        info!(
            "Record diagnostic warnings: {}",
            self.diagnostic_warning_count
        );
        if self.diagnostic_error_count > 0 {
            info!(
                "Record diagnostic errors: {}",
                self.diagnostic_error_count
            );
        }
    }
}

/// Write run_stats structure out in json format
pub fn write_run_stats(filename: &Utf8Path, run_stats: &RunStats) -> Result<(), SvStatsError> {
    info!("Writing run statistics to file: '{filename}'");

    let f = File::create(filename)?;
    serde_json::to_writer_pretty(&f, &run_stats).map_err(std::io::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_outcome() {
        let mut stats = RunStats::default();
        stats.add_outcome(RecordOutcome::Counted);
        stats.add_outcome(RecordOutcome::Counted);
        stats.add_outcome(RecordOutcome::FilteredType);
        stats.add_outcome(RecordOutcome::OutOfRange);
        assert_eq!(stats.counted_record_count, 2);
        assert_eq!(stats.filtered_type_record_count, 1);
        assert_eq!(stats.out_of_range_record_count, 1);
    }

    #[test]
    fn test_write_run_stats() {
        let dir = tempfile::tempdir().unwrap();
        let filename = camino::Utf8PathBuf::from_path_buf(dir.path().join("stats.json")).unwrap();
        let stats = RunStats {
            record_count: 3,
            counted_record_count: 2,
            ..Default::default()
        };
        write_run_stats(&filename, &stats).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&filename).unwrap()).unwrap();
        assert_eq!(json["record_count"], 3);
        assert_eq!(json["counted_record_count"], 2);
        assert_eq!(json["invalid_record_count"], 0);
    }
}
