//! Sink for per-record anomalies found during classification and binning
//!
//! Core routines report soft anomalies through this interface instead of writing to the global
//! logger directly, so they can be tested without capturing process output.
//!

pub trait DiagnosticsSink {
    fn warn(&mut self, msg: &str);

    fn error(&mut self, msg: &str);
}

/// Forward diagnostics to the process logger
#[derive(Default)]
pub struct LogDiagnostics {
    pub warning_count: usize,
    pub error_count: usize,
}

impl DiagnosticsSink for LogDiagnostics {
    fn warn(&mut self, msg: &str) {
        self.warning_count += 1;
        log::warn!("{msg}");
    }

    fn error(&mut self, msg: &str) {
        self.error_count += 1;
        log::error!("{msg}");
    }
}

/// Keep all diagnostics in memory
#[cfg(test)]
#[derive(Default)]
pub struct RecordingDiagnostics {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

#[cfg(test)]
impl DiagnosticsSink for RecordingDiagnostics {
    fn warn(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
