use std::fmt;

/// Errors raised while turning variant records into report observations
///
/// Record-level variants carry a description of the offending record so that the message can be
/// reported without access to the record itself.
///
#[derive(Debug)]
pub enum SvStatsError {
    /// END is required to size the variant but is not present, and no length hint is available
    MissingEnd { record: String },

    /// A numeric INFO value could not be interpreted as a number
    MalformedInfoValue {
        key: String,
        value: String,
        record: String,
    },

    /// The read support count field holds a negative value
    NegativeSupport { value: i64, record: String },

    Htslib(rust_htslib::errors::Error),

    Io(std::io::Error),
}

impl SvStatsError {
    /// True for errors describing a single malformed record, as opposed to input/output failures
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            SvStatsError::MissingEnd { .. }
                | SvStatsError::MalformedInfoValue { .. }
                | SvStatsError::NegativeSupport { .. }
        )
    }
}

impl std::error::Error for SvStatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SvStatsError::Htslib(e) => Some(e),
            SvStatsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for SvStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvStatsError::MissingEnd { record } => {
                write!(f, "No END field in VCF record: {record}")
            }
            SvStatsError::MalformedInfoValue { key, value, record } => write!(
                f,
                "Can't parse numeric value '{value}' from INFO field '{key}' in VCF record: {record}"
            ),
            SvStatsError::NegativeSupport { value, record } => write!(
                f,
                "Negative read support value {value} in VCF record: {record}"
            ),
            SvStatsError::Htslib(e) => write!(f, "Error reading variant file: {e}"),
            SvStatsError::Io(e) => write!(f, "Error writing report: {e}"),
        }
    }
}

impl From<rust_htslib::errors::Error> for SvStatsError {
    fn from(e: rust_htslib::errors::Error) -> Self {
        SvStatsError::Htslib(e)
    }
}

impl From<std::io::Error> for SvStatsError {
    fn from(e: std::io::Error) -> Self {
        SvStatsError::Io(e)
    }
}
