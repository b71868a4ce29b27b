//! The closed set of structural variant types recognized by all reports
//!

use std::fmt;
use std::str::FromStr;

use strum::EnumCount;

/// Structural variant type
///
/// Display output is the canonical upper-case VCF style label.
///
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SVType {
    Ins,
    Del,
    Dup,
    Inv,
    Tra,
}

impl SVType {
    /// All types in canonical report order
    pub const ALL: [SVType; SVType::COUNT] = [
        SVType::Ins,
        SVType::Del,
        SVType::Dup,
        SVType::Inv,
        SVType::Tra,
    ];

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvTypeParseError {
    pub value: String,
}

impl std::error::Error for SvTypeParseError {}

impl fmt::Display for SvTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not determine SV type from string '{}'. Supported types are: {}",
            self.value,
            SVType::ALL.map(|x| x.as_str()).join(",")
        )
    }
}

impl FromStr for SVType {
    type Err = SvTypeParseError;

    /// Case-insensitive exact match against the canonical type labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SVType::ALL
            .into_iter()
            .find(|x| x.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SvTypeParseError {
                value: s.to_string(),
            })
    }
}

/// Check that every name in `names` is one of the recognized SV types
pub fn is_sv_type_subset<S: AsRef<str>>(names: &[S]) -> bool {
    names.iter().all(|x| x.as_ref().parse::<SVType>().is_ok())
}

/// Parse a comma-separated list of SV type names
///
/// Entries are trimmed before parsing. Repeated types are reported once, in order of first
/// appearance.
///
pub fn parse_sv_type_list(list: &str) -> Result<Vec<SVType>, SvTypeParseError> {
    let mut sv_types = Vec::new();
    for name in list.split(',') {
        let sv_type = name.trim().parse::<SVType>()?;
        if !sv_types.contains(&sv_type) {
            sv_types.push(sv_type);
        }
    }
    Ok(sv_types)
}
