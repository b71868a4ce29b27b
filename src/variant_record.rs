//! Read-only view of a variant record used by all SV classification and sizing logic
//!

use crate::errors::SvStatsError;

/// INFO key holding the chromosome of the second breakend
pub const CHR2_INFO_KEY: &str = "CHR2";

/// INFO key holding the variant end coordinate
pub const END_INFO_KEY: &str = "END";

/// INFO key holding the strand orientation of the two breakends (e.g. '+-', '-+', '++')
pub const STRANDS_INFO_KEY: &str = "STRANDS";

/// Accessors for the parts of a VCF record needed to classify and size an SV
///
pub trait VariantRecord {
    /// Chromosome of the record's position
    fn chrom(&self) -> &str;

    /// 1-indexed VCF POS value
    fn pos(&self) -> i64;

    fn ref_allele(&self) -> &[u8];

    /// First ALT allele, or an empty slice if there is none
    fn alt_allele(&self) -> &[u8];

    /// Textual value of an INFO field
    ///
    /// Multiple values are joined with commas. Absent fields, and fields holding only the VCF
    /// missing value '.', return None.
    ///
    fn info_value(&self, key: &str) -> Option<String>;

    /// Short description of the record used in diagnostic messages
    fn describe(&self) -> String;
}

/// Names of the INFO fields consulted for the user-configurable annotations
///
#[derive(Clone, Debug)]
pub struct InfoFieldNames {
    pub sv_type: String,
    pub sv_len: String,
    pub support: String,
    pub read_names: String,
}

impl Default for InfoFieldNames {
    fn default() -> Self {
        Self {
            sv_type: "SVTYPE".to_string(),
            sv_len: "SVLEN".to_string(),
            support: "RE".to_string(),
            read_names: "RNAMES".to_string(),
        }
    }
}

/// Largest magnitude accepted for an integer INFO value
///
/// This is far above any genomic coordinate or length, and low enough that coordinate
/// differences and absolute values can't overflow an i64.
///
const MAX_INFO_INT_MAGNITUDE: f64 = 1e15;

/// Parse one textual numeric INFO value to an integer
///
/// Only the first comma-separated value is used. The value is read as a float first so that
/// decimal and scientific notation are accepted, then truncated toward zero.
///
fn parse_info_int(value: &str) -> Option<i64> {
    let first = value.split(',').next()?.trim();
    let x = first.parse::<f64>().ok()?;
    if !x.is_finite() || x.abs() > MAX_INFO_INT_MAGNITUDE {
        return None;
    }
    Some(x.trunc() as i64)
}

/// Get an optional integer INFO value
///
/// Returns Ok(None) if the field is absent, and an error if the field is present but can't be
/// interpreted as a finite number.
///
pub fn get_info_int(
    record: &impl VariantRecord,
    key: &str,
) -> Result<Option<i64>, SvStatsError> {
    let Some(value) = record.info_value(key) else {
        return Ok(None);
    };
    if value.trim().is_empty() {
        return Ok(None);
    }
    match parse_info_int(&value) {
        Some(x) => Ok(Some(x)),
        None => Err(SvStatsError::MalformedInfoValue {
            key: key.to_string(),
            value,
            record: record.describe(),
        }),
    }
}

/// Get the variant size implied by the END and POS coordinates
///
pub fn get_sv_length_from_coordinates(record: &impl VariantRecord) -> Result<i64, SvStatsError> {
    match get_info_int(record, END_INFO_KEY)? {
        Some(end) => Ok((end - record.pos()).abs()),
        None => Err(SvStatsError::MissingEnd {
            record: record.describe(),
        }),
    }
}

/// Get the variant size implied by the difference in REF and ALT allele lengths
///
pub fn get_sv_length_from_ref_alt(record: &impl VariantRecord) -> i64 {
    (record.alt_allele().len() as i64 - record.ref_allele().len() as i64).abs()
}

#[cfg(test)]
pub mod test_utils {
    use std::collections::BTreeMap;

    use super::VariantRecord;

    /// In-memory variant record for unit tests
    #[derive(Clone, Default)]
    pub struct TestRecord {
        pub chrom: String,
        pub pos: i64,
        pub ref_allele: Vec<u8>,
        pub alt_allele: Vec<u8>,
        pub info: BTreeMap<String, String>,
    }

    impl TestRecord {
        pub fn new(chrom: &str, pos: i64) -> Self {
            Self {
                chrom: chrom.to_string(),
                pos,
                ref_allele: b"N".to_vec(),
                alt_allele: b"<SV>".to_vec(),
                info: BTreeMap::new(),
            }
        }

        pub fn alleles(mut self, ref_allele: &str, alt_allele: &str) -> Self {
            self.ref_allele = ref_allele.as_bytes().to_vec();
            self.alt_allele = alt_allele.as_bytes().to_vec();
            self
        }

        pub fn info(mut self, key: &str, value: &str) -> Self {
            self.info.insert(key.to_string(), value.to_string());
            self
        }
    }

    impl VariantRecord for TestRecord {
        fn chrom(&self) -> &str {
            &self.chrom
        }

        fn pos(&self) -> i64 {
            self.pos
        }

        fn ref_allele(&self) -> &[u8] {
            &self.ref_allele
        }

        fn alt_allele(&self) -> &[u8] {
            &self.alt_allele
        }

        fn info_value(&self, key: &str) -> Option<String> {
            self.info.get(key).filter(|x| x.as_str() != ".").cloned()
        }

        fn describe(&self) -> String {
            format!("{}:{}", self.chrom, self.pos)
        }
    }
}
