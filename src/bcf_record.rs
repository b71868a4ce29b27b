//! Expose htslib VCF/BCF records through the [VariantRecord] interface
//!

use log::warn;
use rust_htslib::bcf::{self, Read, header::TagType};

use crate::errors::SvStatsError;
use crate::run_stats::{RecordOutcome, RunStats};
use crate::variant_record::VariantRecord;

pub struct BcfVariantRecord<'a> {
    rec: &'a bcf::Record,
    chrom: String,
    alleles: Vec<&'a [u8]>,
}

impl<'a> BcfVariantRecord<'a> {
    pub fn new(rec: &'a bcf::Record) -> Result<Self, SvStatsError> {
        let chrom = match rec.rid() {
            Some(rid) => {
                let chrom_bytes = rec.header().rid2name(rid)?;
                String::from_utf8_lossy(chrom_bytes).to_string()
            }
            None => String::new(),
        };
        Ok(Self {
            rec,
            chrom,
            alleles: rec.alleles(),
        })
    }
}

/// Join values from a multi-valued INFO field, treating a field with no values as absent
fn join_info_values<T: ToString>(values: impl Iterator<Item = T>) -> Option<String> {
    let values = values.map(|x| x.to_string()).collect::<Vec<_>>();
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

impl VariantRecord for BcfVariantRecord<'_> {
    fn chrom(&self) -> &str {
        &self.chrom
    }

    fn pos(&self) -> i64 {
        // htslib positions are zero-indexed
        self.rec.pos() + 1
    }

    fn ref_allele(&self) -> &[u8] {
        self.alleles.first().copied().unwrap_or_default()
    }

    fn alt_allele(&self) -> &[u8] {
        self.alleles.get(1).copied().unwrap_or_default()
    }

    fn info_value(&self, key: &str) -> Option<String> {
        let key = key.as_bytes();

        // A key undefined in the header is treated the same as a key absent from this record
        let (tag_type, _) = self.rec.header().info_type(key).ok()?;

        let mut info = self.rec.info(key);
        match tag_type {
            TagType::Integer => {
                let values = info.integer().ok()??;
                join_info_values(
                    values
                        .iter()
                        .filter(|&&x| !is_missing_or_end_integer(x)),
                )
            }
            TagType::Float => {
                let values = info.float().ok()??;
                join_info_values(
                    values
                        .iter()
                        .filter(|&&x| !is_missing_or_end_float(x)),
                )
            }
            TagType::String => {
                let values = info.string().ok()??;
                // Empty tokens are kept so that list lengths match the raw field
                if values.iter().all(|x| *x == b".") {
                    return None;
                }
                join_info_values(values.iter().map(|x| String::from_utf8_lossy(x)))
            }
            TagType::Flag => {
                if info.flag().ok()? {
                    Some(String::new())
                } else {
                    None
                }
            }
        }
    }

    fn describe(&self) -> String {
        match self.rec.to_vcf_string() {
            Ok(x) => x.trim_end().to_string(),
            Err(_) => format!(
                "{}:{} {}",
                self.chrom,
                self.pos(),
                String::from_utf8_lossy(self.rec.id().as_slice())
            ),
        }
    }
}

// Imported non-public missing value constants from htslib
const MISSING_INTEGER: i32 = i32::MIN;
const VECTOR_END_INTEGER: i32 = i32::MIN + 1;
const MISSING_FLOAT_BITS: u32 = 0x7F80_0001;
const VECTOR_END_FLOAT_BITS: u32 = 0x7F80_0002;

fn is_missing_or_end_integer(x: i32) -> bool {
    x == MISSING_INTEGER || x == VECTOR_END_INTEGER
}

fn is_missing_or_end_float(x: f32) -> bool {
    let bits = x.to_bits();
    bits == MISSING_FLOAT_BITS || bits == VECTOR_END_FLOAT_BITS
}

/// Stream every record of a VCF or BCF file through `process_record`
///
/// Each record is read once. Record outcomes are tallied in `run_stats`.
///
/// # Arguments
/// * `skip_invalid_records` - If true, records failing with a record-level error are logged and
///   skipped. Otherwise the first such error ends the scan.
///
pub fn scan_variant_file<F>(
    filename: &str,
    skip_invalid_records: bool,
    run_stats: &mut RunStats,
    mut process_record: F,
) -> Result<(), SvStatsError>
where
    F: FnMut(&BcfVariantRecord) -> Result<RecordOutcome, SvStatsError>,
{
    let mut reader = bcf::Reader::from_path(filename)?;
    let mut rec = reader.empty_record();
    while let Some(r) = reader.read(&mut rec) {
        r?;
        run_stats.record_count += 1;

        let variant = BcfVariantRecord::new(&rec)?;
        match process_record(&variant) {
            Ok(outcome) => run_stats.add_outcome(outcome),
            Err(err) if skip_invalid_records && err.is_record_error() => {
                warn!("Skipping invalid record. {err}");
                run_stats.invalid_record_count += 1;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_vcf(dir: &tempfile::TempDir, records: &str) -> String {
        let filename = dir.path().join("calls.vcf");
        let header = "\
##fileformat=VCFv4.2
##contig=<ID=chr1,length=1000000>
##INFO=<ID=SVTYPE,Number=1,Type=String,Description=\"Type of structural variant\">
##INFO=<ID=SVLEN,Number=1,Type=Float,Description=\"Length of structural variant\">
##INFO=<ID=END,Number=1,Type=Integer,Description=\"End position of structural variant\">
##INFO=<ID=RNAMES,Number=.,Type=String,Description=\"Supporting read names\">
##INFO=<ID=IMPRECISE,Number=0,Type=Flag,Description=\"Imprecise structural variant\">
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
";
        std::fs::write(&filename, format!("{header}{records}")).unwrap();
        filename.to_str().unwrap().to_string()
    }

    /// Read the named INFO values from every record of `filename`
    fn read_info_values(filename: &str, keys: &[&str]) -> Vec<Vec<Option<String>>> {
        let mut values = Vec::new();
        let mut run_stats = RunStats::default();
        scan_variant_file(filename, false, &mut run_stats, |record| {
            values.push(keys.iter().map(|&k| record.info_value(k)).collect());
            Ok(RecordOutcome::Counted)
        })
        .unwrap();
        assert_eq!(run_stats.record_count, values.len());
        values
    }

    #[test]
    fn test_record_fields() {
        let dir = tempfile::tempdir().unwrap();
        let vcf = write_vcf(
            &dir,
            "chr1\t1000\tsv1\tA\tACGT\t.\tPASS\tSVTYPE=INS;END=1000\n",
        );
        let mut run_stats = RunStats::default();
        scan_variant_file(&vcf, false, &mut run_stats, |record| {
            assert_eq!(record.chrom(), "chr1");
            assert_eq!(record.pos(), 1000);
            assert_eq!(record.ref_allele(), b"A");
            assert_eq!(record.alt_allele(), b"ACGT");
            Ok(RecordOutcome::Counted)
        })
        .unwrap();
        assert_eq!(run_stats.counted_record_count, 1);
    }

    #[test]
    fn test_info_value_types() {
        let dir = tempfile::tempdir().unwrap();
        let vcf = write_vcf(
            &dir,
            "\
chr1\t1000\tsv1\tN\t<DEL>\t.\tPASS\tSVTYPE=DEL;SVLEN=1.5e2;END=1150;IMPRECISE
chr1\t2000\tsv2\tN\t<DEL>\t.\tPASS\tSVTYPE=DEL;SVLEN=-30.5;RNAMES=readA,,readB
chr1\t3000\tsv3\tN\t<INS>\t.\tPASS\tSVTYPE=INS;RNAMES=.
",
        );
        let keys = ["SVLEN", "END", "IMPRECISE", "RNAMES", "UNDEFINED"];
        let values = read_info_values(&vcf, &keys);

        let to_strings = |x: [Option<&str>; 5]| x.map(|v| v.map(String::from)).to_vec();
        assert_eq!(
            values,
            vec![
                to_strings([Some("150"), Some("1150"), Some(""), None, None]),
                to_strings([Some("-30.5"), None, None, Some("readA,,readB"), None]),
                to_strings([None, None, None, None, None]),
            ]
        );
    }
}
