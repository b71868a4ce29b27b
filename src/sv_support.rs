use crate::errors::SvStatsError;
use crate::variant_record::{InfoFieldNames, VariantRecord, get_info_int};

/// Get the number of reads supporting an SV record
///
/// A non-zero value in the support count field is used directly. Otherwise support is the
/// number of entries in the comma-separated read names field, or zero if that is absent or
/// empty.
///
pub fn get_sv_support_count(
    record: &impl VariantRecord,
    field_names: &InfoFieldNames,
) -> Result<i64, SvStatsError> {
    let support = get_info_int(record, &field_names.support)?.unwrap_or(0);
    if support < 0 {
        return Err(SvStatsError::NegativeSupport {
            value: support,
            record: record.describe(),
        });
    }
    if support != 0 {
        return Ok(support);
    }

    let read_names = record.info_value(&field_names.read_names).unwrap_or_default();
    let reads = read_names.split(',').collect::<Vec<_>>();
    if reads.len() > 1 || !reads[0].is_empty() {
        Ok(reads.len() as i64)
    } else {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant_record::test_utils::TestRecord;

    fn support(rec: &TestRecord) -> Result<i64, SvStatsError> {
        get_sv_support_count(rec, &InfoFieldNames::default())
    }

    #[test]
    fn test_support_field() {
        let rec = TestRecord::new("chr1", 100)
            .info("RE", "7")
            .info("RNAMES", "a,b");
        assert_eq!(support(&rec).unwrap(), 7);
    }

    #[test]
    fn test_read_name_fallback() {
        let rec = TestRecord::new("chr1", 100).info("RNAMES", "readA,readB,readC");
        assert_eq!(support(&rec).unwrap(), 3);

        // A zero count also falls back to the read names
        let rec = TestRecord::new("chr1", 100)
            .info("RE", "0")
            .info("RNAMES", "readA");
        assert_eq!(support(&rec).unwrap(), 1);
    }

    #[test]
    fn test_empty_read_names_counted() {
        let rec = TestRecord::new("chr1", 100).info("RNAMES", "readA,,readB");
        assert_eq!(support(&rec).unwrap(), 3);

        let rec = TestRecord::new("chr1", 100).info("RNAMES", ",");
        assert_eq!(support(&rec).unwrap(), 2);
    }

    #[test]
    fn test_no_support() {
        let rec = TestRecord::new("chr1", 100).info("RNAMES", "");
        assert_eq!(support(&rec).unwrap(), 0);

        let rec = TestRecord::new("chr1", 100);
        assert_eq!(support(&rec).unwrap(), 0);
    }

    #[test]
    fn test_invalid_support() {
        let rec = TestRecord::new("chr1", 100).info("RE", "-2");
        assert!(matches!(
            support(&rec),
            Err(SvStatsError::NegativeSupport { value: -2, .. })
        ));

        let rec = TestRecord::new("chr1", 100).info("RE", "many");
        assert!(matches!(
            support(&rec),
            Err(SvStatsError::MalformedInfoValue { .. })
        ));
    }

    #[test]
    fn test_custom_fields() {
        let field_names = InfoFieldNames {
            support: "SUPPORT".to_string(),
            read_names: "READS".to_string(),
            ..Default::default()
        };
        let rec = TestRecord::new("chr1", 100)
            .info("RE", "9")
            .info("READS", "x,y");
        assert_eq!(get_sv_support_count(&rec, &field_names).unwrap(), 2);
    }
}
