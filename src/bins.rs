//! Bin boundaries, bin assignment and per-type bin count tables shared by all histogram reports
//!

use itertools::Itertools;
use thousands::Separable;

use crate::diagnostics::DiagnosticsSink;
use crate::sv_type::SVType;

/// Lower sentinel bracketing all length bins
pub const MIN_LENGTH_SENTINEL: i64 = -3_000_000_000;

/// Upper sentinel bracketing all length bins
pub const MAX_LENGTH_SENTINEL: i64 = 3_000_000_000;

/// A strictly increasing set of bin boundaries
///
/// Each boundary is the inclusive lower bound of the half-open bin `[b[i], b[i+1])`. The last
/// boundary starts a bin extending to infinity.
///
#[derive(Clone, Debug, PartialEq)]
pub struct BinBoundaries {
    boundaries: Vec<i64>,
}

impl BinBoundaries {
    /// Boundaries from any collection of values, sorted and deduplicated
    pub fn new(values: &[i64]) -> Self {
        let boundaries = values.iter().copied().sorted().dedup().collect();
        Self { boundaries }
    }

    /// Boundaries for SV length bins
    ///
    /// The supplied values are bracketed with sentinels far outside any genomic length, so that
    /// every length falls into a bin with a finite lower and upper bound.
    ///
    pub fn for_lengths(values: &[i64]) -> Self {
        let mut boundaries = values
            .iter()
            .copied()
            .filter(|&x| x > MIN_LENGTH_SENTINEL && x < MAX_LENGTH_SENTINEL)
            .collect::<Vec<_>>();
        boundaries.push(MIN_LENGTH_SENTINEL);
        boundaries.push(MAX_LENGTH_SENTINEL);
        Self::new(&boundaries)
    }

    /// Boundaries for read support bins
    ///
    /// Negative values are removed and zero is always included, so that every support count
    /// falls into a bin.
    ///
    pub fn for_supports(values: &[i64], diagnostics: &mut dyn DiagnosticsSink) -> Self {
        let mut boundaries = values.to_vec();
        if boundaries.iter().any(|&x| x < 0) {
            diagnostics.warn(
                "Some bins were of negative values. Only non-negative values are permitted. Removing all negative values.",
            );
            boundaries.retain(|&x| x >= 0);
        }
        if !boundaries.contains(&0) {
            diagnostics.warn("0 value is not in bins. Adding 0.");
            boundaries.push(0);
        }
        Self::new(&boundaries)
    }

    pub fn values(&self) -> &[i64] {
        &self.boundaries
    }

    pub fn bin_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Find the bin containing `value`
    ///
    /// Returns the index of the rightmost boundary less than or equal to `value`, or None if
    /// `value` is below the first boundary.
    ///
    pub fn bin_index(&self, value: i64) -> Option<usize> {
        let insert_index = self.boundaries.partition_point(|&x| x <= value);
        insert_index.checked_sub(1)
    }
}

/// Observation counts for each bin and each requested SV type
///
pub struct BinCounts {
    boundaries: BinBoundaries,

    /// SV types included in the table, in report column order
    sv_types: Vec<SVType>,

    /// Counts indexed by bin index, then by position of the type in `sv_types`
    counts: Vec<Vec<u64>>,
}

impl BinCounts {
    pub fn new(boundaries: BinBoundaries, sv_types: &[SVType]) -> Self {
        let counts = vec![vec![0; sv_types.len()]; boundaries.bin_count()];
        Self {
            boundaries,
            sv_types: sv_types.to_vec(),
            counts,
        }
    }

    pub fn boundaries(&self) -> &BinBoundaries {
        &self.boundaries
    }

    pub fn sv_types(&self) -> &[SVType] {
        &self.sv_types
    }

    pub fn includes_type(&self, sv_type: SVType) -> bool {
        self.sv_types.contains(&sv_type)
    }

    /// Add one observation of `sv_type` to the bin at `bin_index`
    ///
    /// Returns false without counting anything if `sv_type` is not one of the table's types.
    ///
    pub fn add(&mut self, bin_index: usize, sv_type: SVType) -> bool {
        match self.sv_types.iter().position(|&x| x == sv_type) {
            Some(type_index) => {
                self.counts[bin_index][type_index] += 1;
                true
            }
            None => false,
        }
    }

    /// Counts for each type in the bin at `bin_index`, in column order
    pub fn bin_counts(&self, bin_index: usize) -> &[u64] {
        &self.counts[bin_index]
    }

    /// Total count for each type over all bins, in column order
    pub fn type_totals(&self) -> Vec<u64> {
        let mut totals = vec![0; self.sv_types.len()];
        for bin in self.counts.iter() {
            for (total, count) in totals.iter_mut().zip(bin.iter()) {
                *total += count;
            }
        }
        totals
    }
}

/// Human readable bin boundary label
///
/// The value is scaled down by powers of 1000 and given a K, M or G suffix, such that 1500 is
/// shown as '1.5K' and 3000000000 as '3G'.
///
pub fn bin_label(value: i64) -> String {
    const SUFFIXES: [&str; 4] = ["", "K", "M", "G"];

    let mut suffix_index = 0;
    let mut scaled = value as f64;
    while scaled.abs() >= 1000.0 && suffix_index + 1 < SUFFIXES.len() {
        suffix_index += 1;
        scaled /= 1000.0;
    }

    let number = if scaled.fract() == 0.0 {
        (scaled as i64).separate_with_commas()
    } else {
        scaled.separate_with_commas()
    };
    format!("{number}{}", SUFFIXES[suffix_index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;

    #[test]
    fn test_new_sorts_and_dedups() {
        let b = BinBoundaries::new(&[30, 1, 30, 10]);
        assert_eq!(b.values(), &[1, 10, 30]);
    }

    #[test]
    fn test_half_open_bins() {
        let b = BinBoundaries::for_lengths(&[0, 10, 20]);
        assert_eq!(
            b.values(),
            &[MIN_LENGTH_SENTINEL, 0, 10, 20, MAX_LENGTH_SENTINEL]
        );
        assert_eq!(b.bin_index(10), Some(2));
        assert_eq!(b.bin_index(9), Some(1));
        assert_eq!(b.bin_index(0), Some(1));
        assert_eq!(b.bin_index(-1), Some(0));
        assert_eq!(b.bin_index(19), Some(2));
        assert_eq!(b.bin_index(20), Some(3));
        assert_eq!(b.bin_index(MAX_LENGTH_SENTINEL), Some(4));
        assert_eq!(b.bin_index(MIN_LENGTH_SENTINEL - 1), None);
    }

    #[test]
    fn test_length_sentinels_not_duplicated() {
        let b = BinBoundaries::for_lengths(&[MAX_LENGTH_SENTINEL, 5]);
        assert_eq!(b.values(), &[MIN_LENGTH_SENTINEL, 5, MAX_LENGTH_SENTINEL]);
    }

    #[test]
    fn test_support_boundaries() {
        let mut diagnostics = RecordingDiagnostics::default();
        let b = BinBoundaries::for_supports(&[5, -3, 2, 5], &mut diagnostics);
        assert_eq!(b.values(), &[0, 2, 5]);
        assert_eq!(diagnostics.warnings.len(), 2);

        let mut diagnostics = RecordingDiagnostics::default();
        let b = BinBoundaries::for_supports(&[0, 2, 3], &mut diagnostics);
        assert_eq!(b.values(), &[0, 2, 3]);
        assert!(diagnostics.warnings.is_empty());
        assert_eq!(b.bin_index(0), Some(0));
        assert_eq!(b.bin_index(1), Some(0));
        assert_eq!(b.bin_index(100), Some(2));
    }

    #[test]
    fn test_bin_counts() {
        let b = BinBoundaries::new(&[0, 5, 10]);
        let mut counts = BinCounts::new(b, &[SVType::Del, SVType::Ins]);
        assert!(counts.add(0, SVType::Ins));
        assert!(counts.add(0, SVType::Ins));
        assert!(counts.add(2, SVType::Del));
        assert!(!counts.add(1, SVType::Tra));

        assert_eq!(counts.bin_counts(0), &[0, 2]);
        assert_eq!(counts.bin_counts(1), &[0, 0]);
        assert_eq!(counts.bin_counts(2), &[1, 0]);
        assert_eq!(counts.type_totals(), vec![1, 2]);
        assert!(counts.includes_type(SVType::Del));
        assert!(!counts.includes_type(SVType::Tra));
    }

    #[test]
    fn test_bin_label() {
        assert_eq!(bin_label(0), "0");
        assert_eq!(bin_label(1), "1");
        assert_eq!(bin_label(999), "999");
        assert_eq!(bin_label(1000), "1K");
        assert_eq!(bin_label(1500), "1.5K");
        assert_eq!(bin_label(50000), "50K");
        assert_eq!(bin_label(2_500_000), "2.5M");
        assert_eq!(bin_label(MAX_LENGTH_SENTINEL), "3G");
        assert_eq!(bin_label(MIN_LENGTH_SENTINEL), "-3G");
        assert_eq!(bin_label(-350), "-350");
        assert_eq!(bin_label(5_000_000_000_000), "5,000G");
    }
}
