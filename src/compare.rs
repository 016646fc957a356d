//! # Comparing position files
//!
//! Row-by-row comparison of two position series, typically one exported by
//! this crate and one produced by a reference astrodynamics package for the
//! same orbit.
//!
//! For each row the difference is the mean absolute component difference
//! `(|Δx| + |Δy| + |Δz|) / 3`, in km. The summary keeps the raw sum of
//! absolute component differences and its per-component mean.
use std::path::Path;

use crate::{
    orbsample_errors::OrbSampleError, position_file::read_positions, sampler::PositionSample,
    sampler::SampleLabel,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RowDifference {
    pub index: usize,
    /// Label of the row in the first series.
    pub label: SampleLabel,
    /// Mean absolute component difference, km.
    pub difference: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub rows: Vec<RowDifference>,
    /// Sum of `|Δx| + |Δy| + |Δz|` over all rows, km.
    pub sum: f64,
    pub count: usize,
    /// `sum / (3 · count)`, km; zero for empty series.
    pub mean: f64,
}

impl Comparison {
    /// Largest per-row difference, if any row was compared.
    pub fn max_difference(&self) -> Option<f64> {
        self.rows.iter().map(|r| r.difference).reduce(f64::max)
    }
}

/// Compare two position series row by row.
///
/// Errors
/// ------
/// * `RecordCountMismatch` when the series have different lengths.
pub fn compare_samples(
    a: &[PositionSample],
    b: &[PositionSample],
) -> Result<Comparison, OrbSampleError> {
    if a.len() != b.len() {
        return Err(OrbSampleError::RecordCountMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut sum = 0.0;
    let rows: Vec<RowDifference> = a
        .iter()
        .zip(b)
        .enumerate()
        .map(|(index, (ra, rb))| {
            let total = (ra.position - rb.position).abs().sum();
            sum += total;
            RowDifference {
                index,
                label: ra.label,
                difference: total / 3.0,
            }
        })
        .collect();

    let count = rows.len();
    let mean = if count == 0 {
        0.0
    } else {
        sum / (count as f64 * 3.0)
    };

    Ok(Comparison {
        rows,
        sum,
        count,
        mean,
    })
}

pub fn compare_files(
    a: impl AsRef<Path>,
    b: impl AsRef<Path>,
) -> Result<Comparison, OrbSampleError> {
    let rows_a = read_positions(a)?;
    let rows_b = read_positions(b)?;
    compare_samples(&rows_a, &rows_b)
}

#[cfg(test)]
mod compare_test {
    use super::*;
    use crate::position_file::parse_positions;
    use approx::assert_relative_eq;

    #[test]
    fn test_compare_samples() {
        let a = parse_positions("1,0,0,0,0\n1,1,1,1,1\n".as_bytes()).unwrap();
        let b = parse_positions("1,0,3,0,0\n1,1,1,-2,4\n".as_bytes()).unwrap();

        let cmp = compare_samples(&a, &b).unwrap();
        assert_eq!(cmp.count, 2);
        assert_relative_eq!(cmp.rows[0].difference, 1.0);
        assert_relative_eq!(cmp.rows[1].difference, 2.0);
        assert_relative_eq!(cmp.sum, 9.0);
        assert_relative_eq!(cmp.mean, 1.5);
        assert_eq!(cmp.max_difference(), Some(2.0));
    }

    #[test]
    fn test_identical_series() {
        let a = parse_positions("1,0,1.5,2,3\n".as_bytes()).unwrap();
        let cmp = compare_samples(&a, &a).unwrap();
        assert_eq!(cmp.sum, 0.0);
        assert_eq!(cmp.mean, 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        let a = parse_positions("1,0,0,0,0\n".as_bytes()).unwrap();
        assert_eq!(
            compare_samples(&a, &[]),
            Err(OrbSampleError::RecordCountMismatch { left: 1, right: 0 })
        );
    }

    #[test]
    fn test_empty_series() {
        let cmp = compare_samples(&[], &[]).unwrap();
        assert_eq!(cmp.mean, 0.0);
        assert_eq!(cmp.max_difference(), None);
    }
}
