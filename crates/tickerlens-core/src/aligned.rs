//! Indicator output tagged with its position in the source series.
//!
//! Indicators emit one value per complete window, so their outputs are
//! shorter than the input and start part-way into it. [`IndicatorSeries`]
//! records that start index explicitly. Combining two outputs goes through
//! [`IndicatorSeries::zip_with`], which pairs values by source index rather
//! than by position.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::num::TaFloat;
use crate::series::Series;

/// An indicator output aligned to the series it was computed from.
///
/// `values[i]` belongs to source index `start + i`.
///
/// # Example
///
/// ```rust
/// use tickerlens_core::{IndicatorSeries, Series};
///
/// // A 3-period average over 5 prices starts at source index 2.
/// let sma = IndicatorSeries::new(2, Series::from_vec(vec![2.0, 3.0, 4.0]));
///
/// assert_eq!(sma.end(), 5);
/// assert_eq!(sma.at(3), Some(3.0));
/// assert_eq!(sma.at(1), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct IndicatorSeries<T: TaFloat> {
    start: usize,
    values: Series<T>,
}

impl<T: TaFloat> IndicatorSeries<T> {
    /// Wrap `values` whose first element belongs to source index `start`.
    #[must_use]
    pub fn new(start: usize, values: Series<T>) -> Self {
        Self { start, values }
    }

    /// An empty output that would have started at `start`.
    #[must_use]
    pub fn empty(start: usize) -> Self {
        Self {
            start,
            values: Series::new(),
        }
    }

    /// Source index of the first value.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Source index one past the last value.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.values.len())
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at position `index` within this output.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    /// Value aligned with source index `source_index`.
    #[must_use]
    pub fn at(&self, source_index: usize) -> Option<T> {
        source_index
            .checked_sub(self.start)
            .and_then(|i| self.values.get(i).copied())
    }

    /// First value, if any.
    #[must_use]
    pub fn first(&self) -> Option<T> {
        self.values.first().copied()
    }

    /// Latest value, if any.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.values.last().copied()
    }

    /// The values without their offset.
    #[must_use]
    pub fn values(&self) -> &Series<T> {
        &self.values
    }

    /// The values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.values.as_slice()
    }

    /// Consume into the bare values.
    #[must_use]
    pub fn into_values(self) -> Series<T> {
        self.values
    }

    /// Iterator of `(source_index, value)` pairs.
    pub fn iter_aligned(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        let start = self.start;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| (start + i, v))
    }

    /// Apply a function to each value, keeping the alignment.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Self {
            start: self.start,
            values: self.values.map(f),
        }
    }

    /// Combine with `other` over the source indices both cover.
    ///
    /// The result starts at the later of the two starts and ends at the
    /// earlier of the two ends. When the ranges do not overlap the result is
    /// empty and starts at the later start.
    #[must_use]
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(T, T) -> T,
    {
        let start = self.start.max(other.start);
        let end = self.end().min(other.end());
        if end <= start {
            return Self::empty(start);
        }

        let lhs = &self.as_slice()[start - self.start..end - self.start];
        let rhs = &other.as_slice()[start - other.start..end - other.start];
        let values = lhs.iter().zip(rhs).map(|(&a, &b)| f(a, b)).collect();

        Self { start, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligned(start: usize, values: &[f64]) -> IndicatorSeries<f64> {
        IndicatorSeries::new(start, Series::from(values))
    }

    #[test]
    fn test_bounds_and_lookup() {
        let s = aligned(3, &[10.0, 11.0, 12.0]);

        assert_eq!(s.start(), 3);
        assert_eq!(s.end(), 6);
        assert_eq!(s.at(2), None);
        assert_eq!(s.at(3), Some(10.0));
        assert_eq!(s.at(5), Some(12.0));
        assert_eq!(s.at(6), None);
        assert_eq!(s.get(1), Some(11.0));
        assert_eq!(s.last(), Some(12.0));
    }

    #[test]
    fn test_empty_keeps_start() {
        let s: IndicatorSeries<f64> = IndicatorSeries::empty(19);
        assert!(s.is_empty());
        assert_eq!(s.start(), 19);
        assert_eq!(s.end(), 19);
        assert_eq!(s.last(), None);
    }

    #[test]
    fn test_iter_aligned() {
        let s = aligned(2, &[1.0, 2.0]);
        let pairs: Vec<(usize, f64)> = s.iter_aligned().collect();
        assert_eq!(pairs, vec![(2, 1.0), (3, 2.0)]);
    }

    #[test]
    fn test_zip_with_uses_source_indices() {
        // fast covers source 1..6, slow covers 3..6
        let fast = aligned(1, &[1.0, 2.0, 3.0, 4.0, 5.0]);
        let slow = aligned(3, &[0.5, 0.5, 0.5]);

        let diff = fast.zip_with(&slow, |a, b| a - b);

        assert_eq!(diff.start(), 3);
        assert_eq!(diff.as_slice(), &[2.5, 3.5, 4.5]);
    }

    #[test]
    fn test_zip_with_disjoint_is_empty() {
        let a = aligned(0, &[1.0, 2.0]);
        let b = aligned(5, &[1.0]);

        let out = a.zip_with(&b, |x, y| x + y);

        assert!(out.is_empty());
        assert_eq!(out.start(), 5);
    }

    #[test]
    fn test_map_keeps_start() {
        let s = aligned(4, &[1.0, 2.0]).map(|x| x * 10.0);
        assert_eq!(s.start(), 4);
        assert_eq!(s.as_slice(), &[10.0, 20.0]);
    }
}
