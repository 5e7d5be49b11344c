//! Row-aligned view over several indicator outputs.
//!
//! [`AlignedFrame`] lines up indicator outputs against the series they were
//! computed from, so row `i` of the frame is source bar `i` together with
//! every indicator value that exists at that bar. Columns keep insertion
//! order through `IndexMap`, which keeps exports and test output stable.

use chrono::NaiveDate;
use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::aligned::IndicatorSeries;
use crate::error::{IndicatorError, Result};
use crate::num::TaFloat;
use crate::price::PriceSeries;

/// Indicator columns aligned on source index.
///
/// # Example
///
/// ```rust
/// use tickerlens_core::{AlignedFrame, IndicatorSeries, Series};
///
/// let mut frame: AlignedFrame<f64> = AlignedFrame::new(4);
/// frame
///     .add_column("sma3", IndicatorSeries::new(2, Series::from_vec(vec![2.0, 3.0])))
///     .unwrap();
///
/// assert_eq!(frame.value("sma3", 1), None);
/// assert_eq!(frame.value("sma3", 3), Some(3.0));
/// assert_eq!(frame.column_names(), vec!["sma3"]);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct AlignedFrame<T: TaFloat> {
    len: usize,
    dates: Option<Vec<NaiveDate>>,
    columns: IndexMap<String, IndicatorSeries<T>>,
}

/// One row of an [`AlignedFrame`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct FrameRow<T: TaFloat> {
    /// Source index.
    pub index: usize,
    /// Source date, when the frame was built from dated bars.
    pub date: Option<NaiveDate>,
    /// One entry per column in insertion order; `None` outside the
    /// column's range.
    pub values: Vec<Option<T>>,
}

impl<T: TaFloat> AlignedFrame<T> {
    /// An empty frame over a source of `len` samples.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            dates: None,
            columns: IndexMap::new(),
        }
    }

    /// An empty frame over dated bars; rows carry the bar dates.
    #[must_use]
    pub fn for_prices(prices: &PriceSeries<T>) -> Self {
        Self {
            len: prices.len(),
            dates: Some(prices.dates().to_vec()),
            columns: IndexMap::new(),
        }
    }

    /// Number of rows (source samples).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the source is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&IndicatorSeries<T>> {
        self.columns.get(name)
    }

    /// Append a column.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::DuplicateColumn`] if the name is taken and
    /// [`IndicatorError::LengthMismatch`] if a non-empty series reaches past
    /// the last source row.
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        series: IndicatorSeries<T>,
    ) -> Result<()> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(IndicatorError::DuplicateColumn(name));
        }
        if !series.is_empty() && series.end() > self.len {
            return Err(IndicatorError::LengthMismatch {
                expected: self.len,
                actual: series.end(),
            });
        }
        self.columns.insert(name, series);
        Ok(())
    }

    /// Builder form of [`add_column`](Self::add_column).
    ///
    /// # Errors
    ///
    /// Same as [`add_column`](Self::add_column).
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        series: IndicatorSeries<T>,
    ) -> Result<Self> {
        self.add_column(name, series)?;
        Ok(self)
    }

    /// Value of column `name` at source index `index`.
    #[must_use]
    pub fn value(&self, name: &str, index: usize) -> Option<T> {
        self.columns.get(name).and_then(|s| s.at(index))
    }

    /// Row at source index `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<FrameRow<T>> {
        if index >= self.len {
            return None;
        }
        Some(FrameRow {
            index,
            date: self.dates.as_ref().and_then(|d| d.get(index).copied()),
            values: self.columns.values().map(|s| s.at(index)).collect(),
        })
    }

    /// All rows in source order.
    pub fn rows(&self) -> impl Iterator<Item = FrameRow<T>> + '_ {
        (0..self.len).filter_map(move |i| self.row(i))
    }

    /// First source index at which every column has a value.
    #[must_use]
    pub fn first_complete_row(&self) -> Option<usize> {
        let start = self
            .columns
            .values()
            .map(IndicatorSeries::start)
            .max()
            .unwrap_or(0);
        let end = self
            .columns
            .values()
            .map(IndicatorSeries::end)
            .min()
            .unwrap_or(self.len);
        (start < end).then_some(start)
    }
}
