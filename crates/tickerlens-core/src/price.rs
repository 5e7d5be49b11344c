//! Dated OHLCV price data.
//!
//! A [`PriceBar`] is one trading period. A [`PriceSeries`] holds bars in
//! columnar form, ordered by ascending date with no gap placeholders:
//! weekends and holidays are simply absent, so index `i` means "the i-th
//! sample". Nothing here validates the data; [`PriceBar::is_valid`] and
//! [`PriceSeries::is_chronological`] are offered to data providers.

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::aligned::IndicatorSeries;
use crate::num::TaFloat;

/// One trading-period record.
///
/// Valid bars satisfy `low <= open, close <= high`, but the indicators do
/// not rely on it: inconsistent bars produce nonsensical numbers, never a
/// panic.
///
/// # Example
///
/// ```rust
/// use tickerlens_core::{NaiveDate, PriceBar};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let bar = PriceBar::new(date, 100.0, 105.0, 98.0, 103.0, 1_000_000);
/// assert!(bar.is_valid());
/// assert_eq!(bar.range(), 7.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct PriceBar<T: TaFloat> {
    /// Calendar date of the period.
    pub date: NaiveDate,
    /// Opening price.
    pub open: T,
    /// Highest price.
    pub high: T,
    /// Lowest price.
    pub low: T,
    /// Closing price.
    pub close: T,
    /// Traded volume.
    pub volume: u64,
}

impl<T: TaFloat> PriceBar<T> {
    /// Create a new bar.
    #[must_use]
    pub fn new(date: NaiveDate, open: T, high: T, low: T, close: T, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Check the OHLC ordering invariant and that all prices are finite
    /// and positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let prices = [self.open, self.high, self.low, self.close];
        prices.iter().all(|p| p.is_valid() && *p > T::ZERO)
            && self.low <= self.open
            && self.open <= self.high
            && self.low <= self.close
            && self.close <= self.high
    }

    /// High minus low.
    #[must_use]
    pub fn range(&self) -> T {
        self.high - self.low
    }

    /// (High + Low + Close) / 3.
    #[must_use]
    pub fn typical_price(&self) -> T {
        (self.high + self.low + self.close) / <T as TaFloat>::from_usize(3)
    }
}

/// Columnar storage of dated OHLCV bars.
///
/// # Example
///
/// ```rust
/// use tickerlens_core::{NaiveDate, PriceBar, PriceSeries};
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
/// let series: PriceSeries<f64> = vec![
///     PriceBar::new(day(1), 100.0, 105.0, 98.0, 103.0, 1_000),
///     PriceBar::new(day(4), 103.0, 108.0, 101.0, 107.0, 1_200),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.closes(), &[103.0, 107.0]);
/// assert!(series.is_chronological());
/// ```
///
/// Serializes as an array of bars, so the columns always have equal
/// lengths after deserializing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound = "T: TaFloat", from = "Vec<PriceBar<T>>", into = "Vec<PriceBar<T>>")
)]
pub struct PriceSeries<T: TaFloat> {
    dates: Vec<NaiveDate>,
    open: Vec<T>,
    high: Vec<T>,
    low: Vec<T>,
    close: Vec<T>,
    volume: Vec<u64>,
}

impl<T: TaFloat> Default for PriceSeries<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaFloat> PriceSeries<T> {
    /// Create an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty series with room for `capacity` bars.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dates: Vec::with_capacity(capacity),
            open: Vec::with_capacity(capacity),
            high: Vec::with_capacity(capacity),
            low: Vec::with_capacity(capacity),
            close: Vec::with_capacity(capacity),
            volume: Vec::with_capacity(capacity),
        }
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// `true` if there are no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Append a bar.
    pub fn push(&mut self, bar: PriceBar<T>) {
        self.dates.push(bar.date);
        self.open.push(bar.open);
        self.high.push(bar.high);
        self.low.push(bar.low);
        self.close.push(bar.close);
        self.volume.push(bar.volume);
    }

    /// Bar at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<PriceBar<T>> {
        Some(PriceBar {
            date: *self.dates.get(index)?,
            open: *self.open.get(index)?,
            high: *self.high.get(index)?,
            low: *self.low.get(index)?,
            close: *self.close.get(index)?,
            volume: *self.volume.get(index)?,
        })
    }

    /// Most recent bar, if any.
    #[must_use]
    pub fn last(&self) -> Option<PriceBar<T>> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterator over the bars in order.
    pub fn iter(&self) -> impl Iterator<Item = PriceBar<T>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Bar dates.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Opening prices.
    #[must_use]
    pub fn opens(&self) -> &[T] {
        &self.open
    }

    /// High prices.
    #[must_use]
    pub fn highs(&self) -> &[T] {
        &self.high
    }

    /// Low prices.
    #[must_use]
    pub fn lows(&self) -> &[T] {
        &self.low
    }

    /// Closing prices.
    #[must_use]
    pub fn closes(&self) -> &[T] {
        &self.close
    }

    /// Volumes.
    #[must_use]
    pub fn volumes(&self) -> &[u64] {
        &self.volume
    }

    /// Date of the bar at `index`.
    #[must_use]
    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        self.dates.get(index).copied()
    }

    /// `true` if dates are strictly ascending.
    #[must_use]
    pub fn is_chronological(&self) -> bool {
        self.dates.windows(2).all(|w| w[0] < w[1])
    }

    /// Pair each value of an indicator computed from this series with the
    /// date of the bar it belongs to.
    pub fn dated<'a>(
        &'a self,
        series: &'a IndicatorSeries<T>,
    ) -> impl Iterator<Item = (NaiveDate, T)> + 'a {
        series
            .iter_aligned()
            .filter_map(move |(i, v)| self.date_at(i).map(|d| (d, v)))
    }
}

impl<T: TaFloat> FromIterator<PriceBar<T>> for PriceSeries<T> {
    fn from_iter<I: IntoIterator<Item = PriceBar<T>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut series = Self::with_capacity(iter.size_hint().0);
        for bar in iter {
            series.push(bar);
        }
        series
    }
}

impl<T: TaFloat> From<Vec<PriceBar<T>>> for PriceSeries<T> {
    fn from(bars: Vec<PriceBar<T>>) -> Self {
        bars.into_iter().collect()
    }
}

impl<T: TaFloat> From<PriceSeries<T>> for Vec<PriceBar<T>> {
    fn from(series: PriceSeries<T>) -> Self {
        series.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn sample() -> PriceSeries<f64> {
        vec![
            PriceBar::new(day(2), 100.0, 102.0, 99.0, 101.0, 1_000),
            PriceBar::new(day(3), 101.0, 104.0, 100.0, 103.0, 1_500),
            PriceBar::new(day(4), 103.0, 103.5, 97.0, 98.0, 2_000),
        ]
        .into()
    }

    #[test]
    fn test_bar_validity() {
        let good = PriceBar::new(day(2), 100.0, 102.0, 99.0, 101.0, 10);
        assert!(good.is_valid());

        let inverted = PriceBar::new(day(2), 100.0, 99.0, 102.0, 101.0, 10);
        assert!(!inverted.is_valid());

        let nan = PriceBar::new(day(2), f64::NAN, 102.0, 99.0, 101.0, 10);
        assert!(!nan.is_valid());
    }

    #[test]
    fn test_bar_derived_prices() {
        let bar = PriceBar::new(day(2), 100.0, 106.0, 97.0, 103.0, 10);
        assert_eq!(bar.range(), 9.0);
        assert_eq!(bar.typical_price(), 102.0);
    }

    #[test]
    fn test_columns() {
        let series = sample();
        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), &[101.0, 103.0, 98.0]);
        assert_eq!(series.highs(), &[102.0, 104.0, 103.5]);
        assert_eq!(series.lows(), &[99.0, 100.0, 97.0]);
        assert_eq!(series.volumes(), &[1_000, 1_500, 2_000]);
    }

    #[test]
    fn test_get_and_last() {
        let series = sample();
        assert_eq!(series.get(1).map(|b| b.close), Some(103.0));
        assert_eq!(series.get(3), None);
        assert_eq!(series.last().map(|b| b.date), Some(day(4)));
        assert_eq!(PriceSeries::<f64>::new().last(), None);
    }

    #[test]
    fn test_iter_roundtrips_bars() {
        let series = sample();
        let rebuilt: PriceSeries<f64> = series.iter().collect();
        assert_eq!(rebuilt, series);
    }

    #[test]
    fn test_is_chronological() {
        assert!(sample().is_chronological());

        let mut unordered = sample();
        unordered.push(PriceBar::new(day(3), 98.0, 99.0, 97.0, 98.5, 100));
        assert!(!unordered.is_chronological());
    }

    #[test]
    fn test_dated_realigns_indicator() {
        let series = sample();
        let indicator = IndicatorSeries::new(1, Series::from_vec(vec![7.0, 8.0]));

        let dated: Vec<_> = series.dated(&indicator).collect();

        assert_eq!(dated, vec![(day(3), 7.0), (day(4), 8.0)]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_bar_deserializes_from_record() {
        let json = r#"{
            "date": "2024-01-02",
            "open": 100.0, "high": 102.0, "low": 99.0, "close": 101.0,
            "volume": 1000
        }"#;
        let bar: PriceBar<f64> = serde_json::from_str(json).unwrap();
        assert_eq!(bar.date, day(2));
        assert_eq!(bar.close, 101.0);
        assert_eq!(bar.volume, 1000);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_series_serializes_as_bars() {
        let series = sample();
        let json = serde_json::to_value(&series).unwrap();

        assert_eq!(json.as_array().map(Vec::len), Some(3));
        assert_eq!(json[2]["close"], 98.0);

        let back: PriceSeries<f64> = serde_json::from_value(json).unwrap();
        assert_eq!(back, series);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_columnar_payload_is_rejected() {
        // columns of different lengths cannot be expressed as bars
        let json = r#"{
            "dates": ["2024-01-02", "2024-01-03"],
            "open": [1.0], "high": [1.0], "low": [1.0],
            "close": [1.0, 1.5], "volume": [10]
        }"#;
        assert!(serde_json::from_str::<PriceSeries<f64>>(json).is_err());
    }
}
