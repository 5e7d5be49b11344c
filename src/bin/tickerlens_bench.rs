//! Benchmark binary for the tickerlens indicators.
//!
//! Usage:
//!     tickerlens_bench <data_file> <iterations>
//!
//! `data_file` is JSON: either an array of price bars
//! (`{"date", "open", "high", "low", "close", "volume"}`) or an object with
//! such an array under `"bars"`. Outputs a JSON report to stdout; progress
//! goes to stderr through `tracing` (`RUST_LOG` controls the level).

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tickerlens::prelude::*;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceFile {
    Bars(Vec<PriceBar<f64>>),
    Wrapped { bars: Vec<PriceBar<f64>> },
}

impl PriceFile {
    fn into_series(self) -> PriceSeries<f64> {
        match self {
            Self::Bars(bars) | Self::Wrapped { bars } => bars.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct BenchmarkResult {
    name: String,
    candles: usize,
    iterations: usize,
    total_time_ms: f64,
    avg_time_ms: f64,
    min_time_ms: f64,
    max_time_ms: f64,
    throughput_candles_per_sec: f64,
}

#[derive(Debug, Serialize)]
struct Report {
    candles: usize,
    first_date: Option<NaiveDate>,
    last_date: Option<NaiveDate>,
    snapshot: Option<IndicatorSnapshot<f64>>,
    signals: Option<SnapshotSignals>,
    results: Vec<BenchmarkResult>,
}

fn load_prices(path: &str) -> Result<PriceSeries<f64>> {
    let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
    let data: PriceFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse price bars from {path}"))?;
    Ok(data.into_series())
}

fn benchmark<F>(name: &str, iterations: usize, candles: usize, mut f: F) -> Result<BenchmarkResult>
where
    F: FnMut() -> tickerlens::prelude::Result<()>,
{
    info!(indicator = name, "benchmarking");
    let mut times = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let start = Instant::now();
        f().with_context(|| format!("{name} failed"))?;
        times.push(start.elapsed().as_secs_f64() * 1000.0);
    }

    let total_time: f64 = times.iter().sum();
    let avg_time = total_time / iterations as f64;
    let min_time = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max_time = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let throughput = if avg_time > 0.0 {
        (candles as f64 / avg_time) * 1000.0
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        name: name.to_string(),
        candles,
        iterations,
        total_time_ms: total_time,
        avg_time_ms: avg_time,
        min_time_ms: min_time,
        max_time_ms: max_time,
        throughput_candles_per_sec: throughput,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        let program = args.first().map_or("tickerlens_bench", String::as_str);
        bail!("usage: {program} <data_file> <iterations>");
    }

    let data_file = &args[1];
    let iterations: usize = args[2]
        .parse()
        .with_context(|| format!("invalid iteration count {:?}", args[2]))?;
    if iterations == 0 {
        bail!("iteration count must be at least 1");
    }

    info!(path = %data_file, "loading price data");
    let prices = load_prices(data_file)?;
    let candles = prices.len();
    info!(candles, "loaded price data");
    if !prices.is_chronological() {
        warn!("bars are not in ascending date order; results follow file order");
    }

    let closes = prices.closes();
    let mut results = Vec::new();

    for period in [20, 50] {
        let sma = Sma::<f64>::new(SmaConfig::new(period));
        results.push(benchmark(&format!("SMA({period})"), iterations, candles, || {
            sma.calculate(closes).map(drop)
        })?);
    }

    for period in [12, 26] {
        let ema = Ema::<f64>::new(EmaConfig::new(period));
        results.push(benchmark(&format!("EMA({period})"), iterations, candles, || {
            ema.calculate(closes).map(drop)
        })?);
    }

    let rsi = Rsi::<f64>::new(RsiConfig::default());
    results.push(benchmark("RSI(14)", iterations, candles, || rsi.calculate(closes).map(drop))?);

    let macd = Macd::<f64>::new(MacdConfig::default());
    results.push(benchmark("MACD(12,26,9)", iterations, candles, || {
        macd.calculate(closes).map(drop)
    })?);

    let bb = BollingerBands::<f64>::new(BollingerConfig::default());
    results.push(benchmark("Bollinger(20,2)", iterations, candles, || {
        bb.calculate(closes).map(drop)
    })?);

    for smoothing in [AtrSmoothing::Ema, AtrSmoothing::Wilder] {
        let atr = Atr::<f64>::new(AtrConfig::default().with_smoothing(smoothing));
        results.push(benchmark(&format!("ATR(14, {smoothing:?})"), iterations, candles, || {
            atr.calculate(&prices).map(drop)
        })?);
    }

    let stoch = Stochastic::<f64>::new(StochasticConfig::default());
    results.push(benchmark("Stochastic(14,3)", iterations, candles, || {
        stoch.calculate(&prices).map(drop)
    })?);

    let snapshot_indicator = Snapshot::<f64>::new(SnapshotConfig::default());
    results.push(benchmark("Snapshot", iterations, candles, || {
        snapshot_indicator.calculate(closes).map(drop)
    })?);

    let snapshot = current_indicators(closes)?;
    if snapshot.is_none() {
        warn!(candles, "too few candles for a snapshot");
    }
    let signals = snapshot
        .as_ref()
        .map(|s| ThresholdClassifier::default().classify(s));

    let report = Report {
        candles,
        first_date: prices.date_at(0),
        last_date: candles.checked_sub(1).and_then(|i| prices.date_at(i)),
        snapshot,
        signals,
        results,
    };

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
