use crate::error::IndicatorError;
use crate::report::{
    BollingerPoint, EmaPoint, IndicatorReport, IndicatorSet, MacdPoint, RsiPoint, SmaPoint,
};
use chrono::NaiveDate;
use configuration::IndicatorSettings;
use core_types::PriceBar;
use timeseries::{mean, population_std_dev, rolling, safe_divide};

/// The MACD line is the difference of the 12- and 26-day EMAs; the signal
/// line smooths it with a 9-day EMA. The report carries the last 26
/// aligned triples.
const MACD_FAST: usize = 12;
const MACD_SLOW: usize = 26;
const MACD_SIGNAL: usize = 9;

/// A stateless batch calculator for technical indicators.
#[derive(Debug, Clone)]
pub struct TechnicalIndicatorEngine {
    sma_period: usize,
    ema_period: usize,
    rsi_period: usize,
    bollinger_period: usize,
}

impl TechnicalIndicatorEngine {
    pub fn new(settings: &IndicatorSettings) -> Self {
        Self {
            sma_period: settings.sma_period,
            ema_period: settings.ema_period,
            rsi_period: settings.rsi_period,
            bollinger_period: settings.bollinger_period,
        }
    }

    /// Computes all five indicators for one ticker with the configured
    /// default periods.
    pub fn analyze(
        &self,
        ticker: &str,
        bars: &[PriceBar],
    ) -> Result<IndicatorReport, IndicatorError> {
        tracing::debug!(ticker, bars = bars.len(), "computing technical indicators");

        Ok(IndicatorReport {
            ticker: ticker.to_string(),
            indicators: IndicatorSet {
                sma: self.sma(bars, self.sma_period)?,
                ema: self.ema(bars, self.ema_period)?,
                rsi: self.rsi(bars, self.rsi_period)?,
                macd: self.macd(bars)?,
                bollinger: self.bollinger(bars, self.bollinger_period)?,
            },
        })
    }

    /// Simple Moving Average: the mean of each trailing `period`-close
    /// window, reported for the most recent `period` windows.
    pub fn sma(&self, bars: &[PriceBar], period: usize) -> Result<Vec<SmaPoint>, IndicatorError> {
        let closes = validate(bars, period, period, "SMA")?;

        let sma_all: Vec<f64> = rolling(&closes, period)
            .expect("length validated against period")
            .map(mean)
            .collect();

        Ok(zip_tail(bars, &sma_all, period)
            .map(|(date, &sma)| SmaPoint { date, sma })
            .collect())
    }

    /// Exponential Moving Average: multiplier `2 / (period + 1)`, seeded
    /// with the first close, reported for the most recent `period` days.
    pub fn ema(&self, bars: &[PriceBar], period: usize) -> Result<Vec<EmaPoint>, IndicatorError> {
        let closes = validate(bars, period, period, "EMA")?;

        let ema_all = ema_series(&closes, period);

        Ok(zip_tail(bars, &ema_all, period)
            .map(|(date, &ema)| EmaPoint { date, ema })
            .collect())
    }

    /// Relative Strength Index with Wilder smoothing.
    ///
    /// Average gain/loss are seeded as simple means of the first `period`
    /// deltas, then smoothed with `(avg * (period - 1) + delta) / period`.
    /// A zero average loss drives RS to infinity and RSI to 100, so the
    /// output is bounded to `[0, 100]` by construction.
    pub fn rsi(&self, bars: &[PriceBar], period: usize) -> Result<Vec<RsiPoint>, IndicatorError> {
        // One extra close: the first delta consumes two closes.
        let closes = validate(bars, period, period + 1, "RSI")?;

        let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
        let gains: Vec<f64> = deltas.iter().map(|d| d.max(0.0)).collect();
        let losses: Vec<f64> = deltas.iter().map(|d| (-d).max(0.0)).collect();

        let mut avg_gain = mean(&gains[..period]);
        let mut avg_loss = mean(&losses[..period]);

        let mut rsi_values = vec![rsi_from_averages(avg_gain, avg_loss)];

        for i in period..deltas.len() {
            avg_gain = (avg_gain * (period as f64 - 1.0) + gains[i]) / period as f64;
            avg_loss = (avg_loss * (period as f64 - 1.0) + losses[i]) / period as f64;
            rsi_values.push(rsi_from_averages(avg_gain, avg_loss));
        }

        Ok(zip_tail(bars, &rsi_values, period)
            .map(|(date, &rsi)| RsiPoint { date, rsi })
            .collect())
    }

    /// MACD 12/26/9 over the full series, reporting the last 26 aligned
    /// `(macd, signal, histogram)` triples.
    pub fn macd(&self, bars: &[PriceBar]) -> Result<Vec<MacdPoint>, IndicatorError> {
        let closes = validate(bars, MACD_SLOW, MACD_SLOW, "MACD")?;

        let ema_fast = ema_series(&closes, MACD_FAST);
        let ema_slow = ema_series(&closes, MACD_SLOW);

        let macd_line: Vec<f64> = ema_fast
            .iter()
            .zip(&ema_slow)
            .map(|(fast, slow)| fast - slow)
            .collect();
        let signal_line = ema_series(&macd_line, MACD_SIGNAL);

        let dates = tail(bars, MACD_SLOW);
        let macd_tail = tail(&macd_line, MACD_SLOW);
        let signal_tail = tail(&signal_line, MACD_SLOW);

        Ok(dates
            .iter()
            .zip(macd_tail.iter().zip(signal_tail))
            .map(|(bar, (&macd, &signal))| MacdPoint {
                date: bar.date,
                macd,
                signal,
                histogram: macd - signal,
            })
            .collect())
    }

    /// Bollinger Bands: trailing-window mean ± 2 population standard
    /// deviations, reported for the most recent `period` windows.
    pub fn bollinger(
        &self,
        bars: &[PriceBar],
        period: usize,
    ) -> Result<Vec<BollingerPoint>, IndicatorError> {
        let closes = validate(bars, period, period, "Bollinger Bands")?;

        let bands: Vec<(f64, f64)> = rolling(&closes, period)
            .expect("length validated against period")
            .map(|window| (mean(window), population_std_dev(window)))
            .collect();

        Ok(zip_tail(bars, &bands, period)
            .map(|(date, &(middle, std))| BollingerPoint {
                date,
                middle,
                upper: middle + 2.0 * std,
                lower: middle - 2.0 * std,
            })
            .collect())
    }
}

/// Checks the period and the minimum series length, then extracts closes.
fn validate(
    bars: &[PriceBar],
    period: usize,
    required: usize,
    indicator: &'static str,
) -> Result<Vec<f64>, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod(period));
    }
    if bars.len() < required {
        return Err(IndicatorError::InsufficientData {
            indicator,
            required,
            actual: bars.len(),
        });
    }
    Ok(bars.iter().map(|bar| bar.close).collect())
}

/// The EMA recurrence over a full series: seeded with the first value,
/// `ema[i] = v[i] * k + ema[i-1] * (1 - k)` with `k = 2 / (span + 1)`.
fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    let k = 2.0 / (span as f64 + 1.0);
    let mut ema = Vec::with_capacity(values.len());

    for &value in values {
        let next = match ema.last() {
            Some(&prev) => value * k + prev * (1.0 - k),
            None => value,
        };
        ema.push(next);
    }

    ema
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = safe_divide(avg_gain, avg_loss, 0.0);
    100.0 - 100.0 / (1.0 + rs)
}

/// The last `n` elements of a slice (the whole slice when shorter).
fn tail<T>(slice: &[T], n: usize) -> &[T] {
    &slice[slice.len().saturating_sub(n)..]
}

/// Pairs the last `period` bar dates with the last `period` computed
/// values. When fewer than `period` values exist, the zip stops early, so
/// the oldest reported value carries the oldest date of the tail window.
/// This pairing is the engine's documented output contract.
fn zip_tail<'a, T>(
    bars: &'a [PriceBar],
    values: &'a [T],
    period: usize,
) -> impl Iterator<Item = (NaiveDate, &'a T)> {
    tail(bars, period)
        .iter()
        .map(|bar| bar.date)
        .zip(tail(values, period))
}
