//! Dataset analysis: temperature, sampling interval and latency statistics

use std::fmt;

use super::record::HostRecord;

/// Percentiles reported for latency
pub const LATENCY_PERCENTILES: [f64; 6] = [5.0, 25.0, 50.0, 75.0, 95.0, 99.0];

/// Summary of one dataset
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub samples: usize,
    pub average_temperature: f64,
    /// Mean gap between consecutive device timestamps (µs); needs 2 samples
    pub average_interval_us: Option<f64>,
    pub latency: LatencySummary,
}

/// Latency distribution in microseconds
#[derive(Clone, Debug, PartialEq)]
pub struct LatencySummary {
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1); 0 for a single sample
    pub std_dev: f64,
    /// Values at [`LATENCY_PERCENTILES`]
    pub percentiles: [f64; 6],
}

impl Analysis {
    /// Analyze a dataset. Returns `None` for an empty one.
    pub fn from_records(records: &[HostRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let n = records.len() as f64;
        let average_temperature = records.iter().map(|r| f64::from(r.temperature)).sum::<f64>() / n;

        let average_interval_us = (records.len() > 1).then(|| {
            let total: f64 = records
                .windows(2)
                .map(|w| w[1].pico_timestamp_us as f64 - w[0].pico_timestamp_us as f64)
                .sum();
            total / (records.len() - 1) as f64
        });

        let latencies: Vec<f64> = records.iter().map(|r| r.latency_us as f64).collect();

        Some(Self {
            samples: records.len(),
            average_temperature,
            average_interval_us,
            latency: LatencySummary::from_values(&latencies),
        })
    }

    /// Approximate samples per second
    pub fn sample_rate_hz(&self) -> Option<f64> {
        self.average_interval_us
            .filter(|&dt| dt > 0.0)
            .map(|dt| 1e6 / dt)
    }
}

impl LatencySummary {
    fn from_values(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std_dev = if values.len() > 1 {
            let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
            var.sqrt()
        } else {
            0.0
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mut percentiles = [0.0; 6];
        for (slot, &p) in percentiles.iter_mut().zip(LATENCY_PERCENTILES.iter()) {
            *slot = percentile(&sorted, p);
        }

        Self {
            mean,
            median: percentile(&sorted, 50.0),
            std_dev,
            percentiles,
        }
    }
}

/// Linear-interpolated percentile of sorted data (numpy's default method)
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        len => {
            let rank = (p / 100.0).clamp(0.0, 1.0) * (len - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = rank.ceil() as usize;
            sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis of {} samples:", self.samples)?;
        writeln!(f, "  Average temperature:  {:.2}", self.average_temperature)?;
        if let Some(dt) = self.average_interval_us {
            writeln!(f, "  Average interval:     {:.0} us  ({:.2} ms)", dt, dt / 1000.0)?;
        }
        if let Some(rate) = self.sample_rate_hz() {
            writeln!(f, "  Approx. sample rate:  {:.1} Hz", rate)?;
        }
        write!(f, "{}", self.latency)
    }
}

impl fmt::Display for LatencySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Latency:")?;
        writeln!(f, "    Mean: {:.2} us", self.mean)?;
        writeln!(f, "    Median: {:.2} us", self.median)?;
        writeln!(f, "    Standard Deviation: {:.2} us", self.std_dev)?;
        writeln!(f, "    Percentiles:")?;
        for (p, v) in LATENCY_PERCENTILES.iter().zip(self.percentiles.iter()) {
            writeln!(f, "      {:>2}th: {:.2} us", p, v)?;
        }
        Ok(())
    }
}
