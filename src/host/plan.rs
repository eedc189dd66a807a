//! Acquisition plan chosen from the command-line counts

use super::error::{LoggerError, Result};

/// What the logger should record
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AcquisitionPlan {
    /// Print samples as CSV until the stream ends
    Stream,
    /// Record one dataset per entry, each with that many samples
    Datasets(Vec<usize>),
}

impl AcquisitionPlan {
    /// No count: stream. One count: one dataset. Three: `start stop step`
    /// sweep over `start..stop`.
    pub fn from_counts(counts: &[u64]) -> Result<Self> {
        match counts {
            [] => Ok(AcquisitionPlan::Stream),
            &[n] => Ok(AcquisitionPlan::Datasets(vec![n as usize])),
            &[start, stop, step] => {
                if step == 0 {
                    return Err(LoggerError::InvalidSweep { start, stop, step });
                }
                let actual_stop = (stop / step) * step;
                log::info!(
                    "Taking datasets from {} to {} events, in steps of {}",
                    start, actual_stop, step
                );
                Ok(AcquisitionPlan::Datasets(
                    (start..stop).step_by(step as usize).map(|n| n as usize).collect(),
                ))
            }
            _ => Err(LoggerError::InvalidCounts(counts.len())),
        }
    }
}
