//! Signal statistics: mean, power, RMS and SNR.

use crate::error::{Error, Result};
use crate::types::SignalStats;

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Mean power `mean(x²)`; 0 for an empty slice.
pub fn power(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64
}

pub fn rms(samples: &[f64]) -> f64 {
    power(samples).sqrt()
}

/// `10·log10(p_signal / p_noise)`, or `+∞` when there is no noise power.
pub fn snr_from_powers(p_signal: f64, p_noise: f64) -> f64 {
    if p_noise > 0.0 {
        10.0 * (p_signal / p_noise).log10()
    } else {
        f64::INFINITY
    }
}

/// SNR in dB of `signal` against a separate `noise` realization.
pub fn snr_db(signal: &[f64], noise: &[f64]) -> f64 {
    snr_from_powers(power(signal), power(noise))
}

/// SNR of `observed` measured against the known `clean` reference; the
/// noise is taken as `observed - clean` over their common length.
pub fn snr_against_reference(clean: &[f64], observed: &[f64]) -> f64 {
    let n = clean.len().min(observed.len());
    let residual: Vec<f64> = observed[..n]
        .iter()
        .zip(&clean[..n])
        .map(|(o, c)| o - c)
        .collect();
    snr_db(&clean[..n], &residual)
}

impl SignalStats {
    pub fn compute(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::EmptySignal);
        }
        let mean = mean(samples);
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / samples.len() as f64;
        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| (lo.min(s), hi.max(s)));
        Ok(Self {
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
            rms: rms(samples),
        })
    }
}
