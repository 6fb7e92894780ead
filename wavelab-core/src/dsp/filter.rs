//! Moving-average (boxcar) smoothing filter.

use crate::error::{Error, Result};
use crate::types::FilteredSignal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the window is handled where it overhangs either end of the signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// Zero-padded centred convolution; output has the input length and the
    /// edges are pulled toward zero.
    #[default]
    Same,
    /// Only positions where the window fully overlaps; `N - M + 1` samples.
    Valid,
    /// Centred window clipped to the signal and averaged over the samples it
    /// actually covers; output has the input length.
    Shrink,
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EdgePolicy::Same => "same",
            EdgePolicy::Valid => "valid",
            EdgePolicy::Shrink => "shrink",
        })
    }
}

impl FromStr for EdgePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "same" => Ok(EdgePolicy::Same),
            "valid" => Ok(EdgePolicy::Valid),
            "shrink" => Ok(EdgePolicy::Shrink),
            other => Err(format!("unknown edge policy '{other}' (expected same, valid or shrink)")),
        }
    }
}

/// Uniform length-`M` FIR smoother, each tap `1/M`.
#[derive(Clone, Copy, Debug)]
pub struct MovingAverage {
    window: usize,
    policy: EdgePolicy,
}

impl MovingAverage {
    pub fn new(window: usize, policy: EdgePolicy) -> Result<Self> {
        if window == 0 {
            return Err(Error::InvalidWindow(window));
        }
        Ok(Self { window, policy })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// The normalized kernel.
    pub fn taps(&self) -> Vec<f64> {
        vec![1.0 / self.window as f64; self.window]
    }

    pub fn apply(&self, samples: &[f64]) -> Result<Vec<f64>> {
        let n = samples.len();
        let m = self.window;
        if n == 0 {
            return Ok(Vec::new());
        }

        // prefix[k] = samples[0] + .. + samples[k - 1]
        let mut prefix = Vec::with_capacity(n + 1);
        prefix.push(0.0);
        let mut acc = 0.0;
        for &s in samples {
            acc += s;
            prefix.push(acc);
        }
        let range_sum = |lo: usize, hi: usize| prefix[hi] - prefix[lo];
        let scale = 1.0 / m as f64;

        let out = match self.policy {
            EdgePolicy::Valid => {
                if m > n {
                    return Err(Error::WindowTooLarge { window: m, len: n });
                }
                (0..=n - m).map(|i| range_sum(i, i + m) * scale).collect()
            }
            EdgePolicy::Same | EdgePolicy::Shrink => {
                // Output i is full-convolution index i + (M-1)/2, which covers
                // input samples [i + off - (M-1), i + off].
                let off = (m - 1) / 2;
                (0..n)
                    .map(|i| {
                        let hi = (i + off + 1).min(n);
                        let lo = (i + off + 1).saturating_sub(m).min(hi);
                        let sum = range_sum(lo, hi);
                        match self.policy {
                            EdgePolicy::Shrink => sum / (hi - lo).max(1) as f64,
                            _ => sum * scale,
                        }
                    })
                    .collect()
            }
        };
        Ok(out)
    }

    pub fn filter(&self, samples: &[f64]) -> Result<FilteredSignal> {
        let offset = match self.policy {
            EdgePolicy::Valid => (self.window - 1) / 2,
            EdgePolicy::Same | EdgePolicy::Shrink => 0,
        };
        Ok(FilteredSignal {
            samples: self.apply(samples)?,
            window: self.window,
            offset,
        })
    }
}

/// Smooth `samples` with a length-`window` moving average.
pub fn moving_average(samples: &[f64], window: usize, policy: EdgePolicy) -> Result<Vec<f64>> {
    MovingAverage::new(window, policy)?.apply(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len(), "{a:?} vs {b:?}");
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-12, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_taps_sum_to_one() {
        let taps = MovingAverage::new(7, EdgePolicy::Same).unwrap().taps();
        assert_eq!(taps.len(), 7);
        assert!((taps.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(matches!(
            MovingAverage::new(0, EdgePolicy::Same),
            Err(Error::InvalidWindow(0))
        ));
    }

    #[test]
    fn test_constant_valid_is_constant() {
        let input = vec![0.7; 100];
        for m in [1, 2, 5, 20, 100] {
            let out = moving_average(&input, m, EdgePolicy::Valid).unwrap();
            assert_eq!(out.len(), 100 - m + 1);
            assert!(out.iter().all(|&v| (v - 0.7).abs() < 1e-12), "window {m}");
        }
    }

    #[test]
    fn test_constant_shrink_is_constant() {
        let input = vec![-2.5; 64];
        for m in [1, 4, 9, 64, 200] {
            let out = moving_average(&input, m, EdgePolicy::Shrink).unwrap();
            assert_eq!(out.len(), 64);
            assert!(out.iter().all(|&v| (v + 2.5).abs() < 1e-12), "window {m}");
        }
    }

    #[test]
    fn test_constant_same_interior_is_constant() {
        let input = vec![1.0; 50];
        let m = 20;
        let out = moving_average(&input, m, EdgePolicy::Same).unwrap();
        assert_eq!(out.len(), 50);
        let off = (m - 1) / 2;
        // Fully covered positions: i + off >= m - 1 and i + off <= n - 1
        for (i, v) in out.iter().enumerate().take(50 - off).skip(m - 1 - off) {
            assert!((v - 1.0).abs() < 1e-12, "index {i}");
        }
        // Zero padding attenuates both ends.
        assert!(out[0] < 1.0);
        assert!(out[49] < 1.0);
    }

    #[test]
    fn test_same_matches_centred_convolution() {
        // Reference values from a centred zero-padded convolution.
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let odd = moving_average(&x, 3, EdgePolicy::Same).unwrap();
        assert_close(&odd, &[1.0, 2.0, 3.0, 4.0, 3.0]);
        let even = moving_average(&x, 2, EdgePolicy::Same).unwrap();
        assert_close(&even, &[0.5, 1.5, 2.5, 3.5, 4.5]);
        let four = moving_average(&x, 4, EdgePolicy::Same).unwrap();
        assert_close(&four, &[0.75, 1.5, 2.5, 3.5, 3.0]);
    }

    #[test]
    fn test_same_window_longer_than_signal() {
        let x = [3.0, 3.0];
        let out = moving_average(&x, 5, EdgePolicy::Same).unwrap();
        assert_close(&out, &[1.2, 1.2]);
    }

    #[test]
    fn test_valid_values_and_too_large() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let out = moving_average(&x, 3, EdgePolicy::Valid).unwrap();
        assert_close(&out, &[2.0, 3.0, 4.0]);
        assert!(matches!(
            moving_average(&x, 6, EdgePolicy::Valid),
            Err(Error::WindowTooLarge { window: 6, len: 5 })
        ));
    }

    #[test]
    fn test_shrink_edges() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let out = moving_average(&x, 3, EdgePolicy::Shrink).unwrap();
        assert_close(&out, &[1.5, 2.0, 3.0, 4.0, 4.5]);
    }

    #[test]
    fn test_window_one_is_identity() {
        let x = [0.1, -0.4, 9.0];
        for policy in [EdgePolicy::Same, EdgePolicy::Valid, EdgePolicy::Shrink] {
            assert_close(&moving_average(&x, 1, policy).unwrap(), &x);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(moving_average(&[], 3, EdgePolicy::Same).unwrap().is_empty());
    }

    #[test]
    fn test_filter_reduces_noise_power() {
        // Alternating ±1 is pure Nyquist; an even window cancels it.
        let x: Vec<f64> = (0..100).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let out = moving_average(&x, 4, EdgePolicy::Valid).unwrap();
        assert!(out.iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_valid_output_is_centred() {
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let filtered = MovingAverage::new(5, EdgePolicy::Valid).unwrap().filter(&x).unwrap();
        assert_eq!(filtered.offset, 2);
        // A linear ramp is reproduced exactly at the window centre.
        assert_close(&filtered.samples, filtered.aligned(&x));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("Valid".parse::<EdgePolicy>().unwrap(), EdgePolicy::Valid);
        assert!("wrap".parse::<EdgePolicy>().is_err());
        assert_eq!(EdgePolicy::Shrink.to_string(), "shrink");
    }
}
