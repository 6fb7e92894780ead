use crate::dsp::filter::EdgePolicy;
use crate::error::{Error, Result};
use crate::types::WaveformKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on `round(duration * sample_rate)` accepted by [`SignalConfig::validate`].
pub const MAX_SAMPLES: usize = 10_000_000;

/// Parameters for one run of the pipeline.
///
/// Missing fields in a JSON config file fall back to [`Default`], so a file
/// containing only `{"frequency": 5.0}` is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Hz
    pub frequency: f64,
    pub amplitude: f64,
    /// seconds
    pub duration: f64,
    /// samples per second
    pub sample_rate: f64,
    /// Standard deviation of the additive Gaussian noise
    pub noise_level: f64,
    /// Moving-average window size in samples
    pub filter_window: usize,
    pub edge_policy: EdgePolicy,
    /// Waveform whose spectrum, SNR and statistics are reported
    pub analysed: WaveformKind,
    pub seed: u64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            frequency: 2.0,
            amplitude: 1.0,
            duration: 2.0,
            sample_rate: 1000.0,
            noise_level: 0.2,
            filter_window: 20,
            edge_policy: EdgePolicy::Same,
            analysed: WaveformKind::Sine,
            seed: 42,
        }
    }
}

impl SignalConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Number of samples a run will produce: `round(duration * sample_rate)`.
    pub fn sample_count(&self) -> usize {
        (self.duration * self.sample_rate).round() as usize
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(Error::InvalidSampleRate(self.sample_rate));
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(Error::InvalidDuration(self.duration));
        }
        if !(self.frequency.is_finite() && self.frequency >= 0.0) {
            return Err(Error::InvalidFrequency(self.frequency));
        }
        if !self.amplitude.is_finite() {
            return Err(Error::InvalidAmplitude(self.amplitude));
        }
        if !(self.noise_level.is_finite() && self.noise_level >= 0.0) {
            return Err(Error::InvalidNoiseLevel(self.noise_level));
        }
        if self.filter_window == 0 {
            return Err(Error::InvalidWindow(self.filter_window));
        }
        let requested = (self.duration * self.sample_rate).round();
        if !requested.is_finite() || requested > MAX_SAMPLES as f64 {
            return Err(Error::TooManySamples {
                duration: self.duration,
                sample_rate: self.sample_rate,
                max: MAX_SAMPLES,
            });
        }
        let n = self.sample_count();
        if n == 0 {
            return Err(Error::TooFewSamples {
                duration: self.duration,
                sample_rate: self.sample_rate,
            });
        }
        if self.edge_policy == EdgePolicy::Valid && self.filter_window > n {
            return Err(Error::WindowTooLarge {
                window: self.filter_window,
                len: n,
            });
        }
        Ok(())
    }
}
