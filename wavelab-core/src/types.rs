use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Periodic waveform shapes the generator can synthesize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WaveformKind {
    #[default]
    Sine,
    Square,
    Sawtooth,
}

impl WaveformKind {
    pub const ALL: [WaveformKind; 3] = [WaveformKind::Sine, WaveformKind::Square, WaveformKind::Sawtooth];

    pub fn label(self) -> &'static str {
        match self {
            WaveformKind::Sine => "Sine",
            WaveformKind::Square => "Square",
            WaveformKind::Sawtooth => "Sawtooth",
        }
    }
}

impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WaveformKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sine" | "sin" => Ok(WaveformKind::Sine),
            "square" | "sq" => Ok(WaveformKind::Square),
            "sawtooth" | "saw" => Ok(WaveformKind::Sawtooth),
            other => Err(format!("unknown waveform '{other}' (expected sine, square or sawtooth)")),
        }
    }
}

/// A sampled waveform on a uniform time grid.
#[derive(Clone, Debug, Serialize)]
pub struct Signal {
    pub samples: Vec<f64>,
    pub sample_rate: f64,
    pub duration: f64,
    pub amplitude: f64,
    pub frequency: f64,
    pub kind: WaveformKind,
}

impl Signal {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A clean signal plus the additive noise realization that corrupted it.
#[derive(Clone, Debug, Serialize)]
pub struct NoisySignal {
    pub samples: Vec<f64>,
    /// `samples - clean`, kept so SNR can be measured against the true noise.
    pub noise: Vec<f64>,
    pub noise_level: f64,
}

/// Output of the moving-average filter.
#[derive(Clone, Debug, Serialize)]
pub struct FilteredSignal {
    pub samples: Vec<f64>,
    pub window: usize,
    /// Index of the input sample that `samples[0]` is aligned with.
    pub offset: usize,
}

impl FilteredSignal {
    /// The slice of `reference` that lines up with the filtered samples.
    pub fn aligned<'a>(&self, reference: &'a [f64]) -> &'a [f64] {
        let start = self.offset.min(reference.len());
        let end = (start + self.samples.len()).min(reference.len());
        &reference[start..end]
    }
}

/// Non-negative frequency half of a DFT magnitude spectrum.
#[derive(Clone, Debug, Serialize)]
pub struct SpectralProfile {
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<f64>,
    /// Bin spacing in Hz (`sample_rate / n`).
    pub resolution: f64,
    pub sample_rate: f64,
}

/// Summary statistics of one sample sequence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SignalStats {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub rms: f64,
}

/// Clean, noisy and filtered renditions of one waveform kind.
#[derive(Clone, Debug, Serialize)]
pub struct WaveformSet {
    pub clean: Signal,
    pub noisy: NoisySignal,
    pub filtered: FilteredSignal,
}

impl WaveformSet {
    pub fn kind(&self) -> WaveformKind {
        self.clean.kind
    }
}
