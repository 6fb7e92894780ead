//! One complete generate → corrupt → filter → analyse run.

use crate::config::SignalConfig;
use crate::dsp::filter::MovingAverage;
use crate::dsp::noise::NoiseInjector;
use crate::dsp::stats::snr_against_reference;
use crate::dsp::waveform::time_axis;
use crate::error::Result;
use crate::types::{Signal, SignalStats, SpectralProfile, WaveformKind, WaveformSet};
use serde::Serialize;

/// Spectra of the analysed waveform at each stage.
#[derive(Clone, Debug, Serialize)]
pub struct SpectrumSet {
    pub clean: SpectralProfile,
    pub noisy: SpectralProfile,
    pub filtered: SpectralProfile,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct SnrReport {
    pub noisy_db: f64,
    pub filtered_db: f64,
}

impl SnrReport {
    pub fn improvement_db(&self) -> f64 {
        self.filtered_db - self.noisy_db
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct StatsReport {
    pub clean: SignalStats,
    pub noisy: SignalStats,
    pub filtered: SignalStats,
}

/// Everything one run produces, ready to be printed or plotted.
#[derive(Clone, Debug, Serialize)]
pub struct Analysis {
    pub config: SignalConfig,
    #[serde(skip)]
    pub time: Vec<f64>,
    /// One entry per [`WaveformKind::ALL`], in that order.
    #[serde(skip)]
    pub waveforms: Vec<WaveformSet>,
    #[serde(skip)]
    pub spectra: SpectrumSet,
    pub snr: SnrReport,
    pub stats: StatsReport,
    /// Strongest non-DC frequency of the clean analysed waveform.
    pub peak_frequency: Option<f64>,
}

impl Analysis {
    pub fn run(config: &SignalConfig) -> Result<Self> {
        config.validate()?;

        let time = time_axis(config.duration, config.sample_rate);
        log::debug!(
            "time axis: {} samples over {} s at {} Hz",
            time.len(),
            config.duration,
            config.sample_rate
        );

        let filter = MovingAverage::new(config.filter_window, config.edge_policy)?;
        let mut waveforms = Vec::with_capacity(WaveformKind::ALL.len());
        for kind in WaveformKind::ALL {
            let clean = Signal::on_axis(kind, &time, config);
            // Fresh injector per waveform: the same seed gives every kind the same noise.
            let noisy = NoiseInjector::new(config.noise_level, config.seed)?.corrupt(&clean.samples);
            let filtered = filter.filter(&noisy.samples)?;
            log::debug!(
                "{kind}: {} clean, {} filtered samples (window {}, {})",
                clean.len(),
                filtered.samples.len(),
                config.filter_window,
                config.edge_policy
            );
            waveforms.push(WaveformSet { clean, noisy, filtered });
        }

        let set = waveforms
            .iter()
            .find(|w| w.kind() == config.analysed)
            .unwrap_or(&waveforms[0]);

        let spectra = SpectrumSet {
            clean: SpectralProfile::compute(&set.clean.samples, config.sample_rate)?,
            noisy: SpectralProfile::compute(&set.noisy.samples, config.sample_rate)?,
            filtered: SpectralProfile::compute(&set.filtered.samples, config.sample_rate)?,
        };
        let peak_frequency = spectra.clean.peak().map(|(f, _)| f);

        let snr = SnrReport {
            noisy_db: snr_against_reference(&set.clean.samples, &set.noisy.samples),
            filtered_db: snr_against_reference(
                set.filtered.aligned(&set.clean.samples),
                &set.filtered.samples,
            ),
        };

        let stats = StatsReport {
            clean: SignalStats::compute(&set.clean.samples)?,
            noisy: SignalStats::compute(&set.noisy.samples)?,
            filtered: SignalStats::compute(&set.filtered.samples)?,
        };

        log::info!(
            "{}: SNR {:.2} dB noisy, {:.2} dB filtered ({:+.2} dB)",
            config.analysed,
            snr.noisy_db,
            snr.filtered_db,
            snr.improvement_db()
        );

        Ok(Self {
            config: config.clone(),
            time,
            waveforms,
            spectra,
            snr,
            stats,
            peak_frequency,
        })
    }

    pub fn waveform(&self, kind: WaveformKind) -> Option<&WaveformSet> {
        self.waveforms.iter().find(|w| w.kind() == kind)
    }

    /// The waveform whose spectrum, SNR and statistics were computed.
    pub fn analysed(&self) -> &WaveformSet {
        self.waveform(self.config.analysed).unwrap_or(&self.waveforms[0])
    }

    /// Time instants matching the filtered output of any waveform.
    pub fn filtered_time(&self) -> &[f64] {
        self.analysed().filtered.aligned(&self.time)
    }
}
