//! Plain-text and JSON renditions of an [`Analysis`].

use std::fmt;
use wavelab_core::{Analysis, SignalStats};

const RULE: &str = "============================================================";

/// Console report: configuration, SNR, then per-signal statistics.
pub struct TextReport<'a>(pub &'a Analysis);

fn write_stats(f: &mut fmt::Formatter<'_>, name: &str, stats: &SignalStats) -> fmt::Result {
    writeln!(f, "\n{name} Statistics:")?;
    writeln!(f, "  Mean: {:.4}", stats.mean)?;
    writeln!(f, "  Std Dev: {:.4}", stats.std_dev)?;
    writeln!(f, "  Min: {:.4}", stats.min)?;
    writeln!(f, "  Max: {:.4}", stats.max)?;
    writeln!(f, "  RMS: {:.4}", stats.rms)
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;
        let config = &analysis.config;
        let kind = config.analysed;

        writeln!(f, "{RULE}")?;
        writeln!(f, "SIGNAL ANALYSIS RESULTS")?;
        writeln!(f, "{RULE}")?;

        writeln!(f, "\nConfiguration:")?;
        writeln!(f, "  Waveform: {kind}")?;
        writeln!(f, "  Frequency: {} Hz", config.frequency)?;
        writeln!(f, "  Amplitude: {}", config.amplitude)?;
        writeln!(f, "  Duration: {} seconds", config.duration)?;
        writeln!(f, "  Sample Rate: {} Hz", config.sample_rate)?;
        writeln!(f, "  Noise Level: {}", config.noise_level)?;
        writeln!(
            f,
            "  Filter Window: {} samples ({})",
            config.filter_window, config.edge_policy
        )?;
        writeln!(f, "  Seed: {}", config.seed)?;

        writeln!(f, "\nSignal-to-Noise Ratio:")?;
        writeln!(f, "  Noisy Signal SNR: {:.2} dB", analysis.snr.noisy_db)?;
        writeln!(f, "  Filtered Signal SNR: {:.2} dB", analysis.snr.filtered_db)?;
        writeln!(f, "  SNR Improvement: {:.2} dB", analysis.snr.improvement_db())?;
        if let Some(peak) = analysis.peak_frequency {
            writeln!(f, "  Spectral Peak: {peak:.2} Hz")?;
        }

        write_stats(f, &format!("Clean {kind} Wave"), &analysis.stats.clean)?;
        write_stats(f, &format!("Noisy {kind} Wave"), &analysis.stats.noisy)?;
        write_stats(f, &format!("Filtered {kind} Wave"), &analysis.stats.filtered)
    }
}

pub fn render_text(analysis: &Analysis) -> String {
    TextReport(analysis).to_string()
}

/// Pretty JSON with config, SNR, statistics and spectral peak. Infinite SNR
/// values serialize as `null`.
pub fn render_json(analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavelab_core::{SignalConfig, WaveformKind};

    #[test]
    fn test_text_report_sections() {
        let analysis = Analysis::run(&SignalConfig::default()).unwrap();
        let text = render_text(&analysis);
        assert!(text.contains("SIGNAL ANALYSIS RESULTS"));
        assert!(text.contains("  Frequency: 2 Hz"));
        assert!(text.contains("  Filter Window: 20 samples (same)"));
        assert!(text.contains("Noisy Signal SNR:"));
        assert!(text.contains("SNR Improvement:"));
        assert!(text.contains("Clean Sine Wave Statistics:"));
        assert!(text.contains("Filtered Sine Wave Statistics:"));
        assert_eq!(text.matches("  RMS: ").count(), 3);
    }

    #[test]
    fn test_text_report_follows_analysed_kind() {
        let config = SignalConfig { analysed: WaveformKind::Sawtooth, ..Default::default() };
        let text = render_text(&Analysis::run(&config).unwrap());
        assert!(text.contains("Noisy Sawtooth Wave Statistics:"));
    }

    #[test]
    fn test_json_report() {
        let analysis = Analysis::run(&SignalConfig::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&render_json(&analysis).unwrap()).unwrap();
        assert_eq!(json["config"]["filter_window"], 20);
        assert_eq!(json["config"]["analysed"], "sine");
        assert!(json["snr"]["noisy_db"].is_number());
        assert!(json["stats"]["clean"]["rms"].as_f64().unwrap() > 0.6);
        assert!(json.get("waveforms").is_none());
    }

    #[test]
    fn test_json_report_infinite_snr_is_null() {
        let config = SignalConfig { noise_level: 0.0, ..Default::default() };
        let analysis = Analysis::run(&config).unwrap();
        assert!(analysis.snr.noisy_db.is_infinite());
        let json: serde_json::Value = serde_json::from_str(&render_json(&analysis).unwrap()).unwrap();
        assert!(json["snr"]["noisy_db"].is_null());
        assert!(json["snr"]["filtered_db"].is_number());
    }
}
