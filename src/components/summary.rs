use egui::RichText;
use wavelab_core::{Analysis, SignalStats};

fn stats_grid(ui: &mut egui::Ui, id: &str, stats: &SignalStats) {
    egui::Grid::new(id).num_columns(2).striped(true).show(ui, |ui| {
        for (label, value) in [
            ("Mean", stats.mean),
            ("Std Dev", stats.std_dev),
            ("Min", stats.min),
            ("Max", stats.max),
            ("RMS", stats.rms),
        ] {
            ui.label(label);
            ui.monospace(format!("{value:.4}"));
            ui.end_row();
        }
    });
}

/// Side pane with the run's configuration, SNR figures and statistics.
pub fn show_summary(ui: &mut egui::Ui, analysis: &Analysis) {
    let config = &analysis.config;
    let kind = config.analysed;

    ui.heading("Configuration");
    egui::Grid::new("config_grid").num_columns(2).show(ui, |ui| {
        let rows = [
            ("Frequency", format!("{} Hz", config.frequency)),
            ("Amplitude", format!("{}", config.amplitude)),
            ("Duration", format!("{} s", config.duration)),
            ("Sample Rate", format!("{} Hz", config.sample_rate)),
            ("Noise Level", format!("{}", config.noise_level)),
            ("Filter Window", format!("{} samples ({})", config.filter_window, config.edge_policy)),
            ("Seed", config.seed.to_string()),
        ];
        for (label, value) in rows {
            ui.label(label);
            ui.monospace(value);
            ui.end_row();
        }
    });

    ui.separator();
    ui.heading(format!("{kind} SNR"));
    ui.label(format!("Noisy:    {:.2} dB", analysis.snr.noisy_db));
    ui.label(format!("Filtered: {:.2} dB", analysis.snr.filtered_db));
    ui.label(
        RichText::new(format!("Improvement: {:+.2} dB", analysis.snr.improvement_db())).strong(),
    );
    if let Some(peak) = analysis.peak_frequency {
        ui.label(format!("Spectral peak: {peak:.2} Hz"));
    }

    ui.separator();
    for (title, id, stats) in [
        ("Clean", "stats_clean", &analysis.stats.clean),
        ("Noisy", "stats_noisy", &analysis.stats.noisy),
        ("Filtered", "stats_filtered", &analysis.stats.filtered),
    ] {
        ui.label(RichText::new(format!("{title} {kind} Wave")).strong());
        stats_grid(ui, id, stats);
        ui.add_space(6.0);
    }
}
