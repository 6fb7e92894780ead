//! Dashboard layout: which traces go in which panel, with what titles,
//! colours and axis limits. Pure data, drawn by `components::panel`.

use crate::canvas::colors::{filtered_color, waveform_color, BLACK, BLUE, GREEN, RED};
use crate::canvas::waveform_renderer::{envelope_points, value_range};
use wavelab_core::{Analysis, SpectralProfile};

/// Default spectrum x-limit in Hz; widened to `5 * frequency` for faster tones.
pub const SPECTRUM_MIN_SPAN_HZ: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    Dashed,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub name: Option<String>,
    pub points: Vec<[f64; 2]>,
    pub color: [u8; 3],
    pub alpha: f32,
    pub width: f32,
    pub stroke: Stroke,
}

/// Vertical reference line.
#[derive(Clone, Debug)]
pub struct Marker {
    pub x: f64,
    pub label: String,
    pub color: [u8; 3],
}

#[derive(Clone, Debug)]
pub struct Panel {
    pub id: String,
    pub title: String,
    pub x_label: Option<&'static str>,
    pub y_label: Option<&'static str>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub series: Vec<Series>,
    pub marker: Option<Marker>,
    pub legend: bool,
}

#[derive(Clone, Debug)]
pub struct Dashboard {
    pub title: String,
    /// Rows 1–3 hold one panel per waveform kind.
    pub grid: Vec<Vec<Panel>>,
    /// Full-width spectrum comparison.
    pub spectrum: Panel,
}

impl Dashboard {
    pub fn panel_count(&self) -> usize {
        self.grid.iter().map(Vec::len).sum::<usize>() + 1
    }
}

fn series(points: Vec<[f64; 2]>, color: [u8; 3], width: f32, alpha: f32) -> Series {
    Series {
        name: None,
        points,
        color,
        alpha,
        width,
        stroke: Stroke::Solid,
    }
}

fn snr_suffix(db: f64) -> String {
    format!("SNR={db:.1} dB")
}

/// Lay out the 3 × 3 time-domain grid and the spectrum strip for `analysis`.
///
/// `max_points` caps every time-domain trace (see [`envelope_points`]).
pub fn build_dashboard(analysis: &Analysis, max_points: usize) -> Dashboard {
    let config = &analysis.config;
    let amp = config.amplitude.abs().max(f64::EPSILON);
    let t_end = analysis.time.last().copied().unwrap_or(0.0);
    let x_range = (0.0, t_end);
    let filtered_time = analysis.filtered_time();

    let mut clean_row = Vec::new();
    let mut noisy_row = Vec::new();
    let mut filtered_row = Vec::new();

    for (col, set) in analysis.waveforms.iter().enumerate() {
        let kind = set.kind();
        let color = waveform_color(kind);
        let analysed = kind == config.analysed;
        let y_label = if col == 0 { Some("Amplitude") } else { None };
        let clean_pts = envelope_points(&analysis.time, &set.clean.samples, max_points);

        clean_row.push(Panel {
            id: format!("clean_{col}"),
            title: format!("{kind} Wave (Clean)"),
            x_label: None,
            y_label,
            x_range,
            y_range: (-1.2 * amp, 1.2 * amp),
            series: vec![series(clean_pts.clone(), color, 2.0, 1.0)],
            marker: None,
            legend: false,
        });

        noisy_row.push(Panel {
            id: format!("noisy_{col}"),
            title: if analysed {
                format!("{kind} Wave (Noisy, {})", snr_suffix(analysis.snr.noisy_db))
            } else {
                format!("{kind} Wave (Noisy)")
            },
            x_label: None,
            y_label,
            x_range,
            y_range: (-1.5 * amp, 1.5 * amp),
            series: vec![series(
                envelope_points(&analysis.time, &set.noisy.samples, max_points),
                color,
                1.0,
                0.7,
            )],
            marker: None,
            legend: false,
        });

        let mut filtered = series(
            envelope_points(filtered_time, &set.filtered.samples, max_points),
            filtered_color(),
            2.0,
            1.0,
        );
        let mut reference = series(clean_pts, color, 1.5, 0.5);
        reference.stroke = Stroke::Dashed;
        if analysed {
            filtered.name = Some("Filtered".into());
            reference.name = Some("Clean".into());
        }

        filtered_row.push(Panel {
            id: format!("filtered_{col}"),
            title: if analysed {
                format!("{kind} Wave (Filtered, {})", snr_suffix(analysis.snr.filtered_db))
            } else {
                format!("{kind} Wave (Filtered)")
            },
            x_label: Some("Time (s)"),
            y_label,
            x_range,
            y_range: (-1.5 * amp, 1.5 * amp),
            series: vec![filtered, reference],
            marker: None,
            legend: analysed,
        });
    }

    Dashboard {
        title: "Signal Visualization and Analysis".into(),
        grid: vec![clean_row, noisy_row, filtered_row],
        spectrum: spectrum_panel(analysis),
    }
}

/// Upper x-limit of the spectrum strip.
pub fn spectrum_span(frequency: f64, sample_rate: f64) -> f64 {
    (5.0 * frequency).max(SPECTRUM_MIN_SPAN_HZ).min(sample_rate / 2.0)
}

fn spectrum_panel(analysis: &Analysis) -> Panel {
    let config = &analysis.config;
    let span = spectrum_span(config.frequency, config.sample_rate);

    let trace = |name: &str, profile: &SpectralProfile, color, width, alpha| Series {
        name: Some(name.to_string()),
        ..series(profile.points_up_to(span), color, width, alpha)
    };
    let spectra = &analysis.spectra;
    let traces = vec![
        trace("Clean Signal", &spectra.clean, BLUE, 2.0, 0.7),
        trace("Noisy Signal", &spectra.noisy, RED, 1.5, 0.7),
        trace("Filtered Signal", &spectra.filtered, GREEN, 2.0, 0.8),
    ];

    let peak = traces
        .iter()
        .filter_map(|s| value_range(&s.points.iter().map(|p| p[1]).collect::<Vec<_>>()))
        .map(|(_, hi)| hi)
        .fold(0.0f64, f64::max);

    Panel {
        id: "spectrum".into(),
        title: format!("Frequency Domain: {} Wave Comparison (FFT)", config.analysed),
        x_label: Some("Frequency (Hz)"),
        y_label: Some("Magnitude"),
        x_range: (0.0, span),
        y_range: (0.0, if peak > 0.0 { peak * 1.05 } else { 1.0 }),
        series: traces,
        marker: Some(Marker {
            x: config.frequency,
            label: format!("Signal Frequency ({} Hz)", config.frequency),
            color: BLACK,
        }),
        legend: true,
    }
}
