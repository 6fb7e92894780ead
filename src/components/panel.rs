use crate::canvas::colors::alpha_byte;
use crate::canvas::layout::{Panel, Series, Stroke};
use egui::{Color32, RichText};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, VLine};

fn color32(rgb: [u8; 3], alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(rgb[0], rgb[1], rgb[2], alpha_byte(alpha))
}

fn line(series: &Series) -> Line {
    let points: PlotPoints = series.points.clone().into();
    let mut line = Line::new(points)
        .color(color32(series.color, series.alpha))
        .width(series.width);
    if series.stroke == Stroke::Dashed {
        line = line.style(LineStyle::dashed_loose());
    }
    if let Some(name) = &series.name {
        line = line.name(name);
    }
    line
}

/// Draw one dashboard panel: a bold title above an `egui_plot` chart.
pub fn show_panel(ui: &mut egui::Ui, panel: &Panel, height: f32) {
    ui.label(RichText::new(&panel.title).strong());

    let mut plot = Plot::new(&panel.id)
        .height(height)
        .allow_scroll(false)
        .include_x(panel.x_range.0)
        .include_x(panel.x_range.1)
        .include_y(panel.y_range.0)
        .include_y(panel.y_range.1);
    if let Some(label) = panel.x_label {
        plot = plot.x_axis_label(label);
    }
    if let Some(label) = panel.y_label {
        plot = plot.y_axis_label(label);
    }
    if panel.legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for series in &panel.series {
            plot_ui.line(line(series));
        }
        if let Some(marker) = &panel.marker {
            plot_ui.vline(
                VLine::new(marker.x)
                    .color(color32(marker.color, 0.5))
                    .style(LineStyle::dashed_dense())
                    .name(&marker.label),
            );
        }
    });
}
