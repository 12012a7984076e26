//! Line, area and bar charts for the monitoring tab, built on `egui_plot`.

use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::dashboard::monitoring::{Sample, ServiceErrors};

const CHART_HEIGHT: f32 = 180.0;

/// `[index, value]` pairs; the x axis is the sample index.
pub fn series(samples: &[Sample]) -> Vec<[f64; 2]> {
    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| [index as f64, sample.value])
        .collect()
}

/// Label for an x-axis grid mark: the category at a whole index, else blank.
pub fn category_label<'a>(labels: &[&'a str], value: f64) -> &'a str {
    if value < 0.0 || value.fract().abs() > 1e-6 {
        return "";
    }
    labels.get(value as usize).copied().unwrap_or("")
}

fn static_plot(id: &str, labels: Vec<&'static str>) -> Plot<'static> {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value).to_string())
}

pub fn line_chart(ui: &mut egui::Ui, id: &str, name: &str, samples: &[Sample], color: Color32) {
    let labels = samples.iter().map(|sample| sample.time).collect();
    let points = series(samples);

    static_plot(id, labels).show(ui, |plot_ui| {
        plot_ui.line(
            Line::new(name, PlotPoints::from(points.clone()))
                .color(color)
                .width(2.0),
        );
        plot_ui.points(Points::new(name, PlotPoints::from(points)).color(color).radius(3.0));
    });
}

pub fn area_chart(ui: &mut egui::Ui, id: &str, name: &str, samples: &[Sample], color: Color32) {
    let labels = samples.iter().map(|sample| sample.time).collect();

    static_plot(id, labels).show(ui, |plot_ui| {
        plot_ui.line(
            Line::new(name, PlotPoints::from(series(samples)))
                .color(color)
                .width(2.0)
                .fill(0.0),
        );
    });
}

pub fn bar_chart(ui: &mut egui::Ui, id: &str, name: &str, bars: &[ServiceErrors], color: Color32) {
    let labels = bars.iter().map(|bar| bar.service).collect();
    let bars: Vec<Bar> = bars
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            Bar::new(index as f64, f64::from(bar.errors))
                .name(bar.service)
                .width(0.6)
        })
        .collect();

    static_plot(id, labels).show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new(name, bars).color(color));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::monitoring::LATENCY_MS;

    #[test]
    fn series_uses_sample_index_as_x() {
        let points = series(&LATENCY_MS);
        assert_eq!(points.len(), LATENCY_MS.len());
        assert_eq!(points[0], [0.0, 45.0]);
        assert_eq!(points[6], [6.0, 43.0]);
    }

    #[test]
    fn category_label_only_at_whole_indices() {
        let labels = ["00:00", "00:05", "00:10"];
        assert_eq!(category_label(&labels, 1.0), "00:05");
        assert_eq!(category_label(&labels, 1.5), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_label(&labels, 3.0), "");
    }
}
