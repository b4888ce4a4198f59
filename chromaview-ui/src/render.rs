//! Renderer collaborator boundary
//!
//! The pipeline hands a finished series plus axis labels to a
//! [`SeriesRenderer`] and receives a displayable plot. The bundled
//! implementation emits a self-contained SVG; swapping in another renderer
//! does not touch the pipeline.

use crate::models::ChromatogramSeries;

/// Axis labels and title for a rendered plot
#[derive(Debug, Clone)]
pub struct PlotLabels {
    pub x_label: String,
    pub y_label: String,
    pub title: String,
}

/// Contract for the external rendering collaborator
pub trait SeriesRenderer: Send + Sync {
    /// Render the series into a displayable plot document.
    fn render(&self, series: &ChromatogramSeries, labels: &PlotLabels) -> String;
}

/// Renders a series as a standalone SVG line plot
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const MARGIN: f64 = 50.0;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl SeriesRenderer for SvgRenderer {
    fn render(&self, series: &ChromatogramSeries, labels: &PlotLabels) -> String {
        let points = &series.points;

        let (t_min, t_max) = min_max(points.iter().map(|p| p.time));
        let (i_min, i_max) = min_max(points.iter().map(|p| p.intensity));

        let plot_w = WIDTH - 2.0 * MARGIN;
        let plot_h = HEIGHT - 2.0 * MARGIN;

        let polyline: Vec<String> = points
            .iter()
            .map(|p| {
                let x = MARGIN + scale(p.time, t_min, t_max) * plot_w;
                let y = HEIGHT - MARGIN - scale(p.intensity, i_min, i_max) * plot_h;
                format!("{:.2},{:.2}", x, y)
            })
            .collect();

        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
                r#"<rect width="{w}" height="{h}" fill="white"/>"#,
                r#"<text x="{cx}" y="24" text-anchor="middle" font-size="18">{title}</text>"#,
                r#"<line x1="{m}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="black"/>"#,
                r#"<line x1="{m}" y1="{m}" x2="{m}" y2="{bottom}" stroke="black"/>"#,
                r#"<text x="{cx}" y="{h_label}" text-anchor="middle" font-size="13">{x_label}</text>"#,
                r#"<text x="16" y="{cy}" text-anchor="middle" font-size="13" transform="rotate(-90 16 {cy})">{y_label}</text>"#,
                r##"<polyline fill="none" stroke="#0066cc" stroke-width="1.5" points="{points}"/>"##,
                "</svg>"
            ),
            w = WIDTH,
            h = HEIGHT,
            m = MARGIN,
            cx = WIDTH / 2.0,
            cy = HEIGHT / 2.0,
            bottom = HEIGHT - MARGIN,
            right = WIDTH - MARGIN,
            h_label = HEIGHT - 12.0,
            title = escape(&labels.title),
            x_label = escape(&labels.x_label),
            y_label = escape(&labels.y_label),
            points = polyline.join(" "),
        )
    }
}

/// Normalize a value into [0, 1]; a degenerate range maps to the midpoint
fn scale(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        0.5
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
