// src/plot.rs

use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::{fs, ops::Range, path::Path};
use tracing::info;

/// Labels and canvas of the runs-over-time chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series_label: String,
    pub size: (u32, u32),
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            title: "San Francisco Giants Runs Over Time".into(),
            x_label: "Year".into(),
            y_label: "Runs".into(),
            series_label: "Runs".into(),
            size: (1000, 600),
        }
    }
}

impl ChartSpec {
    /// Default labels, titled for `team` when it isn't the Giants.
    pub fn for_team(team: &str) -> Self {
        let spec = Self::default();
        if team == crate::config::DEFAULT_TEAM {
            return spec;
        }
        Self {
            title: format!("{} Runs Over Time", team),
            ..spec
        }
    }
}

/// Draw `series` as a marked line chart and return the SVG document.
/// An empty series gives an empty chart over a unit range.
pub fn render_svg(series: &[(f64, f64)], spec: &ChartSpec) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, spec.size).into_drawing_area();
        root.fill(&WHITE).context("filling background")?;

        let x_range = axis_range(series.iter().map(|p| p.0));
        let y_range = axis_range(series.iter().map(|p| p.1));

        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(70)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .context("building chart axes")?;

        chart
            .configure_mesh()
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.0}", y))
            .x_label_style(
                ("sans-serif", 12)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .draw()
            .context("drawing grid")?;

        chart
            .draw_series(LineSeries::new(
                series.iter().copied(),
                BLUE.stroke_width(2),
            ))
            .context("drawing runs line")?
            .label(spec.series_label.as_str())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

        chart
            .draw_series(
                series
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())),
            )
            .context("drawing markers")?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .context("drawing legend")?;

        root.present().context("finishing chart")?;
    }
    Ok(svg)
}

/// Render and write the chart to `path`.
pub fn render_to_file(series: &[(f64, f64)], spec: &ChartSpec, path: &Path) -> Result<()> {
    let svg = render_svg(series, spec)?;
    fs::write(path, svg).with_context(|| format!("writing chart {}", path.display()))?;
    info!(path = %path.display(), points = series.len(), "rendered chart");
    Ok(())
}

/// Data bounds padded by 5%; a single value gets ±1, no values 0..1.
fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    if lo == hi {
        return (lo - 1.0)..(hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}
