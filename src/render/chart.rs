//! SVG line chart drawing with plotters.

use std::path::Path;

use plotters::prelude::*;

use super::axis::{format_tick, time_range, value_range, MAX_X_TICKS};
use super::{ChartSettings, InstanceSeries};
use crate::error::{Error, Result};

fn draw_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Draw every series on one shared time axis and save the chart as SVG.
pub fn draw_chart(
    output: &Path,
    series: &[InstanceSeries],
    title: &str,
    y_label: &str,
    settings: &ChartSettings,
) -> Result<()> {
    let root = SVGBackend::new(output, (settings.width, settings.height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let x_range = time_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.0)));
    let y_range = value_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(20)
        .x_label_area_size(150)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_labels(MAX_X_TICKS)
        .x_label_formatter(&|ms| format_tick(*ms))
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .x_desc("Time")
        .y_desc(y_label)
        .draw()
        .map_err(draw_err)?;

    for (idx, s) in series.iter().enumerate() {
        let style = Palette99::pick(idx).stroke_width(2);
        chart
            .draw_series(LineSeries::new(s.points.iter().copied(), style))
            .map_err(draw_err)?
            .label(s.legend_label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    if !series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)?;
    Ok(())
}
