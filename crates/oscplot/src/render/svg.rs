//! SVG figure with one subplot per panel, stacked vertically.

use plotters::prelude::*;

use crate::Error;
use crate::figure::{Figure, POSITION_LABEL, Rgb, TIME_LABEL};

/// Renders `figure` as an SVG document of `width × height` pixels.
///
/// # Errors
///
/// Returns [`Error::Plot`] if plotters fails to lay out or draw a chart.
pub fn render(figure: &Figure, (width, height): (u32, u32)) -> Result<String, Error> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let rows = figure.panels().len().max(1);
        let areas = root.split_evenly((rows, 1));
        let (start, end) = figure.time_range();

        for (area, panel) in areas.iter().zip(figure.panels()) {
            let (lo, hi) = panel.padded_bounds();
            let Rgb(r, g, b) = panel.color();
            let color = RGBColor(r, g, b);

            let mut chart = ChartBuilder::on(area)
                .margin(12)
                .caption(panel.title(), ("sans-serif", 22))
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(start..end, lo..hi)
                .map_err(plot_error)?;

            chart
                .configure_mesh()
                .x_desc(TIME_LABEL)
                .y_desc(POSITION_LABEL)
                .x_labels(10)
                .y_labels(5)
                .x_label_formatter(&|v| format!("{v:.1}"))
                .y_label_formatter(&|v| format!("{v:.2}"))
                .bold_line_style(RGBColor(200, 200, 200).stroke_width(1))
                .light_line_style(RGBColor(235, 235, 235).stroke_width(1))
                .draw()
                .map_err(plot_error)?;

            chart
                .draw_series(LineSeries::new(
                    figure
                        .times()
                        .iter()
                        .copied()
                        .zip(panel.positions().iter().copied()),
                    color.stroke_width(2),
                ))
                .map_err(plot_error)?;
        }

        root.present().map_err(plot_error)?;
    }
    Ok(svg)
}

fn plot_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> Error {
    Error::Plot(err.to_string())
}
