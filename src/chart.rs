//! Three panel time series chart comparing FZ and PWS readings.

use crate::conversion::{HumidityUnit, TemperatureUnit};
use crate::data::schema::Record;
use log::info;
use plotly::common::{Anchor, Mode, Title};
use plotly::layout::{Annotation, Axis, GridPattern, LayoutGrid};
use plotly::{Layout, Plot, Scatter};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CHART_TITLE: &str = "Meteorological Data vs. Time";

/// Panel titles, top to bottom, with the y axis each panel is drawn on.
const PANELS: [(&str, &str); 3] = [
    ("Temperature", "y domain"),
    ("Humidity", "y2 domain"),
    ("Pressure", "y3 domain"),
];

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to write chart to '{0}'")]
    ChartWriteIo(PathBuf, #[source] std::io::Error),
}

/// Builds the chart: temperature on top, humidity in the middle and pressure
/// at the bottom, all sharing the GPS time axis.
///
/// PWS traces carry the station protocol and id as hover text.
pub fn build_chart(
    records: &[Record],
    temperature_unit: TemperatureUnit,
    humidity_unit: HumidityUnit,
) -> Plot {
    let time: Vec<String> = records
        .iter()
        .map(|r| r.time_gps.clone().unwrap_or_default())
        .collect();
    let hover: Vec<String> = records.iter().map(station_hover_text).collect();

    let series = |value: fn(&Record) -> Option<f64>| -> Vec<Option<f64>> {
        records.iter().map(value).collect()
    };

    let mut plot = Plot::new();

    plot.add_trace(
        Scatter::new(time.clone(), series(|r| r.temperature_fz))
            .mode(Mode::Lines)
            .name("Temperature FZ")
            .x_axis("x")
            .y_axis("y"),
    );
    plot.add_trace(
        Scatter::new(time.clone(), series(|r| r.temperature_pws))
            .mode(Mode::Lines)
            .name("Temperature PWS")
            .hover_text_array(hover.clone())
            .x_axis("x")
            .y_axis("y"),
    );

    plot.add_trace(
        Scatter::new(time.clone(), series(|r| r.humidity_fz))
            .mode(Mode::Lines)
            .name("Humidity FZ")
            .x_axis("x")
            .y_axis("y2"),
    );
    plot.add_trace(
        Scatter::new(time.clone(), series(|r| r.humidity_pws))
            .mode(Mode::Lines)
            .name("Humidity PWS")
            .hover_text_array(hover)
            .x_axis("x")
            .y_axis("y2"),
    );

    // The PWS does not report pressure.
    plot.add_trace(
        Scatter::new(time, series(|r| r.pressure_fz))
            .mode(Mode::Lines)
            .name("Pressure FZ")
            .x_axis("x")
            .y_axis("y3"),
    );

    let layout = Layout::new()
        .title(Title::with_text(CHART_TITLE))
        .grid(
            LayoutGrid::new()
                .rows(3)
                .columns(1)
                .pattern(GridPattern::Coupled),
        )
        .x_axis(Axis::new().title(Title::with_text("Time")))
        .y_axis(Axis::new().title(Title::with_text(temperature_unit.axis_title())))
        .y_axis2(Axis::new().title(Title::with_text(humidity_unit.axis_title())))
        .y_axis3(Axis::new().title(Title::with_text("Pressure hPa")))
        .annotations(
            PANELS
                .iter()
                .map(|(text, y_ref)| {
                    Annotation::new()
                        .text(*text)
                        .x_ref("paper")
                        .y_ref(*y_ref)
                        .x(0.5)
                        .y(1.0)
                        .y_anchor(Anchor::Bottom)
                        .show_arrow(false)
                })
                .collect(),
        );
    plot.set_layout(layout);

    plot
}

fn station_hover_text(record: &Record) -> String {
    let protocol = record.protocol_pws.as_deref().unwrap_or("unknown");
    match record.id_pws {
        Some(id) => format!("protocol: {protocol}, id: {id}"),
        None => format!("protocol: {protocol}, id: unknown"),
    }
}

/// Writes the chart to `html` when given, then opens it in the browser when
/// `show` is set.
///
/// # Errors
///
/// [`ChartError::ChartWriteIo`] if the HTML file cannot be written.
pub fn render_chart(plot: &Plot, html: Option<&Path>, show: bool) -> Result<(), ChartError> {
    if let Some(path) = html {
        fs::write(path, plot.to_html())
            .map_err(|e| ChartError::ChartWriteIo(path.to_path_buf(), e))?;
        info!("Chart written to {:?}", path);
    }
    if show {
        info!("Opening chart in browser");
        plot.show();
    }
    Ok(())
}
