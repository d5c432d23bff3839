//! The single pass over a sensor log: read, filter, convert, write, chart.

use crate::chart::{build_chart, render_chart};
use crate::config::Config;
use crate::conversion::convert_units;
use crate::data::reader::{read_sensor_csv, SensorFrame};
use crate::data::writer::write_sensor_csv;
use crate::error::AnalysisError;
use crate::filtering::SensorFrameFilterExt;
use log::{info, warn};
use std::path::PathBuf;

/// What a [`run`] did.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub rows_read: usize,
    /// Rows left after the station filter, equal to `rows_read` without one.
    pub rows_kept: usize,
    /// `filtered_<id>.csv`, when a station filter was given.
    pub filtered_csv: Option<PathBuf>,
    /// `new_<original file name>`, always written.
    pub converted_csv: PathBuf,
}

/// Runs the analysis described by `config` once.
///
/// The converted copy of the input is written even when no unit conversion
/// was requested.
///
/// # Errors
///
/// Any failure is fatal to the run: bad configuration, a malformed log, an
/// impossible reading during humidity conversion or a failed CSV or chart
/// write.
pub fn run(config: &Config) -> Result<RunReport, AnalysisError> {
    let station = config.station_filter()?;
    let converted_csv = config.converted_csv_path()?;

    let mut sensor_frame = read_sensor_csv(&config.csv_file, config.has_header)?;
    let rows_read = sensor_frame.height();

    let mut filtered_csv = None;
    if let Some(station) = station {
        let frame = sensor_frame.lazy().filter_station(station.id).collect()?;
        if frame.height() == 0 {
            warn!("No rows found for station {}", station.label);
        }
        sensor_frame = SensorFrame { frame };

        let path = config.output_dir().join(station.output_file_name());
        write_sensor_csv(&mut sensor_frame.frame, &path)?;
        filtered_csv = Some(path);
    }
    let rows_kept = sensor_frame.height();

    let mut sensor_frame = convert_units(
        sensor_frame,
        config.temperature_unit,
        config.humidity_unit,
    )?;
    write_sensor_csv(&mut sensor_frame.frame, &converted_csv)?;

    let records = sensor_frame.records()?;
    let plot = build_chart(&records, config.temperature_unit, config.humidity_unit);
    render_chart(&plot, config.chart_html.as_deref(), config.show_chart)?;

    info!("Analysed {} of {} rows", rows_kept, rows_read);
    Ok(RunReport {
        rows_read,
        rows_kept,
        filtered_csv,
        converted_csv,
    })
}
