//! Unit conversion of the temperature and humidity columns of a sensor frame.

use crate::data::reader::SensorFrame;
use crate::data::schema::SensorColumn;
use crate::physics::error::DomainError;
use crate::physics::humidity::Reading;
use crate::physics::temperature::celsius_to_fahrenheit;
use clap::ValueEnum;
use log::{debug, info};
use polars::error::PolarsError;
use polars::prelude::{DataFrame, NamedFrom, Series};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum TemperatureUnit {
    #[default]
    #[value(name = "c")]
    Celsius,
    #[value(name = "f")]
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn axis_title(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Temperature °C",
            TemperatureUnit::Fahrenheit => "Temperature °F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureUnit::Celsius => write!(f, "°C"),
            TemperatureUnit::Fahrenheit => write!(f, "°F"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum HumidityUnit {
    /// Relative humidity in percent, as logged.
    #[default]
    #[value(name = "r")]
    Relative,
    /// Absolute humidity in g/m³.
    #[value(name = "a")]
    Absolute,
}

impl HumidityUnit {
    pub fn axis_title(&self) -> &'static str {
        match self {
            HumidityUnit::Relative => "Humidity %",
            HumidityUnit::Absolute => "Humidity g/m³",
        }
    }
}

impl fmt::Display for HumidityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HumidityUnit::Relative => write!(f, "%"),
            HumidityUnit::Absolute => write!(f, "g/m³"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Row {row} of '{column}' cannot be converted to absolute humidity")]
    Domain {
        column: SensorColumn,
        row: usize,
        #[source]
        source: DomainError,
    },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}

/// Humidity columns paired with the temperature column of the same sensor.
const HUMIDITY_PAIRS: [(SensorColumn, SensorColumn); 2] = [
    (SensorColumn::HumidityFz, SensorColumn::TemperatureFz),
    (SensorColumn::HumidityPws, SensorColumn::TemperaturePws),
];

const TEMPERATURE_COLUMNS: [SensorColumn; 2] =
    [SensorColumn::TemperatureFz, SensorColumn::TemperaturePws];

/// Converts the humidity and temperature columns of both sensors to the
/// requested units. Logged data is assumed to be °C and percent.
///
/// Absolute humidity is derived before any Fahrenheit conversion since it
/// needs the temperature in °C. Null cells stay null.
///
/// # Errors
///
/// [`ConversionError::Domain`] for the first reading that is physically
/// impossible, naming the column and row.
pub fn convert_units(
    sensor_frame: SensorFrame,
    temperature: TemperatureUnit,
    humidity: HumidityUnit,
) -> Result<SensorFrame, ConversionError> {
    let mut frame = sensor_frame.frame;

    if humidity == HumidityUnit::Absolute {
        for (humidity_column, temperature_column) in HUMIDITY_PAIRS {
            let converted =
                absolute_humidity_series(&frame, humidity_column, temperature_column)?;
            frame.with_column(converted)?;
            debug!("Converted {} to absolute humidity", humidity_column);
        }
    }

    if temperature == TemperatureUnit::Fahrenheit {
        for column in TEMPERATURE_COLUMNS {
            let converted = fahrenheit_series(&frame, column)?;
            frame.with_column(converted)?;
        }
    }

    info!(
        "Converted {} rows to temperature {} and humidity {}",
        frame.height(),
        temperature,
        humidity
    );
    Ok(SensorFrame { frame })
}

fn fahrenheit_series(
    frame: &DataFrame,
    column: SensorColumn,
) -> Result<Series, ConversionError> {
    let values: Vec<Option<f64>> = frame
        .column(column.name())?
        .f64()?
        .into_iter()
        .map(|celsius| celsius.map(celsius_to_fahrenheit))
        .collect();
    Ok(Series::new(column.name().into(), values))
}

fn absolute_humidity_series(
    frame: &DataFrame,
    humidity_column: SensorColumn,
    temperature_column: SensorColumn,
) -> Result<Series, ConversionError> {
    let humidity = frame.column(humidity_column.name())?.f64()?;
    let temperature = frame.column(temperature_column.name())?.f64()?;

    let values = humidity
        .into_iter()
        .zip(temperature.into_iter())
        .enumerate()
        .map(|(row, pair)| match pair {
            (Some(humid), Some(temp)) => Reading::new(humid, temp)
                .map(|reading| Some(reading.absolute_humidity()))
                .map_err(|source| ConversionError::Domain {
                    column: humidity_column,
                    row,
                    source,
                }),
            _ => Ok(None),
        })
        .collect::<Result<Vec<Option<f64>>, _>>()?;

    Ok(Series::new(humidity_column.name().into(), values))
}
