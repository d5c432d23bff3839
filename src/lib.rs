mod chart;
mod cli;
mod config;
mod conversion;
mod data;
mod error;
mod filtering;
mod physics;
mod pipeline;

pub use error::AnalysisError;
pub use pipeline::*;

pub use cli::Cli;
pub use config::{Config, ConfigError, StationFilter};
pub use conversion::{convert_units, ConversionError, HumidityUnit, TemperatureUnit};

pub use chart::{build_chart, render_chart, ChartError, CHART_TITLE};
pub use filtering::SensorFrameFilterExt;

pub use data::error::SchemaError;
pub use data::reader::{read_sensor_csv, SensorFrame};
pub use data::schema::{Record, SensorColumn};
pub use data::writer::write_sensor_csv;

pub use physics::error::DomainError;
pub use physics::humidity::{absolute_humidity, saturation_vapor_pressure, Reading};
pub use physics::temperature::{celsius_to_fahrenheit, fahrenheit_to_celsius};
