use crate::chart::ChartError;
use crate::config::ConfigError;
use crate::conversion::ConversionError;
use crate::data::error::SchemaError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("Failed processing DataFrame: {0}")]
    PolarsError(#[from] PolarsError),
}
