use crate::data::schema::SensorColumn;
use polars::error::PolarsError;
use polars::prelude::DataType;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("CSV file '{0}' does not exist")]
    MissingFile(PathBuf),

    #[error("Failed to parse CSV file '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("CSV file '{path}' has {found} columns, expected at least {expected}")]
    ColumnCount {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("Column '{column}' cannot be read as {dtype}")]
    ColumnType {
        column: SensorColumn,
        dtype: DataType,
        #[source]
        source: PolarsError,
    },

    #[error("CSV file '{0}' contains no rows")]
    Empty(PathBuf),

    #[error("I/O error writing CSV file '{0}'")]
    CsvWriteIo(PathBuf, #[source] std::io::Error),
    #[error("Encoding error writing CSV file '{0}'")]
    CsvWritePolars(PathBuf, #[source] PolarsError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
