use crate::data::error::SchemaError;
use log::info;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use std::fs::File;
use std::path::Path;

/// Writes `frame` to `path` as CSV with a header row, replacing any existing file.
pub fn write_sensor_csv(frame: &mut DataFrame, path: &Path) -> Result<(), SchemaError> {
    let mut file =
        File::create(path).map_err(|e| SchemaError::CsvWriteIo(path.to_path_buf(), e))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(frame)
        .map_err(|e| SchemaError::CsvWritePolars(path.to_path_buf(), e))?;
    info!("Wrote {} rows to {:?}", frame.height(), path);
    Ok(())
}
