//! Loading of sensor logs into a typed polars frame.

use crate::data::error::SchemaError;
use crate::data::schema::{Record, SensorColumn};
use log::{debug, info, warn};
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// A polars `DataFrame` holding exactly the twelve [`SensorColumn`]s, each
/// already cast to its expected dtype.
///
/// Instances come from [`read_sensor_csv`]; later pipeline stages replace the
/// frame with filtered or converted versions of itself.
#[derive(Debug, Clone)]
pub struct SensorFrame {
    /// The underlying frame, columns named after [`SensorColumn::name`].
    pub frame: DataFrame,
}

impl SensorFrame {
    /// Validates an arbitrary frame against the sensor schema.
    ///
    /// The first twelve columns are taken positionally, renamed and strictly
    /// cast. Any further columns are dropped.
    ///
    /// # Errors
    ///
    /// [`SchemaError::ColumnType`] when a column holds values that do not cast
    /// to the expected dtype, e.g. text in a measurement column.
    pub fn from_positional(frame: DataFrame) -> Result<Self, SchemaError> {
        let columns = SensorColumn::ALL
            .iter()
            .zip(frame.get_columns())
            .map(|(column, raw)| {
                let dtype = column.dtype();
                raw.strict_cast(&dtype)
                    .map(|cast| cast.with_name(column.name().into()))
                    .map_err(|source| SchemaError::ColumnType {
                        column: *column,
                        dtype,
                        source,
                    })
            })
            .collect::<Result<Vec<Column>, _>>()?;

        Ok(Self {
            frame: DataFrame::new(columns)?,
        })
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    /// Collects the frame into typed rows.
    pub fn records(&self) -> Result<Vec<Record>, SchemaError> {
        let temperature_fz = self.floats(SensorColumn::TemperatureFz)?;
        let humidity_fz = self.floats(SensorColumn::HumidityFz)?;
        let pressure_fz = self.floats(SensorColumn::PressureFz)?;
        let lat = self.floats(SensorColumn::Lat)?;
        let long = self.floats(SensorColumn::Long)?;
        let time_gps = self.strings(SensorColumn::TimeGps)?;
        let num_sats_gps = self.floats(SensorColumn::NumSatsGps)?;
        let temperature_pws = self.floats(SensorColumn::TemperaturePws)?;
        let humidity_pws = self.floats(SensorColumn::HumidityPws)?;
        let time_pws = self.strings(SensorColumn::TimePws)?;
        let protocol_pws = self.strings(SensorColumn::ProtocolPws)?;
        let id_pws = self.floats(SensorColumn::IdPws)?;

        Ok((0..self.height())
            .map(|i| Record {
                temperature_fz: temperature_fz[i],
                humidity_fz: humidity_fz[i],
                pressure_fz: pressure_fz[i],
                lat: lat[i],
                long: long[i],
                time_gps: time_gps[i].clone(),
                num_sats_gps: num_sats_gps[i],
                temperature_pws: temperature_pws[i],
                humidity_pws: humidity_pws[i],
                time_pws: time_pws[i].clone(),
                protocol_pws: protocol_pws[i].clone(),
                id_pws: id_pws[i],
            })
            .collect())
    }

    fn floats(&self, column: SensorColumn) -> Result<Vec<Option<f64>>, SchemaError> {
        Ok(self.frame.column(column.name())?.f64()?.into_iter().collect())
    }

    fn strings(&self, column: SensorColumn) -> Result<Vec<Option<String>>, SchemaError> {
        Ok(self
            .frame
            .column(column.name())?
            .str()?
            .into_iter()
            .map(|value| value.map(str::to_owned))
            .collect())
    }
}

/// Reads a sensor log from disk.
///
/// Files are expected without a header row unless `has_header` is set. Only
/// the first twelve columns are kept. Column types are inferred from every
/// row, so a decimal deep into a log of whole numbers still reads as a float.
///
/// # Errors
///
/// * [`SchemaError::MissingFile`] if `path` is not a file.
/// * [`SchemaError::CsvRead`] if polars cannot parse the file at all.
/// * [`SchemaError::ColumnCount`] if fewer than twelve columns are present.
/// * [`SchemaError::Empty`] if the file holds no data rows.
/// * [`SchemaError::ColumnType`] if a column does not match its dtype.
pub fn read_sensor_csv(path: &Path, has_header: bool) -> Result<SensorFrame, SchemaError> {
    let metadata =
        fs::metadata(path).map_err(|_| SchemaError::MissingFile(path.to_path_buf()))?;
    if !metadata.is_file() {
        return Err(SchemaError::MissingFile(path.to_path_buf()));
    }
    if metadata.len() == 0 {
        return Err(SchemaError::Empty(path.to_path_buf()));
    }

    debug!("Reading sensor log {:?} (header: {})", path, has_header);
    let raw = CsvReadOptions::default()
        .with_has_header(has_header)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|source| SchemaError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?
        .finish()
        .map_err(|source| SchemaError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;

    let expected = SensorColumn::ALL.len();
    if raw.width() < expected {
        warn!(
            "CSV column count ({}) is below schema length ({}) for {:?}",
            raw.width(),
            expected,
            path
        );
        return Err(SchemaError::ColumnCount {
            path: path.to_path_buf(),
            expected,
            found: raw.width(),
        });
    }
    if raw.width() > expected {
        debug!(
            "Ignoring {} trailing columns in {:?}",
            raw.width() - expected,
            path
        );
    }
    if raw.height() == 0 {
        return Err(SchemaError::Empty(path.to_path_buf()));
    }

    let frame = SensorFrame::from_positional(raw)?;
    info!("Loaded {} rows from {:?}", frame.height(), path);
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const ROWS: &str = "\
21.5,40.0,1013.2,52.1,5.1,12:00:00,7,21.0,42.0,12:00:05,ws2300,1
22.0,41.5,1013.0,52.1,5.1,12:00:10,8,21.8,43.0,12:00:15,ws2300,2
";

    fn write(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_positional_columns() {
        let (_dir, path) = write(ROWS);
        let frame = read_sensor_csv(&path, false).unwrap();

        assert_eq!(frame.height(), 2);
        let names: Vec<String> = frame
            .frame
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, SensorColumn::names());
        assert_eq!(frame.frame.column("id_pws").unwrap().dtype(), &DataType::Float64);
        assert_eq!(frame.frame.column("time_gps").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn collects_typed_records() {
        let (_dir, path) = write(ROWS);
        let records = read_sensor_csv(&path, false).unwrap().records().unwrap();

        assert_eq!(records.len(), 2);
        let first = &records[0];
        assert_eq!(first.temperature_fz, Some(21.5));
        assert_eq!(first.pressure_fz, Some(1013.2));
        assert_eq!(first.num_sats_gps, Some(7.0));
        assert_eq!(first.time_gps.as_deref(), Some("12:00:00"));
        assert_eq!(first.protocol_pws.as_deref(), Some("ws2300"));
        assert_eq!(records[1].id_pws, Some(2.0));
    }

    #[test]
    fn ignores_extra_columns() {
        let (_dir, path) = write(
            "21.5,40.0,1013.2,52.1,5.1,12:00:00,7,21.0,42.0,12:00:05,ws2300,1,extra,99\n",
        );
        let frame = read_sensor_csv(&path, false).unwrap();
        assert_eq!(frame.frame.width(), 12);
    }

    #[test]
    fn skips_header_when_asked() {
        let header = SensorColumn::names().join(",");
        let (_dir, path) = write(&format!("{header}\n{ROWS}"));
        let frame = read_sensor_csv(&path, true).unwrap();
        assert_eq!(frame.height(), 2);
    }

    #[test]
    fn late_decimal_after_many_whole_numbers() {
        let mut contents = String::new();
        for second in 0..150 {
            contents.push_str(&format!(
                "21,40,1013,52,5,12:{:02}:{:02},7,21,42,12:00:05,ws2300,1\n",
                second / 60,
                second % 60
            ));
        }
        contents
            .push_str("21.5,40.5,1013.25,52.1,5.1,12:02:30,7,21.5,42.5,12:02:35,ws2300,1.0\n");
        let (_dir, path) = write(&contents);

        let records = read_sensor_csv(&path, false).unwrap().records().unwrap();
        assert_eq!(records.len(), 151);
        assert_eq!(records[0].temperature_fz, Some(21.0));
        let last = &records[150];
        assert_eq!(last.temperature_fz, Some(21.5));
        assert_eq!(last.humidity_pws, Some(42.5));
        assert_eq!(last.pressure_fz, Some(1013.25));
    }

    #[test]
    fn too_few_columns_is_a_schema_error() {
        let (_dir, path) = write("21.5,40.0,1013.2\n");
        let err = read_sensor_csv(&path, false).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::ColumnCount {
                expected: 12,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn text_in_measurement_column_is_a_schema_error() {
        let (_dir, path) = write(
            "warm,40.0,1013.2,52.1,5.1,12:00:00,7,21.0,42.0,12:00:05,ws2300,1\n",
        );
        let err = read_sensor_csv(&path, false).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::ColumnType {
                column: SensorColumn::TemperatureFz,
                ..
            }
        ));
    }

    #[test]
    fn empty_files() {
        let (_dir, path) = write("");
        assert!(matches!(
            read_sensor_csv(&path, false),
            Err(SchemaError::Empty(_))
        ));

        let header = SensorColumn::names().join(",");
        let (_dir, path) = write(&format!("{header}\n"));
        assert!(matches!(
            read_sensor_csv(&path, true),
            Err(SchemaError::Empty(_))
        ));
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = read_sensor_csv(&path, false).unwrap_err();
        assert!(matches!(err, SchemaError::MissingFile(p) if p == path));
    }
}
