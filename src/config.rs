//! Run configuration, kept free of any process argument handling so the
//! pipeline can be driven directly from code and tests.

use crate::conversion::{HumidityUnit, TemperatureUnit};
use bon::Builder;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Station id '{0}' is not a finite number")]
    InvalidStationId(String, #[source] Option<ParseFloatError>),

    #[error("Input path '{0}' has no file name")]
    MissingFileName(PathBuf),
}

/// Everything a single analysis run needs.
///
/// # Examples
///
/// ```
/// use raymond_analysis::{Config, HumidityUnit, TemperatureUnit};
///
/// let config = Config::builder()
///     .csv_file("logs/sample_data.csv")
///     .station_id("1")
///     .humidity_unit(HumidityUnit::Absolute)
///     .show_chart(false)
///     .build();
///
/// assert_eq!(config.temperature_unit, TemperatureUnit::Celsius);
/// assert!(!config.has_header);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct Config {
    /// Sensor log to analyse.
    #[builder(into)]
    pub csv_file: PathBuf,
    /// PWS station to restrict the analysis to, as typed by the user.
    #[builder(into)]
    pub station_id: Option<String>,
    #[builder(default)]
    pub temperature_unit: TemperatureUnit,
    #[builder(default)]
    pub humidity_unit: HumidityUnit,
    /// Whether the first line of `csv_file` is a header row.
    #[builder(default)]
    pub has_header: bool,
    /// Where derived CSV files go. Defaults to the directory of `csv_file`.
    #[builder(into)]
    pub output_dir: Option<PathBuf>,
    /// Writes the chart to this HTML file when set.
    #[builder(into)]
    pub chart_html: Option<PathBuf>,
    /// Opens the chart in the browser.
    #[builder(default = true)]
    pub show_chart: bool,
}

/// A parsed `--id_pws` value.
#[derive(Debug, Clone, PartialEq)]
pub struct StationFilter {
    /// The id exactly as given, used for file naming.
    pub label: String,
    pub id: f64,
}

impl StationFilter {
    pub fn output_file_name(&self) -> String {
        format!("filtered_{}.csv", self.label)
    }
}

impl Config {
    /// Parses `station_id`. Surrounding whitespace is dropped from both the
    /// id and the label; NaN and infinite ids are rejected since they match
    /// no row.
    pub fn station_filter(&self) -> Result<Option<StationFilter>, ConfigError> {
        self.station_id
            .as_ref()
            .map(|raw| {
                let label = raw.trim();
                label
                    .parse::<f64>()
                    .map_err(|e| ConfigError::InvalidStationId(label.to_string(), Some(e)))
                    .and_then(|id| {
                        if id.is_finite() {
                            Ok(StationFilter {
                                label: label.to_string(),
                                id,
                            })
                        } else {
                            Err(ConfigError::InvalidStationId(label.to_string(), None))
                        }
                    })
            })
            .transpose()
    }

    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => self
                .csv_file
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    /// Path of the converted copy of the input, `new_<original file name>`.
    pub fn converted_csv_path(&self) -> Result<PathBuf, ConfigError> {
        let name = self
            .csv_file
            .file_name()
            .ok_or_else(|| ConfigError::MissingFileName(self.csv_file.clone()))?;
        Ok(self
            .output_dir()
            .join(format!("new_{}", name.to_string_lossy())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::builder().csv_file("sample_data.csv").build();
        assert_eq!(config.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(config.humidity_unit, HumidityUnit::Relative);
        assert!(config.show_chart);
        assert!(config.station_id.is_none());
        assert_eq!(config.station_filter().unwrap(), None);
    }

    #[test]
    fn station_filter_keeps_label() {
        let config = Config::builder()
            .csv_file("sample_data.csv")
            .station_id("1")
            .build();
        let filter = config.station_filter().unwrap().unwrap();
        assert_eq!(filter.id, 1.0);
        assert_eq!(filter.output_file_name(), "filtered_1.csv");
    }

    #[test]
    fn non_numeric_station_id() {
        let config = Config::builder()
            .csv_file("sample_data.csv")
            .station_id("north")
            .build();
        assert!(matches!(
            config.station_filter(),
            Err(ConfigError::InvalidStationId(id, _)) if id == "north"
        ));
    }

    #[test]
    fn non_finite_station_ids() {
        for raw in ["nan", "inf", "-inf", "NaN"] {
            let config = Config::builder()
                .csv_file("sample_data.csv")
                .station_id(raw)
                .build();
            assert!(
                matches!(
                    config.station_filter(),
                    Err(ConfigError::InvalidStationId(_, None))
                ),
                "{raw} accepted"
            );
        }
    }

    #[test]
    fn station_label_is_trimmed() {
        let config = Config::builder()
            .csv_file("sample_data.csv")
            .station_id(" 1 ")
            .build();
        let filter = config.station_filter().unwrap().unwrap();
        assert_eq!(filter.label, "1");
        assert_eq!(filter.output_file_name(), "filtered_1.csv");
    }

    #[test]
    fn derived_paths_follow_input_directory() {
        let config = Config::builder().csv_file("logs/run3.csv").build();
        assert_eq!(config.output_dir(), PathBuf::from("logs"));
        assert_eq!(
            config.converted_csv_path().unwrap(),
            PathBuf::from("logs/new_run3.csv")
        );

        let bare = Config::builder().csv_file("run3.csv").build();
        assert_eq!(bare.output_dir(), PathBuf::from("."));
    }

    #[test]
    fn explicit_output_dir_wins() {
        let config = Config::builder()
            .csv_file("logs/run3.csv")
            .output_dir("out")
            .build();
        assert_eq!(
            config.converted_csv_path().unwrap(),
            PathBuf::from("out/new_run3.csv")
        );
    }
}
