use crate::config::Config;
use crate::conversion::{HumidityUnit, TemperatureUnit};
use clap::Parser;
use std::path::PathBuf;

/// Chart FZ sensor readings against a personal weather station.
#[derive(Debug, Parser)]
#[command(name = "raymond-analysis", version, about)]
pub struct Cli {
    /// Sensor log, twelve columns, no header
    pub csv_file: PathBuf,

    /// Only analyse rows from this PWS station id
    #[arg(long = "id_pws", value_name = "ID")]
    pub id_pws: Option<String>,

    /// Temperature unit
    #[arg(long = "tu", value_enum, default_value_t = TemperatureUnit::Celsius)]
    pub temperature_unit: TemperatureUnit,

    /// Humidity unit, relative or absolute
    #[arg(long = "hu", value_enum, default_value_t = HumidityUnit::Relative)]
    pub humidity_unit: HumidityUnit,

    /// The first line of the log is a header row
    #[arg(long)]
    pub has_header: bool,

    /// Directory for derived CSV files (defaults to the log's directory)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Also write the chart to this HTML file
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Do not open the chart in a browser
    #[arg(long)]
    pub no_show: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::builder()
            .csv_file(cli.csv_file)
            .maybe_station_id(cli.id_pws)
            .temperature_unit(cli.temperature_unit)
            .humidity_unit(cli.humidity_unit)
            .has_header(cli.has_header)
            .maybe_output_dir(cli.out_dir)
            .maybe_chart_html(cli.html)
            .show_chart(!cli.no_show)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Cli::try_parse_from(std::iter::once("raymond-analysis").chain(args.iter().copied()))
            .unwrap()
            .into()
    }

    #[test]
    fn positional_file_only() {
        let config = parse(&["sample_data.csv"]);
        assert_eq!(config, Config::builder().csv_file("sample_data.csv").build());
    }

    #[test]
    fn all_flags() {
        let config = parse(&[
            "sample_data.csv",
            "--id_pws",
            "1",
            "--tu",
            "f",
            "--hu",
            "a",
            "--out-dir",
            "out",
            "--html",
            "chart.html",
            "--no-show",
        ]);
        assert_eq!(config.station_id.as_deref(), Some("1"));
        assert_eq!(config.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(config.humidity_unit, HumidityUnit::Absolute);
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert_eq!(config.chart_html, Some(PathBuf::from("chart.html")));
        assert!(!config.show_chart);
    }

    #[test]
    fn rejects_unknown_units() {
        let result = Cli::try_parse_from(["raymond-analysis", "log.csv", "--tu", "k"]);
        assert!(result.is_err());
    }

    #[test]
    fn requires_csv_file() {
        assert!(Cli::try_parse_from(["raymond-analysis"]).is_err());
    }
}
