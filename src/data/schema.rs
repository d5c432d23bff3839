//! The fixed positional layout of a paired FZ / PWS sensor log.

use polars::prelude::DataType;
use std::fmt;

/// One column of the sensor log, in file order.
///
/// Files carry no header; columns are identified purely by position, and
/// anything past the twelfth column is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorColumn {
    /// FZ temperature in °C.
    TemperatureFz,
    /// FZ relative humidity in percent.
    HumidityFz,
    /// FZ pressure in hPa.
    PressureFz,
    Lat,
    Long,
    /// GPS timestamp, used as the shared time axis.
    TimeGps,
    NumSatsGps,
    /// PWS temperature in °C.
    TemperaturePws,
    /// PWS relative humidity in percent.
    HumidityPws,
    TimePws,
    /// Radio protocol the PWS reported over.
    ProtocolPws,
    /// Station identifier of the PWS, numeric.
    IdPws,
}

impl SensorColumn {
    pub const ALL: [SensorColumn; 12] = [
        SensorColumn::TemperatureFz,
        SensorColumn::HumidityFz,
        SensorColumn::PressureFz,
        SensorColumn::Lat,
        SensorColumn::Long,
        SensorColumn::TimeGps,
        SensorColumn::NumSatsGps,
        SensorColumn::TemperaturePws,
        SensorColumn::HumidityPws,
        SensorColumn::TimePws,
        SensorColumn::ProtocolPws,
        SensorColumn::IdPws,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SensorColumn::TemperatureFz => "temperature_fz",
            SensorColumn::HumidityFz => "humidity_fz",
            SensorColumn::PressureFz => "pressure_fz",
            SensorColumn::Lat => "lat",
            SensorColumn::Long => "long",
            SensorColumn::TimeGps => "time_gps",
            SensorColumn::NumSatsGps => "numSats_gps",
            SensorColumn::TemperaturePws => "temperature_pws",
            SensorColumn::HumidityPws => "humidity_pws",
            SensorColumn::TimePws => "time_pws",
            SensorColumn::ProtocolPws => "protocol_pws",
            SensorColumn::IdPws => "id_pws",
        }
    }

    /// The dtype every value of this column must cast to.
    pub fn dtype(&self) -> DataType {
        match self {
            SensorColumn::TimeGps | SensorColumn::TimePws | SensorColumn::ProtocolPws => {
                DataType::String
            }
            _ => DataType::Float64,
        }
    }

    pub(crate) fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(SensorColumn::name).collect()
    }
}

impl fmt::Display for SensorColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single collected row of the sensor log.
///
/// Every field is optional since empty cells are read as nulls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub temperature_fz: Option<f64>,
    pub humidity_fz: Option<f64>,
    pub pressure_fz: Option<f64>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub time_gps: Option<String>,
    pub num_sats_gps: Option<f64>,
    pub temperature_pws: Option<f64>,
    pub humidity_pws: Option<f64>,
    pub time_pws: Option<String>,
    pub protocol_pws: Option<String>,
    pub id_pws: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_order_is_positional() {
        assert_eq!(
            SensorColumn::names(),
            vec![
                "temperature_fz",
                "humidity_fz",
                "pressure_fz",
                "lat",
                "long",
                "time_gps",
                "numSats_gps",
                "temperature_pws",
                "humidity_pws",
                "time_pws",
                "protocol_pws",
                "id_pws",
            ]
        );
    }

    #[test]
    fn text_columns() {
        let text: Vec<_> = SensorColumn::ALL
            .iter()
            .filter(|c| c.dtype() == DataType::String)
            .map(|c| c.to_string())
            .collect();
        assert_eq!(text, vec!["time_gps", "time_pws", "protocol_pws"]);
    }
}
