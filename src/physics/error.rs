use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("Relative humidity {0}% is outside 0..=100")]
    RelativeHumidity(f64),

    #[error("Temperature {0}°C is at or below absolute zero")]
    BelowAbsoluteZero(f64),

    #[error("Reading is not finite (humidity {relative_humidity}, temperature {temperature})")]
    NonFinite {
        relative_humidity: f64,
        temperature: f64,
    },
}
