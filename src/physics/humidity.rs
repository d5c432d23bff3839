//! Relative to absolute humidity conversion.
//!
//! Saturation vapor pressure follows the Wagner–Pruß approximation over the
//! reduced temperature `tau = 1 - T / Tc`, after which the partial vapor
//! pressure is turned into a mass density with the ideal gas law.

use crate::physics::error::DomainError;

/// Offset between degrees Celsius and Kelvin.
pub const KELVIN_OFFSET: f64 = 273.15;
/// Critical temperature of water in Kelvin.
pub const TC: f64 = 647.096;
/// Critical pressure of water in Pascal.
pub const PC: f64 = 22.0640 * 1_000_000.0;
/// Specific gas constant for water vapor in J/(kg·K).
pub const RW: f64 = 461.5;

const A1: f64 = -7.85951783;
const A2: f64 = 1.84408259;
const A3: f64 = -11.7866497;
const A4: f64 = 22.6807411;
const A5: f64 = -15.9618719;
const A6: f64 = 1.80122502;

/// Saturation vapor pressure over water in Pascal for a temperature in °C.
///
/// No input checking is done. Temperatures at or below absolute zero yield
/// NaN or infinite values.
pub fn saturation_vapor_pressure(temp: f64) -> f64 {
    let t = temp + KELVIN_OFFSET;
    let tau = 1.0 - t / TC;
    let exponent = TC / t
        * (A1 * tau
            + A2 * tau.powf(1.5)
            + A3 * tau.powi(3)
            + A4 * tau.powf(3.5)
            + A5 * tau.powi(4)
            + A6 * tau.powf(7.5));
    PC * exponent.exp()
}

/// Absolute humidity in g/m³ for a relative humidity in percent and a
/// temperature in °C.
///
/// This is the unchecked form: out of range inputs propagate as NaN/Inf.
/// Use [`Reading`] to reject them up front.
///
/// # Examples
///
/// ```
/// use raymond_analysis::absolute_humidity;
///
/// let ah = absolute_humidity(50.0, 20.0);
/// assert!((ah - 8.645).abs() < 0.01);
/// assert_eq!(absolute_humidity(0.0, 20.0), 0.0);
/// ```
pub fn absolute_humidity(humid: f64, temp: f64) -> f64 {
    let t = temp + KELVIN_OFFSET;
    let pa = saturation_vapor_pressure(temp) * humid / 100.0;
    pa * 1000.0 / (RW * t)
}

/// A single relative humidity / temperature pair that is known to be inside
/// the physical domain of [`absolute_humidity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    relative_humidity: f64,
    temperature: f64,
}

impl Reading {
    /// Validates a reading.
    ///
    /// # Errors
    ///
    /// * [`DomainError::NonFinite`] if either value is NaN or infinite.
    /// * [`DomainError::RelativeHumidity`] if `relative_humidity` is outside `0..=100`.
    /// * [`DomainError::BelowAbsoluteZero`] if `temperature` is at or below -273.15 °C.
    pub fn new(relative_humidity: f64, temperature: f64) -> Result<Self, DomainError> {
        if !relative_humidity.is_finite() || !temperature.is_finite() {
            return Err(DomainError::NonFinite {
                relative_humidity,
                temperature,
            });
        }
        if !(0.0..=100.0).contains(&relative_humidity) {
            return Err(DomainError::RelativeHumidity(relative_humidity));
        }
        if temperature <= -KELVIN_OFFSET {
            return Err(DomainError::BelowAbsoluteZero(temperature));
        }
        Ok(Self {
            relative_humidity,
            temperature,
        })
    }

    pub fn relative_humidity(&self) -> f64 {
        self.relative_humidity
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Absolute humidity of this reading in g/m³.
    pub fn absolute_humidity(&self) -> f64 {
        absolute_humidity(self.relative_humidity, self.temperature)
    }
}
