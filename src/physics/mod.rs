pub mod error;
pub mod humidity;
pub mod temperature;
