use serde::{Deserialize, Serialize};

/// Geographic fix handed to the weather fetch. Owned transiently by one
/// pipeline pass, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// One temperature observation, in Kelvin as the provider reports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    kelvin: f64,
}

impl WeatherReading {
    pub fn from_kelvin(kelvin: f64) -> Self {
        Self { kelvin }
    }

    pub fn kelvin(&self) -> f64 {
        self.kelvin
    }

    /// Whole-degree Celsius, rounded to nearest.
    pub fn celsius(&self) -> i32 {
        (self.kelvin - 273.15).round() as i32
    }

    /// Whole-degree Fahrenheit, derived from the rounded Celsius value.
    ///
    /// The watchface has always displayed Fahrenheit computed from the
    /// rounded Celsius figure, so the rounding carries over: 300.0 K is
    /// 27 degC and 80 degF, not 80.6. Keep this in sync with the device
    /// display before changing it.
    pub fn fahrenheit(&self) -> i32 {
        self.celsius() * 9 / 5 + 32
    }
}

/// Location service failures. The variants exist for the log record only;
/// control flow treats them all as one geolocation failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GeoError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location request timed out")]
    Timeout,
    #[error("location service unavailable")]
    Unavailable,
    #[error("location error: {0}")]
    Other(String),
}

/// Weather fetch failures: transport, status, body shape. All collapse to
/// one failed-fetch outcome at the pipeline; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("weather service returned status {0}")]
    Status(u16),
    #[error("malformed weather body: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_rounds_to_nearest_whole_degree() {
        assert_eq!(WeatherReading::from_kelvin(300.0).celsius(), 27);
        assert_eq!(WeatherReading::from_kelvin(282.0).celsius(), 9);
        assert_eq!(WeatherReading::from_kelvin(273.15).celsius(), 0);
        assert_eq!(WeatherReading::from_kelvin(263.15).celsius(), -10);
    }

    #[test]
    fn fahrenheit_derives_from_rounded_celsius() {
        // 27 degC exact would be 80.6 degF; the rounded-Celsius derivation
        // yields 80, matching what the watchface has always shown.
        assert_eq!(WeatherReading::from_kelvin(300.0).fahrenheit(), 80);
        assert_eq!(WeatherReading::from_kelvin(282.0).fahrenheit(), 48);
    }

    #[test]
    fn fahrenheit_below_freezing() {
        let reading = WeatherReading::from_kelvin(263.15); // -10 degC
        assert_eq!(reading.fahrenheit(), 14);
    }

    #[test]
    fn kelvin_accessor_returns_raw_value() {
        let reading = WeatherReading::from_kelvin(282.5);
        assert!((reading.kelvin() - 282.5).abs() < f64::EPSILON);
    }
}
