//! Current-weather HTTP client.

use std::time::Duration;

use tracing::instrument;

use crate::types::{FetchError, Position, WeatherReading};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for an OpenWeatherMap-style current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct WeatherBody {
    main: MainBody,
}

#[derive(Debug, serde::Deserialize)]
struct MainBody {
    /// Temperature in Kelvin.
    temp: f64,
}

impl WeatherClient {
    /// Build a client against the given endpoint base, e.g.
    /// `http://api.openweathermap.org/data/2.5`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, api_key: Option<&str>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        })
    }

    /// Fetch the current observation for a position.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-2xx status, or unexpected body shape is
    /// a fetch failure; the caller does not distinguish them.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, position: &Position) -> Result<WeatherReading, FetchError> {
        let mut url = format!(
            "{}/weather?lat={}&lon={}",
            self.base_url, position.latitude, position.longitude
        );
        if let Some(key) = &self.api_key {
            url.push_str("&appid=");
            url.push_str(key);
        }

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let body: WeatherBody =
            serde_json::from_str(&text).map_err(|e| FetchError::Parse(e.to_string()))?;

        let reading = WeatherReading::from_kelvin(body.main.temp);
        tracing::info!("temperature is {} degC", reading.celsius());
        Ok(reading)
    }
}
