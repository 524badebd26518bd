//! The two-stage delivery pipeline.
//!
//! Each inbound device event runs one full pass: the band summary first,
//! then the weather observation. The stages are data-independent and
//! ordered only to avoid message collisions on the device side, so a
//! failed bands send never stops the weather stage. Within the weather
//! stage, a geolocation or fetch failure ends the pass without sending
//! anything.

use std::sync::Arc;
use std::time::Duration;

use hamwatch_channel::{
    DeliveryError, InboundEvent, MessageChannel, OutboundPayload, KEY_TEMPERATURE_C,
    KEY_TEMPERATURE_F,
};
use hamwatch_weather::{FetchError, GeoError, GeoOptions, GeoProvider, WeatherClient};
use tokio::sync::mpsc;

use crate::bands::BandSource;

/// Give up waiting for a fresh fix after this long.
pub const GEO_TIMEOUT: Duration = Duration::from_millis(15_000);
/// Accept a cached fix up to this old.
pub const GEO_MAX_AGE: Duration = Duration::from_millis(60_000);

/// Why a weather stage ended. Geolocation and fetch failures end the
/// stage before anything is sent; a delivery failure means the payload
/// was built and handed to the channel but did not reach the device.
#[derive(Debug, thiserror::Error)]
enum WeatherStageError {
    #[error("geolocation failed: {0}")]
    Geolocation(#[from] GeoError),
    #[error("weather fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("weather delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Orchestrates delivery of both data categories over one channel.
pub struct Pipeline<C> {
    channel: Arc<C>,
    weather: WeatherClient,
    geo: Arc<dyn GeoProvider>,
    bands: Arc<dyn BandSource>,
}

impl<C: MessageChannel + 'static> Pipeline<C> {
    pub fn new(
        channel: Arc<C>,
        weather: WeatherClient,
        geo: Arc<dyn GeoProvider>,
        bands: Arc<dyn BandSource>,
    ) -> Self {
        Self {
            channel,
            weather,
            geo,
            bands,
        }
    }

    /// One full pass: bands, then weather, regardless of how bands went.
    pub async fn run_pass(&self) {
        match self.send_bands().await {
            Ok(()) => tracing::info!("band summary sent"),
            Err(e) => tracing::warn!("band summary not delivered: {}", e),
        }

        match self.send_weather().await {
            Ok(()) => tracing::info!("weather sent"),
            Err(e) => tracing::warn!("{}", e),
        }
    }

    async fn send_bands(&self) -> Result<(), DeliveryError> {
        let summary = self.bands.current();
        self.channel.send(summary.to_payload()).await
    }

    async fn send_weather(&self) -> Result<(), WeatherStageError> {
        let options = GeoOptions {
            timeout: GEO_TIMEOUT,
            max_age: GEO_MAX_AGE,
        };
        let position = self.geo.position(&options).await?;
        let reading = self.weather.fetch(&position).await?;

        let mut payload = OutboundPayload::new();
        payload.insert(KEY_TEMPERATURE_C, reading.celsius());
        payload.insert(KEY_TEMPERATURE_F, reading.fahrenheit());
        self.channel.send(payload).await?;
        Ok(())
    }

    /// Consume inbound device events until the channel closes.
    ///
    /// Every event starts one independent pass. Passes from distinct
    /// events may overlap; the device link serializes or tolerates
    /// interleaved deliveries.
    pub async fn run(self: Arc<Self>, mut events: mpsc::UnboundedReceiver<InboundEvent>) {
        while let Some(event) = events.recv().await {
            tracing::info!("device event: {:?}", event);
            let pipeline = Arc::clone(&self);
            tokio::spawn(async move { pipeline.run_pass().await });
        }
    }
}
