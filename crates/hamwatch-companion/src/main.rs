use std::sync::Arc;

use anyhow::Result;
use hamwatch_channel::{InboundEvent, MemoryChannel};
use hamwatch_companion::bands::StaticBandSource;
use hamwatch_companion::pipeline::Pipeline;
use hamwatch_weather::{
    FixedProvider, GeoProvider, Position, SourceProvider, SystemFixSource, WeatherClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    hamwatch_core::init()?;

    let config = hamwatch_core::Config::load()?;
    let validation = config.validate();
    for warning in &validation.warnings {
        tracing::warn!("config warning: {}", warning);
    }
    if !validation.is_valid() {
        anyhow::bail!("configuration invalid: {}", validation.error_summary());
    }

    let weather = WeatherClient::new(&config.weather.api_url, config.weather.api_key.as_deref())?;

    let geo: Arc<dyn GeoProvider> = match config.location.manual() {
        Some((latitude, longitude)) => Arc::new(FixedProvider::new(Position {
            latitude,
            longitude,
        })),
        None => Arc::new(SourceProvider::new(SystemFixSource)),
    };

    let (channel, events) = MemoryChannel::new();
    let pipeline = Arc::new(Pipeline::new(
        Arc::clone(&channel),
        weather,
        geo,
        Arc::new(StaticBandSource),
    ));

    // The loopback link raises `ready` itself, the way the device runtime
    // does when the watchface opens.
    channel.raise(InboundEvent::Ready);

    tracing::info!("hamwatch companion started");
    pipeline.run(events).await;

    Ok(())
}
