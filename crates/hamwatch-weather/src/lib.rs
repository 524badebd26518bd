//! Weather data for hamwatch.
//!
//! Current-conditions client against an OpenWeatherMap-style endpoint,
//! plus the geolocation provider whose timeout and staleness policy gates
//! every fetch.

pub mod client;
pub mod location;
pub mod types;

pub use client::WeatherClient;
pub use location::{
    FixSource, FixedProvider, GeoOptions, GeoProvider, SourceProvider, SystemFixSource,
};
pub use types::{FetchError, GeoError, Position, WeatherReading};
