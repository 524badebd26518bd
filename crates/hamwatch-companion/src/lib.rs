//! Phone-side companion for the hamface watchface.
//!
//! Listens for device events and runs the two-stage delivery pipeline:
//! the band-condition summary first, then the geolocated weather
//! observation.

pub mod bands;
pub mod pipeline;

pub use bands::{BandCondition, BandSource, BandSummary, StaticBandSource};
pub use pipeline::{Pipeline, GEO_MAX_AGE, GEO_TIMEOUT};
