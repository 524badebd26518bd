//! Geolocation with a bounded wait and a staleness allowance.

use std::time::Duration;

use tokio::time::Instant;

use crate::types::{GeoError, Position};

/// Bounds for one position request: how old a cached fix may be, and how
/// long to wait for a fresh one before giving up.
#[derive(Debug, Clone, Copy)]
pub struct GeoOptions {
    pub timeout: Duration,
    pub max_age: Duration,
}

/// Resolves the current position under the given bounds.
#[async_trait::async_trait]
pub trait GeoProvider: Send + Sync {
    /// # Errors
    ///
    /// Permission, timeout, and unavailability all surface as a
    /// `GeoError`; callers treat them uniformly.
    async fn position(&self, options: &GeoOptions) -> Result<Position, GeoError>;
}

/// Raw fix supplier, the platform's location subsystem reduced to the two
/// operations the policy needs.
#[async_trait::async_trait]
pub trait FixSource: Send + Sync {
    /// Most recent known fix and when it was acquired.
    fn last_fix(&self) -> Option<(Position, Instant)>;

    /// Wait for the next fresh fix. Unbounded; callers apply the timeout.
    async fn next_fix(&self) -> Result<Position, GeoError>;
}

/// Applies the cached-fix and timeout policy over a raw [`FixSource`]: a
/// cached fix no older than `max_age` is returned immediately, otherwise
/// the provider waits up to `timeout` for a fresh one.
pub struct SourceProvider<S> {
    source: S,
}

impl<S> SourceProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait::async_trait]
impl<S: FixSource> GeoProvider for SourceProvider<S> {
    async fn position(&self, options: &GeoOptions) -> Result<Position, GeoError> {
        if let Some((fix, acquired_at)) = self.source.last_fix() {
            let age = acquired_at.elapsed();
            if age <= options.max_age {
                tracing::debug!("using cached fix, {:?} old", age);
                return Ok(fix);
            }
        }

        match tokio::time::timeout(options.timeout, self.source.next_fix()).await {
            Ok(result) => result,
            Err(_) => Err(GeoError::Timeout),
        }
    }
}

/// Fixed coordinates, for configurations that pin the location manually.
pub struct FixedProvider {
    position: Position,
}

impl FixedProvider {
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

#[async_trait::async_trait]
impl GeoProvider for FixedProvider {
    async fn position(&self, _options: &GeoOptions) -> Result<Position, GeoError> {
        Ok(self.position)
    }
}

/// Platform location subsystem hook. Not wired up on this build; it acts
/// as an unavailable source so the pipeline fails the stage cleanly.
pub struct SystemFixSource;

#[async_trait::async_trait]
impl FixSource for SystemFixSource {
    fn last_fix(&self) -> Option<(Position, Instant)> {
        None
    }

    async fn next_fix(&self) -> Result<Position, GeoError> {
        Err(GeoError::Unavailable)
    }
}
