//! The asynchronous link between the companion and the device.

use crate::payload::OutboundPayload;

/// Events the device raises toward the companion. Each fires
/// independently, any number of times, with no ordering guarantee
/// relative to outstanding sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundEvent {
    /// The watchface opened and the device-side runtime is ready.
    Ready,
    /// The device sent a message. Its content is not consumed by the
    /// companion; the arrival itself is the trigger.
    MessageReceived,
}

/// Why a payload did not reach the device.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DeliveryError {
    #[error("device rejected payload: {0}")]
    Rejected(String),
    #[error("channel closed")]
    Closed,
}

/// Outbound half of the device link.
///
/// `send` resolves to exactly one outcome per payload: `Ok` once the
/// transport confirmed delivery, `Err` once it reported failure. A failed
/// send leaves device state unchanged. Framing and queuing are the
/// transport's concern; callers may issue overlapping sends.
#[async_trait::async_trait]
pub trait MessageChannel: Send + Sync {
    async fn send(&self, payload: OutboundPayload) -> Result<(), DeliveryError>;
}
