//! Device message channel for hamwatch.
//!
//! Defines the payload dictionary the watchface understands, the
//! asynchronous channel contract, and an in-memory reference channel.

pub mod channel;
pub mod memory;
pub mod payload;

pub use channel::{DeliveryError, InboundEvent, MessageChannel};
pub use memory::MemoryChannel;
pub use payload::{
    OutboundPayload, PayloadValue, KEY_BANDS_DAY, KEY_BANDS_NIGHT, KEY_TEMPERATURE_C,
    KEY_TEMPERATURE_F,
};
