//! In-memory loopback channel, the reference `MessageChannel`.
//!
//! Records every delivered payload and lets device-side behavior be
//! scripted: failing upcoming sends, raising inbound events. Used by the
//! pipeline tests and by the binary's local mode.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::channel::{DeliveryError, InboundEvent, MessageChannel};
use crate::payload::OutboundPayload;

pub struct MemoryChannel {
    delivered: Mutex<Vec<OutboundPayload>>,
    scripted: Mutex<VecDeque<Result<(), DeliveryError>>>,
    events_tx: mpsc::UnboundedSender<InboundEvent>,
}

impl MemoryChannel {
    /// Create the channel plus the receiver for inbound device events.
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<InboundEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let channel = Arc::new(Self {
            delivered: Mutex::new(Vec::new()),
            scripted: Mutex::new(VecDeque::new()),
            events_tx,
        });
        (channel, events_rx)
    }

    /// Raise an inbound event, as if the device had sent it.
    pub fn raise(&self, event: InboundEvent) {
        if self.events_tx.send(event).is_err() {
            tracing::warn!("inbound event {:?} dropped, no subscriber", event);
        }
    }

    /// Script the outcome of the next send. Sends with no scripted outcome
    /// deliver successfully.
    pub fn script_next_send(&self, outcome: Result<(), DeliveryError>) {
        self.scripted.lock().push_back(outcome);
    }

    /// Payloads that reached the device so far, in delivery order.
    pub fn delivered(&self) -> Vec<OutboundPayload> {
        self.delivered.lock().clone()
    }
}

#[async_trait::async_trait]
impl MessageChannel for MemoryChannel {
    async fn send(&self, payload: OutboundPayload) -> Result<(), DeliveryError> {
        let outcome = self.scripted.lock().pop_front().unwrap_or(Ok(()));
        match outcome {
            Ok(()) => {
                tracing::debug!("delivered payload with {} entries", payload.len());
                self.delivered.lock().push(payload);
                Ok(())
            }
            Err(reason) => Err(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::KEY_BANDS_DAY;

    fn bands_payload() -> OutboundPayload {
        let mut payload = OutboundPayload::new();
        payload.insert(KEY_BANDS_DAY, "fair\ngood\ngood\nfair");
        payload
    }

    #[tokio::test]
    async fn records_delivered_payloads() {
        let (channel, _events) = MemoryChannel::new();

        channel.send(bands_payload()).await.unwrap();
        channel.send(bands_payload()).await.unwrap();

        let delivered = channel.delivered();
        assert_eq!(delivered.len(), 2);
        assert!(delivered[0].get(KEY_BANDS_DAY).is_some());
    }

    #[tokio::test]
    async fn scripted_failure_is_not_recorded() {
        let (channel, _events) = MemoryChannel::new();
        channel.script_next_send(Err(DeliveryError::Rejected("busy".to_string())));

        let result = channel.send(bands_payload()).await;
        assert!(matches!(result, Err(DeliveryError::Rejected(_))));
        assert!(channel.delivered().is_empty());

        // The script only covered one send; the next one goes through.
        channel.send(bands_payload()).await.unwrap();
        assert_eq!(channel.delivered().len(), 1);
    }

    #[tokio::test]
    async fn raised_events_reach_the_subscriber() {
        let (channel, mut events) = MemoryChannel::new();

        channel.raise(InboundEvent::Ready);
        channel.raise(InboundEvent::MessageReceived);

        assert_eq!(events.recv().await, Some(InboundEvent::Ready));
        assert_eq!(events.recv().await, Some(InboundEvent::MessageReceived));
    }
}
