//! HF band conditions: the locally-known data category sent to the device.

use std::fmt;

use hamwatch_channel::{OutboundPayload, KEY_BANDS_DAY, KEY_BANDS_NIGHT};

/// Propagation quality for one band group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandCondition {
    Poor,
    Fair,
    Good,
}

impl fmt::Display for BandCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BandCondition::Poor => "poor",
            BandCondition::Fair => "fair",
            BandCondition::Good => "good",
        };
        f.write_str(s)
    }
}

/// Day and night conditions for the four band groups the watchface rows
/// cover (80m-40m, 30m-20m, 17m-15m, 12m-10m).
///
/// Immutable once built; a fresh summary is taken from the source on
/// every bands send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandSummary {
    pub day: [BandCondition; 4],
    pub night: [BandCondition; 4],
}

impl BandSummary {
    fn join(values: &[BandCondition; 4]) -> String {
        values
            .iter()
            .map(BandCondition::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Newline-joined day column, as the watchface renders it.
    pub fn day_text(&self) -> String {
        Self::join(&self.day)
    }

    /// Newline-joined night column.
    pub fn night_text(&self) -> String {
        Self::join(&self.night)
    }

    /// The outbound dictionary for one bands send.
    pub fn to_payload(&self) -> OutboundPayload {
        let mut payload = OutboundPayload::new();
        payload.insert(KEY_BANDS_DAY, self.day_text());
        payload.insert(KEY_BANDS_NIGHT, self.night_text());
        payload
    }
}

/// Where band summaries come from. The determination logic itself (solar
/// flux, hamqsl.com data) lives outside the companion; this seam only
/// hands over the latest summary.
pub trait BandSource: Send + Sync {
    /// A fresh summary for the next bands send.
    fn current(&self) -> BandSummary;
}

/// The fixed summary the watchface ships with until a live source is
/// wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticBandSource;

impl BandSource for StaticBandSource {
    fn current(&self) -> BandSummary {
        use BandCondition::{Fair, Good, Poor};
        BandSummary {
            day: [Fair, Good, Good, Fair],
            night: [Good, Fair, Fair, Poor],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamwatch_channel::PayloadValue;

    #[test]
    fn conditions_render_lowercase() {
        assert_eq!(BandCondition::Poor.to_string(), "poor");
        assert_eq!(BandCondition::Fair.to_string(), "fair");
        assert_eq!(BandCondition::Good.to_string(), "good");
    }

    #[test]
    fn static_source_matches_the_shipped_summary() {
        let summary = StaticBandSource.current();
        assert_eq!(summary.day_text(), "fair\ngood\ngood\nfair");
        assert_eq!(summary.night_text(), "good\nfair\nfair\npoor");
    }

    #[test]
    fn payload_carries_both_periods_under_the_wire_keys() {
        let payload = StaticBandSource.current().to_payload();

        assert_eq!(payload.len(), 2);
        assert_eq!(
            payload.get(KEY_BANDS_DAY),
            Some(&PayloadValue::Text("fair\ngood\ngood\nfair".to_string()))
        );
        assert_eq!(
            payload.get(KEY_BANDS_NIGHT),
            Some(&PayloadValue::Text("good\nfair\nfair\npoor".to_string()))
        );
    }

    #[test]
    fn summaries_are_rebuilt_per_call() {
        // Two calls give equal but independent values; nothing is cached.
        let a = StaticBandSource.current();
        let b = StaticBandSource.current();
        assert_eq!(a, b);
        assert_eq!(a.to_payload(), b.to_payload());
    }
}
