//! Interval derivation over the contraction log.
//!
//! Pure and stateless: re-derivable at any time from the log's current
//! contents, no caching. Input is the log's descending-by-timestamp slice.

use crate::contraction::ContractionEvent;

/// One contraction paired with the minutes since the previous (older) one.
/// The oldest contraction has no prior event and therefore no interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Spacing {
    pub event: ContractionEvent,
    pub minutes: Option<f64>,
}

/// Compute per-event intervals for a descending-ordered event slice.
///
/// For every event except the oldest, the interval is the time since the
/// chronologically previous event, in minutes.
pub fn intervals(events: &[ContractionEvent]) -> Vec<Spacing> {
    events
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let minutes = events.get(i + 1).map(|older| {
                let delta = event.timestamp.signed_duration_since(older.timestamp);
                delta.num_milliseconds() as f64 / 60_000.0
            });
            Spacing {
                event: event.clone(),
                minutes,
            }
        })
        .collect()
}

/// Two-decimal display form, e.g. `10.00`.
pub fn format_minutes(minutes: f64) -> String {
    format!("{minutes:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use proptest::prelude::*;

    fn events_at_offsets(secs: &[i64]) -> Vec<ContractionEvent> {
        let base = Utc::now();
        secs.iter()
            .map(|&s| ContractionEvent::at(base + Duration::seconds(s)))
            .collect()
    }

    #[test]
    fn empty_log_has_no_intervals() {
        assert!(intervals(&[]).is_empty());
    }

    #[test]
    fn single_event_has_no_interval() {
        let spaced = intervals(&events_at_offsets(&[0]));
        assert_eq!(spaced.len(), 1);
        assert_eq!(spaced[0].minutes, None);
    }

    #[test]
    fn descending_900_300_0_yields_10_and_5_minutes() {
        // Chronological order 0, 300, 900 -> log holds 900, 300, 0.
        let spaced = intervals(&events_at_offsets(&[900, 300, 0]));
        assert_eq!(spaced.len(), 3);
        assert_eq!(format_minutes(spaced[0].minutes.unwrap()), "10.00");
        assert_eq!(format_minutes(spaced[1].minutes.unwrap()), "5.00");
        assert_eq!(spaced[2].minutes, None);
    }

    #[test]
    fn formatting_rounds_to_two_decimals() {
        assert_eq!(format_minutes(1.0 / 3.0), "0.33");
        assert_eq!(format_minutes(2.5), "2.50");
    }

    proptest! {
        #[test]
        fn intervals_of_descending_events_are_nonnegative(
            mut offsets in proptest::collection::vec(0i64..1_000_000, 0..32)
        ) {
            offsets.sort_unstable_by(|a, b| b.cmp(a));
            let events = events_at_offsets(&offsets);
            let spaced = intervals(&events);

            prop_assert_eq!(spaced.len(), events.len());
            for (i, s) in spaced.iter().enumerate() {
                if i + 1 == spaced.len() {
                    prop_assert_eq!(s.minutes, None);
                } else {
                    prop_assert!(s.minutes.unwrap() >= 0.0);
                }
            }
        }
    }
}
