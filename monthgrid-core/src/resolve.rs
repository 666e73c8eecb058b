//! Assigning events to a day.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::trace;

use crate::event::Event;

/// Events overlapping `day`, in input order.
///
/// An event is included when it starts before the last millisecond of the day
/// and ends after its first instant. Events touching the day only at its
/// start or end boundary are excluded, including zero-length ones.
pub fn events_for_day(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    let (day_start, day_end) = day_bounds(day);

    let matched: Vec<&Event> = events
        .iter()
        .filter(|event| event.start < day_end && event.end > day_start)
        .collect();

    trace!(%day, total = events.len(), matched = matched.len(), "resolved events for day");
    matched
}

/// First and last instant (millisecond resolution) of `day`.
pub fn day_bounds(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid time of day");
    (day.and_time(NaiveTime::MIN), day.and_time(end_of_day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::parse_timestamp;

    fn event(id: i64, start: &str, end: &str) -> Event {
        Event::new(
            id,
            format!("event {id}"),
            parse_timestamp(start).unwrap(),
            parse_timestamp(end).unwrap(),
        )
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ids(events: Vec<&Event>) -> Vec<String> {
        events.iter().map(|e| e.id.to_string()).collect()
    }

    #[test]
    fn test_event_crossing_midnight_lands_on_both_days() {
        let events = vec![event(1, "2024-03-10T23:00", "2024-03-11T01:00")];

        assert_eq!(events_for_day(&events, day("2024-03-10")).len(), 1);
        assert_eq!(events_for_day(&events, day("2024-03-11")).len(), 1);
        assert!(events_for_day(&events, day("2024-03-12")).is_empty());
    }

    #[test]
    fn test_end_at_day_start_is_excluded() {
        let events = vec![event(1, "2024-03-09T22:00", "2024-03-10T00:00")];
        assert!(events_for_day(&events, day("2024-03-10")).is_empty());
    }

    #[test]
    fn test_start_at_day_start_is_included() {
        let events = vec![event(1, "2024-03-10T00:00", "2024-03-10T00:30")];
        assert_eq!(events_for_day(&events, day("2024-03-10")).len(), 1);
    }

    #[test]
    fn test_start_at_day_end_is_excluded() {
        let events = vec![event(1, "2024-03-10T23:59:59.999", "2024-03-11T01:00")];

        assert!(events_for_day(&events, day("2024-03-10")).is_empty());
        assert_eq!(events_for_day(&events, day("2024-03-11")).len(), 1);
    }

    #[test]
    fn test_start_just_before_day_end_is_included() {
        let events = vec![event(1, "2024-03-10T23:59:59.998", "2024-03-11T01:00")];
        assert_eq!(events_for_day(&events, day("2024-03-10")).len(), 1);
    }

    #[test]
    fn test_day_bounds() {
        let (start, end) = day_bounds(day("2024-03-10"));
        assert_eq!(start, parse_timestamp("2024-03-10T00:00").unwrap());
        assert_eq!(end, parse_timestamp("2024-03-10T23:59:59.999").unwrap());
    }

    #[test]
    fn test_zero_length_event_on_boundary_is_excluded() {
        let events = vec![event(1, "2024-03-10T00:00", "2024-03-10T00:00")];
        assert!(events_for_day(&events, day("2024-03-10")).is_empty());
        assert!(events_for_day(&events, day("2024-03-09")).is_empty());
    }

    #[test]
    fn test_zero_length_event_inside_day_is_included() {
        let events = vec![event(1, "2024-03-10T12:00", "2024-03-10T12:00")];
        assert_eq!(events_for_day(&events, day("2024-03-10")).len(), 1);
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let a = event(3, "2024-03-10T15:00", "2024-03-10T16:00");
        let b = event(1, "2024-03-10T08:00", "2024-03-10T09:00");
        let outside = event(2, "2024-03-12T08:00", "2024-03-12T09:00");
        let events = vec![a.clone(), outside, b, a];

        assert_eq!(ids(events_for_day(&events, day("2024-03-10"))), vec!["3", "1", "3"]);
    }

    #[test]
    fn test_multi_day_event_covers_middle_days() {
        let events = vec![event(1, "2024-03-01T10:00", "2024-03-05T10:00")];
        for d in ["2024-03-01", "2024-03-03", "2024-03-05"] {
            assert_eq!(events_for_day(&events, day(d)).len(), 1, "missing on {d}");
        }
        assert!(events_for_day(&events, day("2024-03-06")).is_empty());
    }
}
