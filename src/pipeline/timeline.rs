use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDateTime;

use crate::types::event::{Event, EventType};

#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Empty matches every type.
    pub types: HashSet<EventType>,
    pub min_confidence: f64,
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        let type_match = self.types.is_empty() || self.types.contains(&event.event_type);
        let confidence_match = event.confidence >= self.min_confidence;
        let after_start = self.from.map_or(true, |from| event.timestamp >= from);
        let before_end = self.to.map_or(true, |to| event.timestamp <= to);
        type_match && confidence_match && after_start && before_end
    }
}

pub fn sort_chronological(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| event.timestamp);
    sorted
}

pub fn filter_events(events: &[Event], filter: &EventFilter) -> Vec<Event> {
    sort_chronological(events)
        .into_iter()
        .filter(|event| filter.matches(event))
        .collect()
}

pub fn type_counts(events: &[Event]) -> BTreeMap<EventType, usize> {
    let mut counts: BTreeMap<EventType, usize> =
        EventType::ALL.iter().map(|t| (*t, 0)).collect();
    for event in events {
        *counts.entry(event.event_type).or_default() += 1;
    }
    counts
}

/// Event types in the order they first appear.
pub fn distinct_types(events: &[Event]) -> Vec<EventType> {
    let mut seen = HashSet::new();
    events
        .iter()
        .map(|event| event.event_type)
        .filter(|t| seen.insert(*t))
        .collect()
}

pub fn recent(events: &[Event], count: usize) -> Vec<Event> {
    events.iter().take(count).cloned().collect()
}

pub fn mean_confidence(events: &[Event]) -> Option<f64> {
    if events.is_empty() {
        return None;
    }
    Some(events.iter().map(|e| e.confidence).sum::<f64>() / events.len() as f64)
}

/// Seconds between the earliest and latest event.
pub fn span_seconds(events: &[Event]) -> f64 {
    let first = events.iter().map(|e| e.timestamp).min();
    let last = events.iter().map(|e| e.timestamp).max();
    match (first, last) {
        (Some(first), Some(last)) => (last - first).num_seconds().max(0) as f64,
        _ => 0.0,
    }
}

/// Fills in `time_ratio` for events that lack one, using each event's offset
/// within the span of all timestamps. Precomputed ratios are kept as-is.
pub fn assign_time_ratios(events: &[Event]) -> Vec<Event> {
    let Some(first) = events.iter().map(|e| e.timestamp).min() else {
        return Vec::new();
    };
    let span = span_seconds(events);

    events
        .iter()
        .map(|event| {
            let mut event = event.clone();
            if event.time_ratio.is_none() {
                let ratio = if span <= 0.0 {
                    0.0
                } else {
                    let offset = (event.timestamp - first).num_seconds() as f64;
                    (offset / span).clamp(0.0, 1.0)
                };
                event.time_ratio = Some(ratio);
            }
            event
        })
        .collect()
}
