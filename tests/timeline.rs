use std::collections::HashSet;

use chrono::NaiveDateTime;
use railai_rs::data::Catalog;
use railai_rs::pipeline::timeline::{self, EventFilter};
use railai_rs::types::event::{Event, EventLocation, EventType, TIMESTAMP_FORMAT};

fn ts(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).expect("timestamp")
}

fn event(id: &str, timestamp: &str, event_type: EventType, confidence: f64) -> Event {
    Event {
        id: id.to_string(),
        timestamp: ts(timestamp),
        frame: 0,
        event_type,
        confidence,
        note: String::new(),
        video_url: None,
        location: EventLocation {
            lat: 52.5,
            lng: 13.4,
            milepost: "KM 0+000".to_string(),
        },
        time_ratio: None,
    }
}

fn sample() -> Vec<Event> {
    vec![
        event("c", "2024-01-15 08:01:00", EventType::Obstacle, 0.70),
        event("a", "2024-01-15 08:00:00", EventType::Warning, 0.95),
        event("d", "2024-01-15 08:02:00", EventType::RedSignal, 0.99),
        event("b", "2024-01-15 08:00:30", EventType::Warning, 0.80),
    ]
}

fn ids(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn sorting_is_chronological_and_stable() {
    let mut events = sample();
    events.push(event("a2", "2024-01-15 08:00:00", EventType::SpeedLimit, 0.5));
    let sorted = timeline::sort_chronological(&events);
    assert_eq!(ids(&sorted), vec!["a", "a2", "b", "c", "d"]);
}

#[test]
fn empty_filter_matches_everything() {
    let filtered = timeline::filter_events(&sample(), &EventFilter::default());
    assert_eq!(ids(&filtered), vec!["a", "b", "c", "d"]);
}

#[test]
fn filter_by_type_confidence_and_window() {
    let events = sample();

    let by_type = EventFilter {
        types: HashSet::from([EventType::Warning]),
        ..EventFilter::default()
    };
    assert_eq!(ids(&timeline::filter_events(&events, &by_type)), vec!["a", "b"]);

    let by_confidence = EventFilter {
        min_confidence: 0.9,
        ..EventFilter::default()
    };
    assert_eq!(ids(&timeline::filter_events(&events, &by_confidence)), vec!["a", "d"]);

    let by_window = EventFilter {
        from: Some(ts("2024-01-15 08:00:30")),
        to: Some(ts("2024-01-15 08:01:00")),
        ..EventFilter::default()
    };
    assert_eq!(ids(&timeline::filter_events(&events, &by_window)), vec!["b", "c"]);
}

#[test]
fn type_counts_cover_every_type() {
    let counts = timeline::type_counts(&sample());
    assert_eq!(counts.len(), EventType::ALL.len());
    assert_eq!(counts[&EventType::Warning], 2);
    assert_eq!(counts[&EventType::PersonInTrack], 0);
}

#[test]
fn distinct_types_keep_first_seen_order() {
    let sorted = timeline::sort_chronological(&sample());
    assert_eq!(
        timeline::distinct_types(&sorted),
        vec![EventType::Warning, EventType::Obstacle, EventType::RedSignal]
    );
}

#[test]
fn summary_statistics() {
    let events = sample();
    let mean = timeline::mean_confidence(&events).expect("mean");
    assert!((mean - 0.86).abs() < 1e-9);
    assert_eq!(timeline::mean_confidence(&[]), None);
    assert_eq!(timeline::span_seconds(&events), 120.0);
    assert_eq!(timeline::span_seconds(&[]), 0.0);
    assert_eq!(timeline::recent(&events, 2).len(), 2);
}

#[test]
fn time_ratios_follow_the_event_span() {
    let events = timeline::sort_chronological(&sample());
    let with_ratios = timeline::assign_time_ratios(&events);
    let ratios: Vec<f64> = with_ratios.iter().map(|e| e.time_ratio.expect("ratio")).collect();
    assert_eq!(ratios, vec![0.0, 0.25, 0.5, 1.0]);
}

#[test]
fn precomputed_ratios_are_kept() {
    let mut events = sample();
    events[0].time_ratio = Some(0.9);
    let with_ratios = timeline::assign_time_ratios(&events);
    assert_eq!(with_ratios[0].time_ratio, Some(0.9));
}

#[test]
fn single_instant_span_maps_to_zero() {
    let events = vec![
        event("x", "2024-01-15 08:00:00", EventType::Warning, 0.9),
        event("y", "2024-01-15 08:00:00", EventType::Obstacle, 0.9),
    ];
    let with_ratios = timeline::assign_time_ratios(&events);
    assert!(with_ratios.iter().all(|e| e.time_ratio == Some(0.0)));
    assert!(timeline::assign_time_ratios(&[]).is_empty());
}

#[test]
fn demo_catalog_loads_with_aligned_events() {
    let catalog = Catalog::load().expect("catalog");
    assert_eq!(catalog.datasets().len(), 5);
    assert_eq!(catalog.models().len(), 4);
    assert_eq!(catalog.uploads().len(), 8);

    for dataset in catalog.datasets() {
        assert!(dataset.waypoints.len() >= 2, "{}", dataset.id);
        assert!(dataset.total_duration > 0.0, "{}", dataset.id);
        assert!(dataset
            .events
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp));

        let ratios: Vec<f64> = dataset
            .events
            .iter()
            .map(|e| e.time_ratio.expect("ratio assigned"))
            .collect();
        assert_eq!(ratios.first().copied(), Some(0.0));
        assert_eq!(ratios.last().copied(), Some(1.0));
        assert!(ratios.iter().all(|r| (0.0..=1.0).contains(r)));
    }

    let line_a = catalog.dataset("line-a").expect("line-a");
    assert_eq!(line_a.events.len(), 20);
    assert_eq!(
        catalog
            .dataset("lineA_km12+400_frontcab.mp4")
            .map(|d| d.id.as_str()),
        Some("line-a")
    );
    assert!(catalog.dataset("nope").is_none());
}
