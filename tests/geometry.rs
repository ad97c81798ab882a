use railai_rs::error::RouteError;
use railai_rs::pipeline::geometry::{
    align_event_with_route, haversine_distance, time_to_position, time_to_ratio, RouteMetrics,
};
use railai_rs::types::geo::GeoPoint;

const ONE_DEGREE_AT_EQUATOR_M: f64 = 111_194.93;

fn equator_route() -> RouteMetrics {
    RouteMetrics::compute(&[GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)])
        .expect("valid route")
}

fn berlin_route() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(52.5251, 13.3694),
        GeoPoint::new(52.5800, 13.3200),
        GeoPoint::new(52.6500, 13.2400),
        GeoPoint::new(52.7800, 13.0500),
        GeoPoint::new(53.0000, 12.5000),
    ]
}

fn assert_close(a: GeoPoint, b: GeoPoint) {
    assert!(
        (a.lat - b.lat).abs() < 1e-9 && (a.lng - b.lng).abs() < 1e-9,
        "{:?} != {:?}",
        a,
        b
    );
}

#[test]
fn fewer_than_two_waypoints_is_rejected() {
    assert!(matches!(
        RouteMetrics::compute(&[]),
        Err(RouteError::InsufficientWaypoints(0))
    ));
    assert!(matches!(
        RouteMetrics::compute(&[GeoPoint::new(52.5, 13.4)]),
        Err(RouteError::InsufficientWaypoints(1))
    ));
}

#[test]
fn one_degree_of_longitude_on_the_equator() {
    let metrics = equator_route();
    assert!((metrics.total() - ONE_DEGREE_AT_EQUATOR_M).abs() < 1.0);
    assert_eq!(metrics.segments().len(), 1);
    assert_eq!(metrics.cumulative(), &[0.0, metrics.total()]);
}

#[test]
fn haversine_is_symmetric_and_zero_on_identity() {
    let berlin = GeoPoint::new(52.52, 13.405);
    let hamburg = GeoPoint::new(53.5511, 9.9937);
    assert_eq!(haversine_distance(berlin, berlin), 0.0);
    let forward = haversine_distance(berlin, hamburg);
    let backward = haversine_distance(hamburg, berlin);
    assert!((forward - backward).abs() < 1e-6);
    // Roughly 255 km as the crow flies.
    assert!((250_000.0..260_000.0).contains(&forward), "{}", forward);
}

#[test]
fn cumulative_table_is_consistent() {
    let waypoints = berlin_route();
    let metrics = RouteMetrics::compute(&waypoints).expect("valid route");

    assert_eq!(metrics.segments().len(), waypoints.len() - 1);
    assert_eq!(metrics.cumulative().len(), waypoints.len());
    assert_eq!(metrics.cumulative()[0], 0.0);
    assert_eq!(*metrics.cumulative().last().expect("non-empty"), metrics.total());

    for (i, segment) in metrics.segments().iter().enumerate() {
        assert!(*segment >= 0.0);
        let step = metrics.cumulative()[i + 1] - metrics.cumulative()[i];
        assert!((step - segment).abs() < 1e-6);
    }
    let sum: f64 = metrics.segments().iter().sum();
    assert!((sum - metrics.total()).abs() < 1e-6);
}

#[test]
fn endpoints_are_exact() {
    let waypoints = berlin_route();
    let metrics = RouteMetrics::compute(&waypoints).expect("valid route");

    assert_eq!(metrics.point_at_ratio(0.0), waypoints[0]);
    assert_eq!(metrics.point_at_ratio(1.0), waypoints[waypoints.len() - 1]);
}

#[test]
fn out_of_range_ratios_are_clamped() {
    let waypoints = berlin_route();
    let metrics = RouteMetrics::compute(&waypoints).expect("valid route");

    assert_eq!(metrics.point_at_ratio(-0.5), waypoints[0]);
    assert_eq!(metrics.point_at_ratio(1.5), waypoints[waypoints.len() - 1]);
    assert_eq!(metrics.point_at_ratio(f64::NAN), waypoints[0]);
    assert_eq!(metrics.point_at_ratio(f64::INFINITY), waypoints[waypoints.len() - 1]);
}

#[test]
fn midpoint_on_the_equator() {
    let metrics = equator_route();
    assert_close(metrics.point_at_ratio(0.5), GeoPoint::new(0.0, 0.5));
    assert_close(metrics.point_at_ratio(0.25), GeoPoint::new(0.0, 0.25));
}

#[test]
fn midpoint_is_roughly_equidistant_from_both_ends() {
    let start = GeoPoint::new(52.52, 13.405);
    let end = GeoPoint::new(53.5511, 9.9937);
    let metrics = RouteMetrics::compute(&[start, end]).expect("valid route");

    let mid = metrics.point_at_ratio(0.5);
    let to_start = haversine_distance(start, mid);
    let to_end = haversine_distance(mid, end);
    assert!((to_start - to_end).abs() / metrics.total() < 0.01);
}

#[test]
fn every_waypoint_is_reached_at_its_cumulative_ratio() {
    let waypoints = berlin_route();
    let metrics = RouteMetrics::compute(&waypoints).expect("valid route");

    for (i, waypoint) in waypoints.iter().enumerate() {
        let ratio = metrics.cumulative()[i] / metrics.total();
        assert_close(metrics.point_at_ratio(ratio), *waypoint);
    }
}

#[test]
fn progress_is_monotonic_along_a_straight_route() {
    let metrics = equator_route();
    let mut previous = f64::NEG_INFINITY;
    for step in 0..=20 {
        let point = metrics.point_at_ratio(step as f64 / 20.0);
        assert!(point.lng >= previous);
        previous = point.lng;
    }
}

#[test]
fn duplicate_waypoints_do_not_produce_nan() {
    let metrics = RouteMetrics::compute(&[
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 1.0),
    ])
    .expect("valid route");

    assert_eq!(metrics.segments()[0], 0.0);
    assert!((metrics.total() - ONE_DEGREE_AT_EQUATOR_M).abs() < 1.0);
    for step in 0..=10 {
        let point = metrics.point_at_ratio(step as f64 / 10.0);
        assert!(point.lat.is_finite() && point.lng.is_finite());
    }
    assert_eq!(metrics.point_at_ratio(0.0), GeoPoint::new(0.0, 0.0));
}

#[test]
fn zero_length_route_resolves_to_its_start() {
    let here = GeoPoint::new(51.5, -0.12);
    let metrics = RouteMetrics::compute(&[here, here]).expect("valid route");
    assert_eq!(metrics.total(), 0.0);
    assert_eq!(metrics.point_at_ratio(0.7), here);
    assert_eq!(metrics.ratio_at_distance(100.0), 0.0);
}

#[test]
fn time_ratio_is_clamped_and_safe() {
    assert_eq!(time_to_ratio(5.0, 10.0), 0.5);
    assert_eq!(time_to_ratio(-1.0, 10.0), 0.0);
    assert_eq!(time_to_ratio(20.0, 10.0), 1.0);
    assert_eq!(time_to_ratio(5.0, 0.0), 0.0);
    assert_eq!(time_to_ratio(5.0, -3.0), 0.0);
    assert_eq!(time_to_ratio(f64::NAN, 10.0), 0.0);
    assert_eq!(time_to_ratio(5.0, f64::NAN), 0.0);
}

#[test]
fn time_and_event_alignment_delegate_to_the_resolver() {
    let metrics = RouteMetrics::compute(&berlin_route()).expect("valid route");

    assert_eq!(time_to_position(15.0, 30.0, &metrics), metrics.point_at_ratio(0.5));
    assert_eq!(time_to_position(99.0, 0.0, &metrics), metrics.point_at_ratio(0.0));
    assert_eq!(align_event_with_route(0.25, &metrics), metrics.point_at_ratio(0.25));
}

#[test]
fn distance_maps_back_to_ratio() {
    let metrics = equator_route();
    assert!((metrics.ratio_at_distance(metrics.total() / 4.0) - 0.25).abs() < 1e-12);
    assert_eq!(metrics.ratio_at_distance(-10.0), 0.0);
    assert_eq!(metrics.ratio_at_distance(metrics.total() * 2.0), 1.0);
}

#[test]
fn three_points_along_the_equator() {
    let metrics = RouteMetrics::compute(&[
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 1.0),
        GeoPoint::new(0.0, 2.0),
    ])
    .expect("valid route");

    assert_eq!(metrics.segments().len(), 2);
    assert!((metrics.segments()[0] - metrics.segments()[1]).abs() < 1e-6);
    assert!((metrics.total() - 2.0 * ONE_DEGREE_AT_EQUATOR_M).abs() < 2.0);
    assert_close(metrics.point_at_ratio(0.25), GeoPoint::new(0.0, 0.5));
}

#[test]
fn short_berlin_segment_midpoint_is_equidistant() {
    let start = GeoPoint::new(52.5251, 13.3694);
    let end = GeoPoint::new(52.5800, 13.3200);
    let metrics = RouteMetrics::compute(&[start, end]).expect("valid route");

    let mid = metrics.point_at_ratio(0.5);
    let to_start = haversine_distance(start, mid);
    let to_end = haversine_distance(mid, end);
    assert!((to_start - to_end).abs() < 0.5, "{} vs {}", to_start, to_end);
}

#[test]
fn distance_from_start_grows_with_ratio() {
    let waypoints = berlin_route();
    let metrics = RouteMetrics::compute(&waypoints).expect("valid route");

    let mut previous = 0.0;
    for step in 0..=50 {
        let point = metrics.point_at_ratio(step as f64 / 50.0);
        let travelled = haversine_distance(waypoints[0], point);
        assert!(travelled + 1e-6 >= previous, "step {}", step);
        previous = travelled;
    }
}

#[test]
fn zero_length_segment_mid_route_resolves_to_the_shared_waypoint() {
    let metrics = RouteMetrics::compute(&[
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 1.0),
        GeoPoint::new(0.0, 1.0),
        GeoPoint::new(0.0, 2.0),
    ])
    .expect("valid route");

    assert_eq!(metrics.segments()[1], 0.0);
    assert_eq!(metrics.point_at_ratio(0.5), GeoPoint::new(0.0, 1.0));
    assert_close(metrics.point_at_ratio(0.75), GeoPoint::new(0.0, 1.5));
}
