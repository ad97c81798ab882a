//! Distance tables and position lookup along a waypoint polyline.
//!
//! Positions are interpolated linearly in lat/lng within each segment, so the
//! result follows the chord between waypoints rather than the true geodesic.
//! Segments on demo routes are short enough that the two are indistinguishable
//! on a map.

use serde::Serialize;

use crate::error::RouteError;
use crate::types::geo::GeoPoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two points on a spherical Earth.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push h a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Precomputed segment and cumulative distances for a route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteMetrics {
    total: f64,
    segments: Vec<f64>,
    cumulative: Vec<f64>,
    waypoints: Vec<GeoPoint>,
}

impl RouteMetrics {
    pub fn compute(waypoints: &[GeoPoint]) -> Result<Self, RouteError> {
        if waypoints.len() < 2 {
            return Err(RouteError::InsufficientWaypoints(waypoints.len()));
        }

        let segments: Vec<f64> = waypoints
            .windows(2)
            .map(|pair| haversine_distance(pair[0], pair[1]))
            .collect();

        let mut cumulative = Vec::with_capacity(waypoints.len());
        cumulative.push(0.0);
        for (i, segment) in segments.iter().enumerate() {
            cumulative.push(cumulative[i] + segment);
        }

        let total = cumulative[cumulative.len() - 1];

        Ok(Self {
            total,
            segments,
            cumulative,
            waypoints: waypoints.to_vec(),
        })
    }

    /// Total path length in meters.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn segments(&self) -> &[f64] {
        &self.segments
    }

    /// Distance from the start to each waypoint; `cumulative()[0] == 0`.
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    pub fn waypoints(&self) -> &[GeoPoint] {
        &self.waypoints
    }

    /// Position at a fraction of the total path length.
    ///
    /// The ratio is clamped into `[0, 1]` (NaN counts as 0), so this never
    /// extrapolates past either end of the route. A zero-length segment
    /// resolves to its start point.
    pub fn point_at_ratio(&self, ratio: f64) -> GeoPoint {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        let last = self.waypoints[self.waypoints.len() - 1];
        if ratio >= 1.0 {
            return last;
        }
        let target = ratio * self.total;

        let Some(idx) = (0..self.segments.len()).find(|&i| self.cumulative[i + 1] >= target) else {
            return last;
        };

        let local_distance = (target - self.cumulative[idx]).max(0.0);
        let segment_length = self.segments[idx];
        let local_ratio = if segment_length == 0.0 {
            0.0
        } else {
            local_distance / segment_length
        };

        let start = self.waypoints[idx];
        let end = self.waypoints[idx + 1];

        GeoPoint::new(
            start.lat + (end.lat - start.lat) * local_ratio,
            start.lng + (end.lng - start.lng) * local_ratio,
        )
    }

    /// Fraction of the total path length covered at `distance` meters.
    pub fn ratio_at_distance(&self, distance: f64) -> f64 {
        if self.total <= 0.0 {
            return 0.0;
        }
        (distance / self.total).clamp(0.0, 1.0)
    }
}

/// Maps elapsed time over a total duration to a clamped progress ratio.
/// A non-positive duration yields 0.
pub fn time_to_ratio(current_time: f64, total_duration: f64) -> f64 {
    if total_duration.is_nan() || total_duration <= 0.0 {
        return 0.0;
    }
    let ratio = current_time / total_duration;
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

pub fn time_to_position(current_time: f64, total_duration: f64, metrics: &RouteMetrics) -> GeoPoint {
    metrics.point_at_ratio(time_to_ratio(current_time, total_duration))
}

/// Places an event on the route from its precomputed time ratio.
pub fn align_event_with_route(time_ratio: f64, metrics: &RouteMetrics) -> GeoPoint {
    metrics.point_at_ratio(time_ratio)
}
