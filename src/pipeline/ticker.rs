//! Clock-driven playback along a route.
//!
//! Callers pass the current [`Instant`] in explicitly, so the same code drives
//! HTTP sessions and deterministic tests.

use std::time::Instant;

use crate::pipeline::geometry::{time_to_position, time_to_ratio, RouteMetrics};
use crate::types::geo::GeoPoint;

/// Start/stop source of elapsed-time deltas.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    last: Option<Instant>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Instant) {
        if self.last.is_none() {
            self.last = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.last = None;
    }

    pub fn is_running(&self) -> bool {
        self.last.is_some()
    }

    /// Seconds since the previous tick (or since `start`). Always 0 while
    /// stopped, so time spent paused is never reported.
    pub fn tick(&mut self, now: Instant) -> f64 {
        let Some(last) = self.last else {
            return 0.0;
        };
        self.last = Some(now);
        now.saturating_duration_since(last).as_secs_f64()
    }
}

#[derive(Debug, Clone)]
pub struct Playback {
    ticker: Ticker,
    current_time: f64,
    duration: f64,
    speed: f64,
    looping: bool,
}

impl Playback {
    pub fn new(duration: f64, speed: f64, looping: bool) -> Self {
        Self {
            ticker: Ticker::new(),
            current_time: 0.0,
            duration: if duration.is_finite() { duration.max(0.0) } else { 0.0 },
            speed: if speed.is_finite() && speed > 0.0 { speed } else { 1.0 },
            looping,
        }
    }

    pub fn play(&mut self, now: Instant) {
        if !self.looping && self.current_time >= self.duration {
            self.current_time = 0.0;
        }
        self.ticker.start(now);
    }

    pub fn pause(&mut self, now: Instant) {
        self.advance(now);
        self.ticker.stop();
    }

    pub fn seek(&mut self, time: f64) {
        self.current_time = if time.is_nan() {
            0.0
        } else {
            time.clamp(0.0, self.duration)
        };
    }

    /// Moves the playhead by the wall-clock time since the last tick.
    pub fn advance(&mut self, now: Instant) -> f64 {
        let delta = self.ticker.tick(now);
        if delta <= 0.0 {
            return self.current_time;
        }

        if self.duration <= 0.0 {
            self.current_time = 0.0;
            self.ticker.stop();
            return self.current_time;
        }

        let next = self.current_time + delta * self.speed;
        if next < self.duration {
            self.current_time = next;
        } else if self.looping {
            self.current_time = next % self.duration;
        } else {
            self.current_time = self.duration;
            self.ticker.stop();
        }
        self.current_time
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_playing(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn ratio(&self) -> f64 {
        time_to_ratio(self.current_time, self.duration)
    }

    pub fn position(&self, metrics: &RouteMetrics) -> GeoPoint {
        time_to_position(self.current_time, self.duration, metrics)
    }
}
