// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout aggregate and duration derivation.

use crate::models::Sample;
use chrono::{DateTime, Utc};
use geo::LineString;
use serde::{Deserialize, Serialize};

/// Encoded polyline precision used by route consumers.
const POLYLINE_PRECISION: u32 = 5;

/// The kinds of workouts the app understands.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    Walking,
    Cycling,
}

/// A recorded workout session: metadata plus its ordered samples.
///
/// Constructed once at load time and immutable afterward. `samples` is in
/// chronological (insertion) order; the order is significant and is never
/// re-sorted anywhere in the pipeline.
#[derive(Debug, Clone)]
pub struct Workout {
    pub title: String,
    pub subtitle: String,
    pub kind: WorkoutKind,
    pub start_time: DateTime<Utc>,
    /// Absent for sessions that were never explicitly ended.
    pub end_time: Option<DateTime<Utc>>,
    /// May be empty.
    pub samples: Vec<Sample>,
}

impl Workout {
    /// Duration of the workout in seconds.
    ///
    /// With an end time this is the signed difference from the start time
    /// (negative if the end precedes the start; no clamping). Without one it
    /// is estimated as whole minutes of recording at `samples_per_minute`,
    /// which must be nonzero (see [`crate::config::DEFAULT_SAMPLES_PER_MINUTE`]).
    pub fn duration(&self, samples_per_minute: u32) -> f64 {
        debug_assert!(samples_per_minute > 0, "samples_per_minute must be nonzero");

        match self.end_time {
            Some(end) => {
                let delta = end.signed_duration_since(self.start_time);
                delta.num_milliseconds() as f64 / 1000.0
            }
            None => (self.samples.len() / samples_per_minute as usize) as f64 * 60.0,
        }
    }

    /// The first recorded sample, if any. Marks the route start.
    pub fn start_point(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// The last recorded sample, if any. Marks the route end.
    pub fn end_point(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Heart rates in sample order.
    pub fn heart_rates(&self) -> Vec<i64> {
        self.samples.iter().map(Sample::heart_rate).collect()
    }

    /// The route as a line string, in sample order.
    pub fn route(&self) -> LineString<f64> {
        LineString::from(
            self.samples
                .iter()
                .map(|s| (s.longitude(), s.latitude()))
                .collect::<Vec<_>>(),
        )
    }

    /// The route as an encoded polyline (precision 5), for renderers that
    /// consume the encoded format.
    pub fn encoded_polyline(&self) -> Result<String, RouteError> {
        polyline::encode_coordinates(self.route(), POLYLINE_PRECISION)
            .map_err(|e| RouteError::PolylineError(e.to_string()))
    }
}

/// Errors from route encoding.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Failed to encode polyline: {0}")]
    PolylineError(String),
}
