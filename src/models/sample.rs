// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout sample model and raw record decoding.

use geo::Point;

/// Number of values in a raw positional record: latitude, longitude, heart rate.
const RECORD_LEN: usize = 3;

/// One decoded observation from a workout: where, and at what heart rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    position: Point<f64>,
    heart_rate: i64,
}

impl Sample {
    /// Decode a raw `[latitude, longitude, heartRate]` record.
    ///
    /// The heart rate is truncated toward zero from its raw floating value.
    /// No range validation is performed: out-of-range coordinates or negative
    /// heart rates pass through unchanged.
    pub fn from_record(record: &[f64]) -> Result<Self, MalformedRecord> {
        if record.len() != RECORD_LEN {
            return Err(MalformedRecord {
                expected: RECORD_LEN,
                actual: record.len(),
            });
        }

        Ok(Self {
            position: Point::new(record[1], record[0]),
            heart_rate: record[2] as i64,
        })
    }

    /// The sample's 2D position (x = longitude, y = latitude).
    pub fn position(&self) -> Point<f64> {
        self.position
    }

    pub fn latitude(&self) -> f64 {
        self.position.y()
    }

    pub fn longitude(&self) -> f64 {
        self.position.x()
    }

    /// Heart rate in beats per minute.
    pub fn heart_rate(&self) -> i64 {
        self.heart_rate
    }
}

/// A raw record with the wrong number of values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("record has wrong number of values: expected {expected}, got {actual} instead")]
pub struct MalformedRecord {
    pub expected: usize,
    pub actual: usize,
}
