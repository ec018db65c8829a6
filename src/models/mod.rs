// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for workout sessions.

pub mod sample;
pub mod workout;

pub use sample::{MalformedRecord, Sample};
pub use workout::{RouteError, Workout, WorkoutKind};
