// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - sample storage and intensity classification.

pub mod classifier;
pub mod repository;

pub use classifier::{heart_rate_bounds, ClassifyError, IntensityClassifier, RoutePoint};
pub use repository::{RepositoryError, SampleRepository};
