// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Heart-rate intensity classification.

use crate::models::Sample;
use serde::Serialize;

/// Number of intensity bands, and thus required palette entries.
const PALETTE_SIZE: usize = 4;

/// Classifies workout samples into intensity colors.
///
/// The observed heart-rate range is partitioned into four equal-width
/// integer bands and each sample is assigned the palette color of its band.
/// Colors are caller-supplied in ascending intensity order; the crate never
/// defines concrete colors, since color choice is a presentation concern.
#[derive(Debug, Clone)]
pub struct IntensityClassifier<C> {
    palette: Vec<C>,
}

impl<C: Clone> IntensityClassifier<C> {
    /// Create a classifier with a 4-entry palette in ascending intensity.
    ///
    /// The palette size is checked at classification time.
    pub fn new(palette: Vec<C>) -> Self {
        Self { palette }
    }

    /// Assign each sample a palette color from its heart-rate band.
    ///
    /// The output is index-aligned with `samples` and is a pure function of
    /// it: repeated calls yield identical sequences. The band width is
    /// `(max - min) / 4` in integer division; when the observed range spans
    /// fewer than 4 units the width is 0, the first three bands are empty
    /// and the closed last band absorbs every value. That degenerate case
    /// is kept as-is.
    pub fn classify(&self, samples: &[Sample]) -> Result<Vec<C>, ClassifyError> {
        let (min_heart_rate, max_heart_rate) =
            heart_rate_bounds(samples).ok_or(ClassifyError::EmptyInput)?;

        if self.palette.len() != PALETTE_SIZE {
            return Err(ClassifyError::InvalidPalette {
                expected: PALETTE_SIZE,
                actual: self.palette.len(),
            });
        }

        let step = (max_heart_rate - min_heart_rate) / PALETTE_SIZE as i64;

        samples
            .iter()
            .map(|sample| {
                let heart_rate = sample.heart_rate();
                let band = if (min_heart_rate..min_heart_rate + step).contains(&heart_rate) {
                    0
                } else if (min_heart_rate + step..min_heart_rate + 2 * step).contains(&heart_rate)
                {
                    1
                } else if (min_heart_rate + 2 * step..min_heart_rate + 3 * step)
                    .contains(&heart_rate)
                {
                    2
                } else if (min_heart_rate + 3 * step..=max_heart_rate).contains(&heart_rate) {
                    3
                } else {
                    // Unreachable for values between min and max, but a
                    // bucketing bug must fail loud rather than pick a
                    // default color.
                    return Err(ClassifyError::Unclassifiable { heart_rate });
                };
                Ok(self.palette[band].clone())
            })
            .collect()
    }

    /// Classify and pair each sample with its position for rendering.
    pub fn classify_route(&self, samples: &[Sample]) -> Result<Vec<RoutePoint<C>>, ClassifyError> {
        let colors = self.classify(samples)?;

        Ok(samples
            .iter()
            .zip(colors)
            .map(|(sample, color)| RoutePoint {
                latitude: sample.latitude(),
                longitude: sample.longitude(),
                heart_rate: sample.heart_rate(),
                color,
            })
            .collect())
    }
}

/// Lowest and highest heart rate over the samples, or `None` when empty.
///
/// Consumers use this pair to label intensity legends.
pub fn heart_rate_bounds(samples: &[Sample]) -> Option<(i64, i64)> {
    let min = samples.iter().map(Sample::heart_rate).min()?;
    let max = samples.iter().map(Sample::heart_rate).max()?;
    Some((min, max))
}

/// One renderer-facing route point: position, heart rate and its color.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePoint<C> {
    pub latitude: f64,
    pub longitude: f64,
    pub heart_rate: i64,
    pub color: C,
}

/// Errors from intensity classification.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("Cannot classify an empty sample sequence")]
    EmptyInput,

    #[error("Expected {expected} palette colors, got {actual} instead")]
    InvalidPalette { expected: usize, actual: usize },

    #[error("Heart rate {heart_rate} falls outside every intensity band")]
    Unclassifiable { heart_rate: i64 },
}
