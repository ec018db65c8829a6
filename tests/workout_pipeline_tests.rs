// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end pipeline smoke tests over the committed demo dataset.
//!
//! These exercise the full load → decode → duration → classify chain the
//! way a renderer consumes it. Detailed per-stage behavior is covered in
//! repository_tests.rs and classifier_tests.rs.

use bpm_route::config::Config;
use bpm_route::models::{Workout, WorkoutKind};
use bpm_route::services::{heart_rate_bounds, IntensityClassifier, SampleRepository};
use bpm_route::time_utils::{format_duration, format_duration_spoken};
use chrono::{TimeZone, Utc};

const DEMO_DATASET: &str = "data/latitude_longitude_heartrate.json";

fn load_demo_workout() -> Workout {
    let samples = SampleRepository::with_file(DEMO_DATASET)
        .list()
        .expect("Failed to decode demo dataset - is data/ committed?")
        .expect("Demo dataset file missing");

    Workout {
        title: "Outdoor Running 👟".to_string(),
        subtitle: "Stretch".to_string(),
        kind: WorkoutKind::Running,
        start_time: Utc.with_ymd_and_hms(2022, 8, 29, 7, 30, 0).unwrap(),
        end_time: None,
        samples,
    }
}

#[test]
fn test_demo_dataset_loads() {
    let workout = load_demo_workout();

    assert_eq!(workout.samples.len(), 30);
    assert_eq!(workout.start_point().unwrap().latitude(), 45.188529);
    assert_eq!(workout.end_point().unwrap().latitude(), 45.193952);
    assert_eq!(workout.start_point().unwrap().heart_rate(), 96);
}

#[test]
fn test_demo_duration_estimated_and_formatted() {
    let workout = load_demo_workout();
    let config = Config::default();

    // 30 samples at the default 5/min is 6 whole minutes.
    let duration = workout.duration(config.samples_per_minute);
    assert_eq!(duration, 360.0);
    assert_eq!(format_duration(duration), "00 : 06 : 00");
    assert_eq!(format_duration_spoken(duration), "6 minutes");
}

#[test]
fn test_demo_route_classifies_every_sample() {
    let workout = load_demo_workout();
    let classifier = IntensityClassifier::new(vec!["green", "yellow", "orange", "red"]);

    let colors = classifier
        .classify(&workout.samples)
        .expect("Demo dataset should classify");
    assert_eq!(colors.len(), workout.samples.len());

    // The demo route ramps from warm-up to peak effort, so every band
    // should be represented.
    for palette_color in ["green", "yellow", "orange", "red"] {
        assert!(
            colors.contains(&palette_color),
            "Demo route should contain {} samples",
            palette_color
        );
    }

    // Pure function of its input: a second pass is identical.
    let again = classifier.classify(&workout.samples).unwrap();
    assert_eq!(colors, again);
}

#[test]
fn test_demo_route_points_align_with_samples() {
    let workout = load_demo_workout();
    let classifier = IntensityClassifier::new(vec!["green", "yellow", "orange", "red"]);

    let points = classifier.classify_route(&workout.samples).unwrap();
    assert_eq!(points.len(), workout.samples.len());

    for (point, sample) in points.iter().zip(&workout.samples) {
        assert_eq!(point.latitude, sample.latitude());
        assert_eq!(point.longitude, sample.longitude());
        assert_eq!(point.heart_rate, sample.heart_rate());
    }
}

#[test]
fn test_demo_legend_bounds() {
    let workout = load_demo_workout();
    let (min, max) = heart_rate_bounds(&workout.samples).expect("Demo dataset is non-empty");

    assert_eq!(min, 96);
    assert_eq!(max, 172);
}

#[test]
fn test_demo_route_encodes_as_polyline() {
    let workout = load_demo_workout();

    let route = workout.route();
    assert_eq!(route.0.len(), workout.samples.len());

    let encoded = workout
        .encoded_polyline()
        .expect("Demo route should encode");
    assert!(!encoded.is_empty());
}
