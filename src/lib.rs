// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! BPM-Route: heart-rate colored workout routes
//!
//! This crate decodes recorded workout samples (position + heart rate) from
//! a compact positional JSON format, derives a session duration, and
//! classifies each sample into one of four intensity colors for route
//! rendering. Map drawing itself is left to the consumer.

pub mod config;
pub mod models;
pub mod services;
pub mod time_utils;
