//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod model_assertions;
pub mod snapshot_fixtures;
