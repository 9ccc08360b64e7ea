//! OlapCore - segment-level query operators for a columnar analytics engine
//!
//! This crate provides the pull-based operator abstraction over immutable
//! storage segments (schema resolution, result blocks, execution statistics,
//! the short-circuit empty selection operator) and the partial-aggregate
//! reducer used by result caches to extrapolate aggregates over a window.

pub mod config;
pub mod core;
pub mod query;
pub mod storage;
pub mod utils;
