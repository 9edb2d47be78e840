#![forbid(unsafe_code)]

//! Concurrent harvester mirroring a SWAPI-style people catalog into `SQLite`.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod persistence;
pub mod pipeline;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
