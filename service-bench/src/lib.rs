#![cfg_attr(not(test), deny(clippy::unwrap_used))]

pub mod baseline;
pub mod bench;
pub mod config;
pub mod display;
pub mod error;
pub mod generator;
pub mod interactive;
pub mod service;

pub use config::{BenchConfig, ConfigError, RunMode};
pub use error::HarnessError;
pub use service::{Service, ShortStr};
