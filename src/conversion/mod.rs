//! Contact conversion module
//!
//! This module contains the core conversion engine, configuration, and
//! statistics.

pub mod config;
pub mod engine;
pub mod stats;

pub use config::{ConversionConfig, OutputEncoding};
pub use engine::{convert_records, ContactConverter};
pub use stats::{ConversionReport, ConversionStatistics};
