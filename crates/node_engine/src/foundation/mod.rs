//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Collections and stable handle types
//! - Time management
//! - Logging utilities

pub mod collections;
pub mod logging;
pub mod time;
