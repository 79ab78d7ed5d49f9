//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Word geometry, register file size, and default memory layout.
//! 2. **Error Handling:** Halting conditions and configuration/loading failures.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and halting conditions.
pub mod error;

pub use error::{ConfigError, Halt, LoadError};
