//! Simulation driver and program loading.
//!
//! Provides the loop that repeatedly steps the CPU and the loader for
//! hex-word program images.

/// Hex-word program image parsing.
pub mod loader;

/// Driving loop around the CPU.
pub mod simulator;

pub use simulator::{RunOutcome, Simulator, StopReason};
