//! Core processor implementation.
//!
//! This module contains the CPU, its datapath stages, the architectural
//! register file, and the ALU.

/// Architectural state (register file).
pub mod arch;

/// CPU state and single-instruction execution.
pub mod cpu;

/// Datapath signals and stages.
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
