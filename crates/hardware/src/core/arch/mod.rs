//! Architectural state components.
//!
//! The only architectural state besides the program counter and memory is the
//! general-purpose register file.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::Gpr;
