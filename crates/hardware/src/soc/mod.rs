//! System-level components outside the processor core.
//!
//! The simulated system has a single device: flat word-addressed memory.

/// Word-addressed memory array.
pub mod memory;

pub use memory::Memory;
