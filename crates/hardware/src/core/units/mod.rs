//! Execution units and functional components.
//!
//! The single-cycle datapath has exactly one execution unit, the integer ALU.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
