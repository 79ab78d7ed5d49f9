//! MIPS single-cycle datapath simulator library.
//!
//! This crate executes a reduced MIPS instruction set one instruction at a
//! time against an explicit register file and word-addressed memory:
//! 1. **Core:** ALU, control decoder, and the fetch/decode/execute/memory/writeback/PC stages.
//! 2. **ISA:** Opcode and funct tables, field partitioning, sign extension, disassembly.
//! 3. **SoC:** Flat word-addressed memory with a data-access ceiling.
//! 4. **Simulation:** Program loader, configuration, driving loop, and statistics.

/// Common types and constants (halting conditions, word geometry).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// CPU core (datapath stages, register file, ALU).
pub mod core;
/// Instruction set (opcodes, funct codes, field extraction, disassembly).
pub mod isa;
/// Program loader and driving loop.
pub mod sim;
/// System components (memory).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Halting condition raised by a datapath stage.
pub use crate::common::Halt;
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds PC, registers, memory, and stats.
pub use crate::core::Cpu;
/// Driving loop; construct with `Simulator::new`.
pub use crate::sim::Simulator;
