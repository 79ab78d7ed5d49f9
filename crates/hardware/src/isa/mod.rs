//! Instruction Set Architecture definitions.
//!
//! This module covers the reduced MIPS instruction subset understood by the
//! simulator. It provides:
//! 1. **Encoding Constants:** Major opcodes and R-type function codes.
//! 2. **Field Extraction:** Partitioning of a raw word into its field views, and sign extension.
//! 3. **Disassembly:** Mnemonic rendering for traces and diagnostics.

/// Opcode-to-instruction-class table.
pub mod class;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// R-type function codes.
pub mod funct;

/// Instruction field extraction and sign extension.
pub mod instruction;

/// Major opcodes.
pub mod opcodes;

pub use class::InstrClass;
pub use instruction::{Fields, InstructionBits, partition, sign_extend};
