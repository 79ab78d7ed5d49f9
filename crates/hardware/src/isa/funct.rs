//! MIPS R-type Function Codes.
//!
//! Defines the 6-bit function codes (bits 5-0) that select the ALU operation
//! for instructions with opcode [`OP_RTYPE`](super::opcodes::OP_RTYPE).

/// Add (ADD).
pub const FUNCT_ADD: u32 = 0x20;

/// Subtract (SUB).
pub const FUNCT_SUB: u32 = 0x22;

/// Logical AND (AND).
pub const FUNCT_AND: u32 = 0x24;

/// Logical OR (OR).
pub const FUNCT_OR: u32 = 0x25;

/// Set less than, signed (SLT).
pub const FUNCT_SLT: u32 = 0x2A;

/// Set less than, unsigned (SLTU).
pub const FUNCT_SLTU: u32 = 0x2B;
