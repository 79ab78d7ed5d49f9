//! MIPS Major Opcodes.
//!
//! Defines the 6-bit primary opcodes (bits 31-26) of the supported instruction subset.

/// Register-register arithmetic (ADD, SUB, AND, OR, SLT, SLTU); operation selected by funct.
pub const OP_RTYPE: u32 = 0x00;

/// Unconditional jump (J).
pub const OP_J: u32 = 0x02;

/// Branch if equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Add immediate (ADDI).
pub const OP_ADDI: u32 = 0x08;

/// Set less than immediate, signed (SLTI).
pub const OP_SLTI: u32 = 0x0A;

/// Set less than immediate, unsigned (SLTIU).
pub const OP_SLTIU: u32 = 0x0B;

/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0x0F;

/// Load word (LW).
pub const OP_LW: u32 = 0x23;

/// Store word (SW).
pub const OP_SW: u32 = 0x2B;
