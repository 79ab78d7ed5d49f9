//! ALU logical and comparison operations.
//!
//! Implements AND, OR, NOT, and set-less-than (signed and unsigned).
//!
//! AND and OR are truth-valued: the result is `1` when the bitwise result is
//! non-zero and `0` otherwise, not the bitwise result itself. NOT is a full
//! bitwise complement of operand A.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic/comparison variant).
/// * `a`  - First operand.
/// * `b`  - Second operand (ignored by `Not`).
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        AluOp::Sltu => (a < b) as u32,
        AluOp::And => ((a & b) != 0) as u32,
        AluOp::Or => ((a | b) != 0) as u32,
        AluOp::Not => !a,
        _ => 0,
    }
}
