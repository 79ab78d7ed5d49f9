//! ALU shift operations.
//!
//! The only shift in the subset is the fixed 16-bit left shift used by
//! `LUI`, which moves operand B into the upper half-word and ignores A.

use crate::core::pipeline::signals::AluOp;

/// Shift amount applied by [`AluOp::ShiftLeft16`].
const UPPER_HALF_SHIFT: u32 = 16;

/// Executes a shift operation.
///
/// Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, _a: u32, b: u32) -> u32 {
    match op {
        AluOp::ShiftLeft16 => b << UPPER_HALF_SHIFT,
        _ => 0,
    }
}
