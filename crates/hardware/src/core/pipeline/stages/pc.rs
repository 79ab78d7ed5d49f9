//! Program-Counter Update.
//!
//! Advances the PC by one word, then applies a taken branch and finally a jump.

use crate::common::constants::{PC_SEGMENT_MASK, WORD_BYTES, WORD_SHIFT};
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::Fields;

/// Computes the next program counter.
///
/// A taken branch adds `imm << 2` to `pc + 4`. A jump replaces the PC with
/// `target << 2`, keeping the top four bits of the already-advanced PC; since it
/// is applied last it wins if both were ever set. All arithmetic wraps.
pub const fn pc_update(
    pc: u32,
    control: &ControlSignals,
    fields: &Fields,
    imm: u32,
    zero: bool,
) -> u32 {
    let mut next = pc.wrapping_add(WORD_BYTES);
    if control.branch && zero {
        next = next.wrapping_add(imm << WORD_SHIFT);
    }
    if control.jump {
        next = (fields.target << WORD_SHIFT) | (next & PC_SEGMENT_MASK);
    }
    next
}
