//! Instruction Fetch (IF) Stage.
//!
//! Reads the instruction word at the current program counter. The PC must be
//! word-aligned; fetches are not checked against the data access limit, only
//! against the allocated memory.

use tracing::debug;

use crate::common::Halt;
use crate::common::constants::WORD_BYTES;
use crate::soc::Memory;

/// Fetches the instruction word at `pc`.
///
/// # Errors
///
/// - [`Halt::MisalignedFetch`] if `pc` is not a multiple of 4.
/// - [`Halt::FetchOutOfBounds`] if `pc` lies past the end of memory.
pub fn fetch_stage(pc: u32, memory: &Memory) -> Result<u32, Halt> {
    if pc % WORD_BYTES != 0 {
        debug!(pc, "IF  misaligned program counter");
        return Err(Halt::MisalignedFetch { pc });
    }
    memory.read_addr(pc).ok_or_else(|| {
        debug!(pc, "IF  program counter outside memory");
        Halt::FetchOutOfBounds { pc }
    })
}
