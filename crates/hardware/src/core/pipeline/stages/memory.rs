//! Memory Access (MEM) Stage.
//!
//! Performs at most one word load or store at the ALU result address. Both
//! kinds of access require a word-aligned address strictly below the memory's
//! access limit.

use tracing::debug;

use crate::common::Halt;
use crate::common::constants::WORD_BYTES;
use crate::core::pipeline::signals::ControlSignals;
use crate::soc::Memory;

/// Checks a data address and converts it to a word index.
fn data_index(addr: u32, memory: &Memory) -> Result<usize, Halt> {
    if addr % WORD_BYTES != 0 || addr >= memory.access_limit() {
        debug!(addr, limit = memory.access_limit(), "MEM bad data address");
        return Err(Halt::MemoryAccess { addr });
    }
    Ok(Memory::word_index(addr))
}

/// Executes the memory stage.
///
/// Returns the loaded word for loads and `None` otherwise. Stores write
/// `store_data` in place. When neither `mem_read` nor `mem_write` is set the
/// address is not checked at all.
///
/// # Errors
///
/// Returns [`Halt::MemoryAccess`] for a misaligned address or one at or above
/// the access limit.
pub fn mem_stage(
    control: &ControlSignals,
    addr: u32,
    store_data: u32,
    memory: &mut Memory,
) -> Result<Option<u32>, Halt> {
    let mut loaded = None;
    if control.mem_read {
        let index = data_index(addr, memory)?;
        loaded = Some(memory.word(index).ok_or(Halt::MemoryAccess { addr })?);
    }
    if control.mem_write {
        let index = data_index(addr, memory)?;
        let cell = memory.word_mut(index).ok_or(Halt::MemoryAccess { addr })?;
        *cell = store_data;
    }
    Ok(loaded)
}
