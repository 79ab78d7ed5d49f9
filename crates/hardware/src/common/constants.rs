//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Word Constants:** Word size and alignment for fetches and data accesses.
//! 2. **Register Constants:** Register file geometry and conventional initial values.
//! 3. **Memory Constants:** Default memory geometry and program load address.

/// Size of one instruction or data word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Number of bits to shift a byte address right to obtain a word index.
pub const WORD_SHIFT: u32 = 2;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Default number of 32-bit memory cells (64 KiB).
pub const DEFAULT_MEMORY_WORDS: usize = 0x4000;

/// Default exclusive ceiling on byte addresses for loads and stores.
///
/// Note that this is `0xFFFF`, not `0x10000`: the last word of a 64 KiB
/// memory (`0xFFFC`) is still reachable, and the address `0xFFFF` itself is
/// rejected.
pub const DEFAULT_ACCESS_LIMIT: u32 = 0xFFFF;

/// Default byte address at which program images are loaded and execution starts.
pub const DEFAULT_LOAD_ADDR: u32 = 0x4000;

/// Index of the global pointer register (`$gp`).
pub const REG_GP: usize = 28;

/// Index of the stack pointer register (`$sp`).
pub const REG_SP: usize = 29;

/// Default initial value of `$gp`.
pub const DEFAULT_GP: u32 = 0xC000;

/// Default initial value of `$sp`.
pub const DEFAULT_SP: u32 = 0xFFFC;

/// Mask preserving the segment bits of the PC during a jump.
pub const PC_SEGMENT_MASK: u32 = 0xF000_0000;
