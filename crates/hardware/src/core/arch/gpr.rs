//! General-Purpose Register File.
//!
//! This module implements the general-purpose register file. It performs the following:
//! 1. **Storage:** Maintains 32 registers of 32 bits each (`$0`-`$31`).
//! 2. **Access:** Reads and writes by 5-bit register index.
//! 3. **Debugging:** Renders the complete register state for reports.
//!
//! Register `$0` is an ordinary register here: writes to it are kept.

use std::fmt;

use crate::common::constants::NUM_REGISTERS;
use crate::isa::disasm::reg_name;

/// Mask reducing any index to the 32-register space.
const INDEX_MASK: usize = NUM_REGISTERS - 1;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register. The index is taken modulo 32.
    #[inline]
    pub const fn read(&self, idx: usize) -> u32 {
        self.regs[idx & INDEX_MASK]
    }

    /// Reads two registers at once, as the register-read stage does.
    #[inline]
    pub const fn read_pair(&self, a: usize, b: usize) -> (u32, u32) {
        (self.read(a), self.read(b))
    }

    /// Writes a register. The index is taken modulo 32.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx & INDEX_MASK] = val;
    }

    /// Returns all register values in index order.
    pub const fn as_slice(&self) -> &[u32; NUM_REGISTERS] {
        &self.regs
    }
}

impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGISTERS).step_by(2) {
            writeln!(
                f,
                "${:<2} {:<4} = {:#010x}    ${:<2} {:<4} = {:#010x}",
                i,
                reg_name(i),
                self.regs[i],
                i + 1,
                reg_name(i + 1),
                self.regs[i + 1]
            )?;
        }
        Ok(())
    }
}
