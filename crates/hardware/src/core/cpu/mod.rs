//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the complete
//! architectural state. It coordinates the following:
//! 1. **State Management:** Program counter and general-purpose registers.
//! 2. **Memory:** The word-addressed memory array shared by fetch and data accesses.
//! 3. **Statistics:** Instruction-mix counters updated on every step.
//!
//! Each `Cpu` owns its state outright, so independent instances never share
//! anything and can run on separate threads.

/// Single-instruction execution through the datapath stages.
pub mod execution;

use std::fmt;

use crate::common::ConfigError;
use crate::config::Config;
use crate::core::arch::Gpr;
use crate::isa::InstrClass;
use crate::soc::Memory;
use crate::stats::SimStats;

pub use execution::Retired;

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Program counter (byte address).
    pub pc: u32,
    /// Main memory.
    pub memory: Memory,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Builds a CPU from explicitly provided state.
    pub fn with_state(pc: u32, regs: Gpr, memory: Memory) -> Self {
        Self {
            regs,
            pc,
            memory,
            stats: SimStats::default(),
        }
    }

    /// Allocates memory and initializes registers and the PC from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let memory = Memory::new(config.memory.words, config.memory.access_limit)?;
        let mut regs = Gpr::new();
        for (&idx, &val) in &config.registers {
            regs.write(idx, val);
        }
        Ok(Self::with_state(config.general.start_pc, regs, memory))
    }

    /// Returns how many instructions of `class` have retired.
    pub fn retired_of(&self, class: InstrClass) -> u64 {
        self.stats.count(class)
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PC = {:#010x}", self.pc)?;
        writeln!(f)?;
        writeln!(f, "Registers:")?;
        write!(f, "{}", self.regs)?;
        writeln!(f)?;
        writeln!(f, "Memory (non-zero words):")?;
        write!(f, "{}", self.memory)
    }
}
