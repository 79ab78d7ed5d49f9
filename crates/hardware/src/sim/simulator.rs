//! Simulator: the driving loop around the CPU.
//!
//! Owns a [`Cpu`] built from a [`Config`], places program images in memory,
//! and repeats single-instruction steps until a halt or the cycle budget.

use std::path::Path;

use tracing::{debug, info};

use crate::common::{ConfigError, Halt, LoadError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::Retired;
use crate::sim::loader;

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// An instruction raised a halting condition.
    Halted(Halt),
    /// The configured cycle budget ran out first.
    CycleLimit,
}

/// Result of [`Simulator::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Cycles executed during this run, including a halting one.
    pub cycles: u64,
    /// Why the run stopped.
    pub stop: StopReason,
}

/// Top-level simulator: CPU architectural state plus run settings.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, PC, stats).
    pub cpu: Cpu,
    load_addr: u32,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a new simulator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            cpu: Cpu::new(config)?,
            load_addr: config.memory.load_addr,
            max_cycles: config.general.max_cycles,
        })
    }

    /// Copies a program into memory at the configured load address.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the program runs past the end of memory.
    pub fn load_program(&mut self, words: &[u32]) -> Result<(), LoadError> {
        self.cpu.memory.load_words(self.load_addr, words)?;
        debug!(
            words = words.len(),
            load_addr = self.load_addr,
            "program loaded"
        );
        Ok(())
    }

    /// Reads a program image from disk and loads it. Returns the number of words loaded.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the file cannot be read, parsed, or placed.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let words = loader::load_program_file(path)?;
        self.load_program(&words)?;
        Ok(words.len())
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// Returns the [`Halt`] raised by the instruction, if any.
    pub fn tick(&mut self) -> Result<Retired, Halt> {
        self.cpu.step()
    }

    /// Runs until a halt or until the cycle budget is exhausted.
    pub fn run(&mut self) -> RunOutcome {
        let mut cycles = 0;
        loop {
            if self.max_cycles.is_some_and(|max| cycles >= max) {
                info!(cycles, pc = self.cpu.pc, "cycle limit reached");
                return RunOutcome {
                    cycles,
                    stop: StopReason::CycleLimit,
                };
            }
            cycles += 1;
            if let Err(halt) = self.cpu.step() {
                info!(cycles, pc = self.cpu.pc, %halt, "halted");
                return RunOutcome {
                    cycles,
                    stop: StopReason::Halted(halt),
                };
            }
        }
    }
}
