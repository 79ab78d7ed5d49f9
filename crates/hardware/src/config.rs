//! Configuration system for the simulator.
//!
//! This module defines all configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** The classic 64 KiB memory with a `0xFFFF` data-access ceiling,
//!    programs loaded and started at `0x4000`, and `$gp`/`$sp` preset.
//! 2. **Structures:** General, memory, and initial-register sections.
//! 3. **Validation:** Rejection of geometry that would let an access escape memory.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or use `Config::default()`.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::common::ConfigError;
use crate::common::constants::{
    DEFAULT_ACCESS_LIMIT, DEFAULT_GP, DEFAULT_LOAD_ADDR, DEFAULT_MEMORY_WORDS, DEFAULT_SP,
    NUM_REGISTERS, REG_GP, REG_SP, WORD_BYTES,
};

/// Root configuration structure.
///
/// Every section is optional in JSON and falls back to its defaults.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "max_cycles": 1000 },
///     "memory": { "words": 8192, "access_limit": 32768 },
///     "registers": { "8": 42 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_cycles, Some(1000));
/// assert_eq!(config.general.start_pc, 0x4000);
/// assert_eq!(config.memory.access_limit, 0x8000);
/// assert_eq!(config.registers.get(&8), Some(&42));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Initial register values, keyed by register index
    #[serde(default = "default_registers")]
    pub registers: BTreeMap<usize, u32>,
}

/// Conventional initial register values: `$gp` and `$sp`.
fn default_registers() -> BTreeMap<usize, u32> {
    BTreeMap::from([(REG_GP, DEFAULT_GP), (REG_SP, DEFAULT_SP)])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            memory: MemoryConfig::default(),
            registers: default_registers(),
        }
    }
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or any error from
    /// [`Config::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for geometry the simulator cannot honour.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyMemory`] when `memory.words` is zero.
    /// - [`ConfigError::AccessLimitTooLarge`] when the access limit passes the end of memory.
    /// - [`ConfigError::Misaligned`] for a start PC or load address that is not a multiple of 4.
    /// - [`ConfigError::BadRegister`] for an initial value aimed at a nonexistent register.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory.words == 0 {
            return Err(ConfigError::EmptyMemory);
        }
        let bytes = self.memory.words as u64 * u64::from(WORD_BYTES);
        if u64::from(self.memory.access_limit) > bytes {
            return Err(ConfigError::AccessLimitTooLarge {
                limit: self.memory.access_limit,
                bytes,
            });
        }
        for (what, addr) in [
            ("start_pc", self.general.start_pc),
            ("load_addr", self.memory.load_addr),
        ] {
            if addr % WORD_BYTES != 0 {
                return Err(ConfigError::Misaligned { what, addr });
            }
        }
        if let Some(&idx) = self.registers.keys().find(|&&idx| idx >= NUM_REGISTERS) {
            return Err(ConfigError::BadRegister(idx));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Ask the driver to enable trace-level logging; the core emits its
    /// per-instruction `trace!` events regardless and the subscriber filters them
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value (defaults to the load address)
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Stop after this many cycles even if the program has not halted
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u32 {
        DEFAULT_LOAD_ADDR
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: DEFAULT_LOAD_ADDR,
            max_cycles: None,
        }
    }
}

/// Main memory geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Number of 32-bit words allocated
    #[serde(default = "MemoryConfig::default_words")]
    pub words: usize,

    /// Exclusive byte-address ceiling for loads and stores
    #[serde(default = "MemoryConfig::default_access_limit")]
    pub access_limit: u32,

    /// Byte address where program images are placed
    #[serde(default = "MemoryConfig::default_load_addr")]
    pub load_addr: u32,
}

impl MemoryConfig {
    const fn default_words() -> usize {
        DEFAULT_MEMORY_WORDS
    }

    const fn default_access_limit() -> u32 {
        DEFAULT_ACCESS_LIMIT
    }

    const fn default_load_addr() -> u32 {
        DEFAULT_LOAD_ADDR
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            words: DEFAULT_MEMORY_WORDS,
            access_limit: DEFAULT_ACCESS_LIMIT,
            load_addr: DEFAULT_LOAD_ADDR,
        }
    }
}
