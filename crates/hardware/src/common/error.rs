//! Halting conditions and setup errors.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Halting Conditions:** Every way a single instruction can stop execution.
//! 2. **Configuration Errors:** Invalid memory geometry or malformed configuration input.
//! 3. **Loading Errors:** Failures while reading or parsing a program image.
//!
//! A [`Halt`] is the normal way a program ends: it is reported to the driving
//! loop as a value, never by unwinding. Architectural state already mutated
//! earlier in the same instruction is left as-is.

use thiserror::Error;

/// A detected invalid state that stops instruction processing.
///
/// Each variant is raised by exactly one stage of the datapath.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Halt {
    /// The program counter was not word-aligned on entry to fetch.
    #[error("misaligned fetch address {pc:#010x}")]
    MisalignedFetch {
        /// The offending program counter.
        pc: u32,
    },

    /// The program counter pointed past the end of allocated memory.
    #[error("fetch address {pc:#010x} is outside allocated memory")]
    FetchOutOfBounds {
        /// The offending program counter.
        pc: u32,
    },

    /// The opcode is not in the supported instruction set.
    #[error("illegal opcode {opcode:#04x} in instruction {word:#010x}")]
    IllegalOpcode {
        /// The 6-bit opcode field.
        opcode: u32,
        /// The full instruction word.
        word: u32,
    },

    /// An R-type instruction carried an unsupported function code.
    #[error("illegal function code {funct:#04x} in instruction {word:#010x}")]
    IllegalFunct {
        /// The 6-bit function field.
        funct: u32,
        /// The full instruction word.
        word: u32,
    },

    /// A load or store address was misaligned or at/above the access limit.
    #[error("misaligned or out-of-range memory access at {addr:#010x}")]
    MemoryAccess {
        /// The effective byte address computed by the ALU.
        addr: u32,
    },
}

/// Invalid simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text could not be parsed.
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Memory must hold at least one word.
    #[error("memory must contain at least one word")]
    EmptyMemory,

    /// The access limit reaches past the allocated memory.
    #[error("access limit {limit:#x} exceeds allocated memory of {bytes:#x} bytes")]
    AccessLimitTooLarge {
        /// Configured byte-address ceiling.
        limit: u32,
        /// Allocated memory size in bytes.
        bytes: u64,
    },

    /// A configured address is not a multiple of four.
    #[error("{what} {addr:#x} is not word-aligned")]
    Misaligned {
        /// Which setting was misaligned.
        what: &'static str,
        /// The offending value.
        addr: u32,
    },

    /// An initial register assignment named a register that does not exist.
    #[error("register index {0} is out of range (0-31)")]
    BadRegister(usize),
}

/// Failure to read or place a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program: {0}")]
    Io(#[from] std::io::Error),

    /// A line was neither blank, a comment, nor a hexadecimal word.
    #[error("line {line}: expected a hexadecimal word, found `{text}`")]
    Parse {
        /// One-based line number.
        line: usize,
        /// The offending text with comments stripped.
        text: String,
    },

    /// The load address is not a multiple of four.
    #[error("load address {load_addr:#x} is not word-aligned")]
    Misaligned {
        /// Requested load address.
        load_addr: u32,
    },

    /// The program does not fit between the load address and the end of memory.
    #[error("program of {words} words does not fit at {load_addr:#x}")]
    TooLarge {
        /// Number of words in the program.
        words: usize,
        /// Requested load address.
        load_addr: u32,
    },
}
