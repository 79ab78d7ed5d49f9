//! Word-Addressed System Memory.
//!
//! This module implements the flat memory array shared by instruction fetch
//! and data accesses. It provides:
//! 1. **Storage:** A vector of 32-bit cells addressed by byte address divided by 4.
//! 2. **Access Limit:** The byte-address ceiling enforced on loads and stores.
//! 3. **Loading:** Placement of program images at a word-aligned address.
//!
//! The access limit is independent of the allocated size so that the
//! classic `0xFFFF` ceiling can be kept for a 64 KiB array, but it may never
//! reach past the allocation.

use std::fmt;

use crate::common::constants::{WORD_BYTES, WORD_SHIFT};
use crate::common::error::{ConfigError, LoadError};

/// System Memory structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<u32>,
    access_limit: u32,
}

impl Memory {
    /// Allocates `words` zeroed cells with the given data-access ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyMemory`] for a zero-sized memory and
    /// [`ConfigError::AccessLimitTooLarge`] when `access_limit` exceeds the
    /// allocated size in bytes.
    pub fn new(words: usize, access_limit: u32) -> Result<Self, ConfigError> {
        if words == 0 {
            return Err(ConfigError::EmptyMemory);
        }
        let bytes = words as u64 * u64::from(WORD_BYTES);
        if u64::from(access_limit) > bytes {
            return Err(ConfigError::AccessLimitTooLarge {
                limit: access_limit,
                bytes,
            });
        }
        Ok(Self {
            cells: vec![0; words],
            access_limit,
        })
    }

    /// Exclusive ceiling on byte addresses for loads and stores.
    pub const fn access_limit(&self) -> u32 {
        self.access_limit
    }

    /// Number of allocated words.
    pub fn len_words(&self) -> usize {
        self.cells.len()
    }

    /// Converts a byte address to a word index.
    #[inline]
    pub const fn word_index(addr: u32) -> usize {
        (addr >> WORD_SHIFT) as usize
    }

    /// Reads the cell at a word index, or `None` past the end of memory.
    #[inline]
    pub fn word(&self, index: usize) -> Option<u32> {
        self.cells.get(index).copied()
    }

    /// Mutable access to the cell at a word index, or `None` past the end of memory.
    #[inline]
    pub fn word_mut(&mut self, index: usize) -> Option<&mut u32> {
        self.cells.get_mut(index)
    }

    /// Reads the word at a byte address without alignment or limit checks.
    pub fn read_addr(&self, addr: u32) -> Option<u32> {
        self.word(Self::word_index(addr))
    }

    /// Copies a program image into memory starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Misaligned`] if `addr` is not word-aligned and
    /// [`LoadError::TooLarge`] if the image runs past the end of memory.
    pub fn load_words(&mut self, addr: u32, words: &[u32]) -> Result<(), LoadError> {
        if addr % WORD_BYTES != 0 {
            return Err(LoadError::Misaligned { load_addr: addr });
        }
        let start = Self::word_index(addr);
        let Some(dest) = start
            .checked_add(words.len())
            .and_then(|end| self.cells.get_mut(start..end))
        else {
            return Err(LoadError::TooLarge {
                words: words.len(),
                load_addr: addr,
            });
        };
        dest.copy_from_slice(words);
        Ok(())
    }

    /// Iterates over `(byte address, value)` for every non-zero cell.
    pub fn non_zero(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(i, &v)| ((i as u32) << WORD_SHIFT, v))
    }
}

impl fmt::Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (addr, value) in self.non_zero() {
            writeln!(f, "{addr:#06x}: {value:#010x}")?;
        }
        Ok(())
    }
}
