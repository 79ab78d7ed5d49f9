//! Program Image Loader.
//!
//! This module reads program images in the plain hex-word text format. It performs:
//! 1. **Parsing:** One 32-bit hexadecimal word per line, with an optional `0x` prefix.
//! 2. **Comments:** Everything after `#` on a line is ignored, as are blank lines.
//! 3. **File Access:** Reading an image from disk.
//!
//! ```text
//! # sum two registers
//! 20010005    # addi $at, $zero, 5
//! 0x20020007  # addi $v0, $zero, 7
//! 00221820    # add  $v1, $at, $v0
//! ```

use std::fs;
use std::path::Path;

use crate::common::LoadError;

/// Start of a comment on a program line.
const COMMENT_CHAR: char = '#';

/// Parses a program image from text.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] with the one-based line number of the first
/// line that is not blank, a comment, or a hexadecimal 32-bit word.
pub fn parse_program(text: &str) -> Result<Vec<u32>, LoadError> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw
            .split_once(COMMENT_CHAR)
            .map_or(raw, |(code, _)| code)
            .trim();
        if line.is_empty() {
            continue;
        }
        let digits = line
            .strip_prefix("0x")
            .or_else(|| line.strip_prefix("0X"))
            .unwrap_or(line);
        let word = u32::from_str_radix(digits, 16).map_err(|_| LoadError::Parse {
            line: idx + 1,
            text: line.to_owned(),
        })?;
        words.push(word);
    }
    Ok(words)
}

/// Reads and parses a program image from disk.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or any error from
/// [`parse_program`].
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<u32>, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_program(&text)
}
