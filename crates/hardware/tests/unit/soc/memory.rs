//! Memory Tests.
//!
//! Geometry validation, program placement, and the non-zero word listing.

use mipsim_core::common::{ConfigError, LoadError};
use mipsim_core::soc::Memory;
use pretty_assertions::assert_eq;

#[test]
fn zero_words_rejected() {
    assert!(matches!(Memory::new(0, 0), Err(ConfigError::EmptyMemory)));
}

#[test]
fn limit_may_equal_allocation() {
    let mem = Memory::new(0x10, 0x40).unwrap();
    assert_eq!(mem.access_limit(), 0x40);
    assert_eq!(mem.len_words(), 0x10);
}

#[test]
fn limit_past_allocation_rejected() {
    assert!(matches!(
        Memory::new(0x10, 0x41),
        Err(ConfigError::AccessLimitTooLarge {
            limit: 0x41,
            bytes: 0x40
        })
    ));
}

#[test]
fn load_places_words_consecutively() {
    let mut mem = Memory::new(0x4000, 0xFFFF).unwrap();
    mem.load_words(0x4000, &[1, 2, 3]).unwrap();
    assert_eq!(mem.read_addr(0x4000), Some(1));
    assert_eq!(mem.read_addr(0x4004), Some(2));
    assert_eq!(mem.read_addr(0x4008), Some(3));
    assert_eq!(mem.read_addr(0x400C), Some(0));
}

#[test]
fn load_filling_memory_exactly() {
    let mut mem = Memory::new(4, 16).unwrap();
    mem.load_words(8, &[7, 8]).unwrap();
    assert_eq!(mem.word(3), Some(8));
}

#[test]
fn load_past_end_rejected_and_memory_untouched() {
    let mut mem = Memory::new(4, 16).unwrap();
    let err = mem.load_words(8, &[1, 2, 3]).unwrap_err();
    assert!(matches!(
        err,
        LoadError::TooLarge {
            words: 3,
            load_addr: 8
        }
    ));
    assert_eq!(mem.non_zero().count(), 0);
}

#[test]
fn misaligned_load_rejected() {
    let mut mem = Memory::new(4, 16).unwrap();
    assert!(matches!(
        mem.load_words(2, &[1]),
        Err(LoadError::Misaligned { load_addr: 2 })
    ));
}

#[test]
fn word_access_past_end_is_none() {
    let mut mem = Memory::new(4, 16).unwrap();
    assert_eq!(mem.word(4), None);
    assert!(mem.word_mut(4).is_none());
    assert_eq!(mem.read_addr(0x10), None);
}

#[test]
fn non_zero_lists_byte_addresses() {
    let mut mem = Memory::new(8, 32).unwrap();
    mem.load_words(4, &[5, 0, 9]).unwrap();
    let listed: Vec<_> = mem.non_zero().collect();
    assert_eq!(listed, vec![(4, 5), (12, 9)]);
    assert_eq!(mem.to_string(), "0x0004: 0x00000005\n0x000c: 0x00000009\n");
}
