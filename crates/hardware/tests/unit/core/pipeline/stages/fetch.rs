//! Instruction Fetch Stage Tests.

use mipsim_core::common::Halt;
use mipsim_core::core::pipeline::stages::fetch_stage;
use mipsim_core::soc::Memory;

fn memory() -> Memory {
    Memory::new(16, 0x40).unwrap()
}

#[test]
fn misaligned_pc_halts() {
    let mem = memory();
    assert_eq!(fetch_stage(6, &mem), Err(Halt::MisalignedFetch { pc: 6 }));
    assert_eq!(fetch_stage(1, &mem), Err(Halt::MisalignedFetch { pc: 1 }));
}

#[test]
fn aligned_pc_reads_word_index() {
    let mut mem = memory();
    *mem.word_mut(2).unwrap() = 0xCAFE_BABE;
    assert_eq!(fetch_stage(8, &mem), Ok(0xCAFE_BABE));
}

#[test]
fn fetch_is_not_limited_by_access_limit() {
    let mut mem = Memory::new(16, 0x10).unwrap();
    *mem.word_mut(15).unwrap() = 0x1234_5678;
    assert_eq!(fetch_stage(0x3C, &mem), Ok(0x1234_5678));
}

#[test]
fn fetch_past_memory_halts() {
    let mem = memory();
    assert_eq!(
        fetch_stage(0x40, &mem),
        Err(Halt::FetchOutOfBounds { pc: 0x40 })
    );
    assert_eq!(
        fetch_stage(0xFFFF_FFFC, &mem),
        Err(Halt::FetchOutOfBounds { pc: 0xFFFF_FFFC })
    );
}
