//! Memory Access Stage Tests.
//!
//! Alignment and access-limit enforcement for loads and stores, and the
//! no-op path for instructions that touch neither.

use mipsim_core::common::Halt;
use mipsim_core::core::pipeline::stages::{control_signals, mem_stage};
use mipsim_core::isa::InstrClass;
use mipsim_core::soc::Memory;
use rstest::rstest;

fn memory() -> Memory {
    Memory::new(0x4000, 0xFFFF).unwrap()
}

#[test]
fn load_reads_word() {
    let mut mem = memory();
    *mem.word_mut(0x40).unwrap() = 0xABCD;
    let control = control_signals(InstrClass::LoadWord);
    assert_eq!(mem_stage(&control, 0x100, 0, &mut mem), Ok(Some(0xABCD)));
}

#[test]
fn store_writes_word() {
    let mut mem = memory();
    let control = control_signals(InstrClass::StoreWord);
    assert_eq!(mem_stage(&control, 0x200, 0x5555, &mut mem), Ok(None));
    assert_eq!(mem.read_addr(0x200), Some(0x5555));
}

#[test]
fn last_word_below_limit_is_reachable() {
    let mut mem = memory();
    let control = control_signals(InstrClass::StoreWord);
    assert_eq!(mem_stage(&control, 0xFFFC, 7, &mut mem), Ok(None));
    assert_eq!(mem.read_addr(0xFFFC), Some(7));
}

#[rstest]
#[case(0x10000)]
#[case(0x10004)]
#[case(0xFFFF_FFFC)]
fn load_at_or_above_limit_halts(#[case] addr: u32) {
    let mut mem = memory();
    let control = control_signals(InstrClass::LoadWord);
    assert_eq!(
        mem_stage(&control, addr, 0, &mut mem),
        Err(Halt::MemoryAccess { addr })
    );
}

#[rstest]
#[case(0x1)]
#[case(0x2)]
#[case(0x103)]
#[case(0xFFFF)]
fn misaligned_store_halts_without_writing(#[case] addr: u32) {
    let mut mem = memory();
    let before = mem.clone();
    let control = control_signals(InstrClass::StoreWord);
    assert_eq!(
        mem_stage(&control, addr, 0xDEAD, &mut mem),
        Err(Halt::MemoryAccess { addr })
    );
    assert_eq!(mem, before);
}

#[test]
fn custom_limit_is_honoured() {
    let mut mem = Memory::new(0x4000, 0x100).unwrap();
    let control = control_signals(InstrClass::LoadWord);
    assert_eq!(mem_stage(&control, 0xFC, 0, &mut mem), Ok(Some(0)));
    assert_eq!(
        mem_stage(&control, 0x100, 0, &mut mem),
        Err(Halt::MemoryAccess { addr: 0x100 })
    );
}

#[rstest]
#[case(InstrClass::RType)]
#[case(InstrClass::AddImm)]
#[case(InstrClass::BranchEq)]
#[case(InstrClass::Jump)]
fn non_memory_instructions_skip_address_check(#[case] class: InstrClass) {
    let mut mem = memory();
    let control = control_signals(class);
    assert_eq!(mem_stage(&control, 0x1_0003, 1, &mut mem), Ok(None));
}
