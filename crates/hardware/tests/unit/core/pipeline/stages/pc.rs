//! Program-Counter Update Tests.

use mipsim_core::core::pipeline::signals::ControlSignals;
use mipsim_core::core::pipeline::stages::{control_signals, pc_update};
use mipsim_core::isa::{InstrClass, partition, sign_extend};
use rstest::rstest;

use crate::common::*;

#[test]
fn sequential_advance() {
    let control = control_signals(InstrClass::AddImm);
    assert_eq!(pc_update(0x4000, &control, &partition(addi(1, 1, 8)), 8, false), 0x4004);
}

#[rstest]
#[case(3, 0x4000 + 4 + 12)]
#[case(0, 0x4004)]
#[case(-1, 0x4000)]
#[case(-2, 0x3FFC)]
fn taken_branch_is_relative_to_next_pc(#[case] offset: i16, #[case] expected: u32) {
    let control = control_signals(InstrClass::BranchEq);
    let fields = partition(beq(1, 2, offset));
    let imm = sign_extend(fields.imm);
    assert_eq!(pc_update(0x4000, &control, &fields, imm, true), expected);
}

#[test]
fn untaken_branch_falls_through() {
    let control = control_signals(InstrClass::BranchEq);
    let fields = partition(beq(1, 2, 100));
    assert_eq!(pc_update(0x4000, &control, &fields, 100, false), 0x4004);
}

#[test]
fn zero_flag_alone_does_not_redirect() {
    let control = control_signals(InstrClass::RType);
    let fields = partition(add(1, 2, 3));
    assert_eq!(pc_update(0x4000, &control, &fields, 0x10, true), 0x4004);
}

#[test]
fn jump_keeps_segment_of_advanced_pc() {
    let control = control_signals(InstrClass::Jump);
    let fields = partition(j(0x100));
    assert_eq!(pc_update(0x4000, &control, &fields, 0, false), 0x400);
    assert_eq!(pc_update(0xF000_0000, &control, &fields, 0, false), 0xF000_0400);
    // the segment comes from pc + 4, which here crosses into 0x2000_0000
    assert_eq!(pc_update(0x1FFF_FFFC, &control, &fields, 0, false), 0x2000_0400);
}

#[test]
fn jump_target_uses_all_26_bits() {
    let control = control_signals(InstrClass::Jump);
    let fields = partition(j(0x03FF_FFFF));
    assert_eq!(pc_update(0, &control, &fields, 0, false), 0x0FFF_FFFC);
}

#[test]
fn advance_wraps_at_top_of_address_space() {
    let control = control_signals(InstrClass::AddImm);
    assert_eq!(pc_update(0xFFFF_FFFC, &control, &partition(0), 0, false), 0);
}

#[test]
fn jump_wins_over_branch() {
    let control = ControlSignals {
        branch: true,
        jump: true,
        ..ControlSignals::default()
    };
    let fields = partition(j(0x40));
    assert_eq!(pc_update(0x4000, &control, &fields, 0x10, true), 0x100);
}
