//! Statistics Tests.

use mipsim_core::isa::InstrClass;

use crate::common::*;

#[test]
fn instruction_mix_is_classified() {
    let program = [
        addi(1, 0, 1),
        add(2, 1, 1),
        sw(2, 0, 28),
        lw(3, 0, 28),
        beq(0, 1, 5),
        beq(2, 3, 1),
        addi(7, 0, 7),
        j(0x4024 >> 2),
        addi(7, 0, 7),
        lui(4, 1),
        HALT,
    ];
    let mut ctx = TestContext::new().program(&program);
    let _ = ctx.run();
    let stats = &ctx.cpu().stats;

    assert_eq!(stats.cycles, 9);
    assert_eq!(stats.instructions_retired, 8);
    assert_eq!(stats.count(InstrClass::AddImm), 1);
    assert_eq!(stats.count(InstrClass::RType), 1);
    assert_eq!(stats.count(InstrClass::BranchEq), 2);
    assert_eq!(stats.count(InstrClass::Jump), 1);
    assert_eq!(stats.count(InstrClass::LoadUpperImm), 1);
    assert_eq!(stats.memory_ops(), 2);
    assert_eq!(stats.branches_taken, 1);
    assert_eq!(stats.branches_not_taken(), 1);
    // addi, add, lw, lui
    assert_eq!(stats.reg_writes, 4);
}

#[test]
fn report_lists_every_class() {
    let mut ctx = TestContext::new().program(&[addi(1, 0, 1), HALT]);
    let _ = ctx.run();
    let report = ctx.cpu().stats.to_string();
    assert!(report.contains("sim_cycles               2"));
    assert!(report.contains("sim_insts                1"));
    for class in InstrClass::ALL {
        assert!(report.contains(class.mnemonic()));
    }
}
