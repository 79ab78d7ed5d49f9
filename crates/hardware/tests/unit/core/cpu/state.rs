//! CPU Construction Tests.

use mipsim_core::config::Config;
use mipsim_core::core::Cpu;
use mipsim_core::core::arch::Gpr;
use mipsim_core::soc::Memory;

#[test]
fn default_config_presets_gp_and_sp() {
    let cpu = Cpu::new(&Config::default()).unwrap();
    assert_eq!(cpu.pc, 0x4000);
    assert_eq!(cpu.regs.read(28), 0xC000);
    assert_eq!(cpu.regs.read(29), 0xFFFC);
    assert_eq!(cpu.memory.len_words(), 0x4000);
    assert_eq!(cpu.memory.access_limit(), 0xFFFF);
}

#[test]
fn configured_registers_are_applied() {
    let config = Config::from_json(r#"{ "registers": { "8": 7, "31": 4294967295 } }"#).unwrap();
    let cpu = Cpu::new(&config).unwrap();
    assert_eq!(cpu.regs.read(8), 7);
    assert_eq!(cpu.regs.read(31), u32::MAX);
    // an explicit map replaces the defaults
    assert_eq!(cpu.regs.read(29), 0);
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = Config::default();
    config.memory.words = 16;
    assert!(Cpu::new(&config).is_err());
}

#[test]
fn with_state_starts_with_empty_stats() {
    let cpu = Cpu::with_state(0x10, Gpr::new(), Memory::new(8, 32).unwrap());
    assert_eq!(cpu.pc, 0x10);
    assert_eq!(cpu.stats.cycles, 0);
    assert_eq!(cpu.stats.instructions_retired, 0);
}

#[test]
fn display_reports_pc_registers_and_memory() {
    let mut cpu = Cpu::new(&Config::default()).unwrap();
    cpu.memory.load_words(0x4000, &[0x2001_0005]).unwrap();
    let text = cpu.to_string();
    assert!(text.contains("PC = 0x00004000"));
    assert!(text.contains("$29 sp   = 0x0000fffc"));
    assert!(text.contains("0x4000: 0x20010005"));
}
