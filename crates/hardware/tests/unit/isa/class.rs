//! Opcode Table Tests.

use std::collections::HashSet;

use mipsim_core::isa::InstrClass;
use proptest::prelude::*;

#[test]
fn opcode_lookup_round_trips() {
    for class in InstrClass::ALL {
        assert_eq!(InstrClass::from_opcode(class.opcode()), Some(class));
    }
}

#[test]
fn mnemonics_are_distinct() {
    let names: HashSet<_> = InstrClass::ALL.iter().map(|c| c.mnemonic()).collect();
    assert_eq!(names.len(), InstrClass::ALL.len());
}

#[test]
fn exactly_nine_opcodes_supported() {
    let supported = (0..64).filter(|&op| InstrClass::from_opcode(op).is_some());
    assert_eq!(supported.count(), 9);
}

proptest! {
    #[test]
    fn unknown_opcodes_have_no_class(op in 0u32..64) {
        let known = [0x00, 0x02, 0x04, 0x08, 0x0A, 0x0B, 0x0F, 0x23, 0x2B];
        prop_assert_eq!(InstrClass::from_opcode(op).is_some(), known.contains(&op));
    }
}
