//! Error Message Tests.

use mipsim_core::common::{Halt, LoadError};
use rstest::rstest;

#[rstest]
#[case(Halt::MisalignedFetch { pc: 0x4002 }, "misaligned fetch address 0x00004002")]
#[case(
    Halt::FetchOutOfBounds { pc: 0x10000 },
    "fetch address 0x00010000 is outside allocated memory"
)]
#[case(
    Halt::IllegalOpcode { opcode: 0x3F, word: 0xFC00_0000 },
    "illegal opcode 0x3f in instruction 0xfc000000"
)]
#[case(
    Halt::IllegalFunct { funct: 0, word: 0 },
    "illegal function code 0x00 in instruction 0x00000000"
)]
#[case(
    Halt::MemoryAccess { addr: 0x10000 },
    "misaligned or out-of-range memory access at 0x00010000"
)]
fn halt_messages(#[case] halt: Halt, #[case] message: &str) {
    assert_eq!(halt.to_string(), message);
}

#[test]
fn load_error_messages() {
    let parse = LoadError::Parse {
        line: 4,
        text: "xyz".to_owned(),
    };
    assert_eq!(
        parse.to_string(),
        "line 4: expected a hexadecimal word, found `xyz`"
    );
    let misaligned = LoadError::Misaligned { load_addr: 0x4002 };
    assert_eq!(misaligned.to_string(), "load address 0x4002 is not word-aligned");
    let big = LoadError::TooLarge {
        words: 10,
        load_addr: 0xFFF0,
    };
    assert_eq!(big.to_string(), "program of 10 words does not fit at 0xfff0");
}
