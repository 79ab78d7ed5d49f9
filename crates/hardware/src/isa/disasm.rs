//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! let text = disassemble(0x0022_1820); // add $v1, $at, $v0
//! assert_eq!(text, "add $v1, $at, $v0");
//! ```

use crate::isa::funct::{FUNCT_ADD, FUNCT_AND, FUNCT_OR, FUNCT_SLT, FUNCT_SLTU, FUNCT_SUB};
use crate::isa::instruction::{InstructionBits, sign_extend};
use crate::isa::opcodes::{
    OP_ADDI, OP_BEQ, OP_J, OP_LUI, OP_LW, OP_RTYPE, OP_SLTI, OP_SLTIU, OP_SW,
};

/// Conventional names for registers `$0`-`$31`.
const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the conventional name for a register index.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("??")
}

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"add $t0, $t1, $t2"` or `"unknown"` for
/// encodings outside the supported instruction set.
pub fn disassemble(word: u32) -> String {
    let rs = reg_name(word.rs());
    let rt = reg_name(word.rt());
    let rd = reg_name(word.rd());
    let simm = sign_extend(word.imm16()) as i32;

    match word.opcode() {
        OP_RTYPE => {
            let mnemonic = match word.funct() {
                FUNCT_ADD => "add",
                FUNCT_SUB => "sub",
                FUNCT_AND => "and",
                FUNCT_OR => "or",
                FUNCT_SLT => "slt",
                FUNCT_SLTU => "sltu",
                _ => return "unknown".to_owned(),
            };
            format!("{mnemonic} ${rd}, ${rs}, ${rt}")
        }
        OP_J => format!("j {:#x}", word.target() << 2),
        OP_BEQ => format!("beq ${rs}, ${rt}, {simm}"),
        OP_ADDI => format!("addi ${rt}, ${rs}, {simm}"),
        OP_SLTI => format!("slti ${rt}, ${rs}, {simm}"),
        OP_SLTIU => format!("sltiu ${rt}, ${rs}, {simm}"),
        OP_LUI => format!("lui ${rt}, {:#x}", word.imm16()),
        OP_LW => format!("lw ${rt}, {simm}(${rs})"),
        OP_SW => format!("sw ${rt}, {simm}(${rs})"),
        _ => "unknown".to_owned(),
    }
}
