//! Instruction classes of the supported subset.
//!
//! Every supported opcode maps to exactly one [`InstrClass`]. The decoder
//! derives the control-signal vector from the class, so adding an instruction
//! means adding one variant and one table row.

use crate::isa::opcodes::{
    OP_ADDI, OP_BEQ, OP_J, OP_LUI, OP_LW, OP_RTYPE, OP_SLTI, OP_SLTIU, OP_SW,
};

/// One row of the opcode table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstrClass {
    /// Register-register ALU operation selected by funct (`0x00`).
    RType,
    /// Unconditional jump (`0x02`).
    Jump,
    /// Branch if equal (`0x04`).
    BranchEq,
    /// Add immediate (`0x08`).
    AddImm,
    /// Set less than immediate, signed (`0x0A`).
    SetLessImm,
    /// Set less than immediate, unsigned (`0x0B`).
    SetLessImmUnsigned,
    /// Load upper immediate (`0x0F`).
    LoadUpperImm,
    /// Load word (`0x23`).
    LoadWord,
    /// Store word (`0x2B`).
    StoreWord,
}

impl InstrClass {
    /// Every class, in opcode order.
    pub const ALL: [Self; 9] = [
        Self::RType,
        Self::Jump,
        Self::BranchEq,
        Self::AddImm,
        Self::SetLessImm,
        Self::SetLessImmUnsigned,
        Self::LoadUpperImm,
        Self::LoadWord,
        Self::StoreWord,
    ];

    /// Looks up the class for a 6-bit opcode, or `None` if it is unsupported.
    pub const fn from_opcode(opcode: u32) -> Option<Self> {
        Some(match opcode {
            OP_RTYPE => Self::RType,
            OP_J => Self::Jump,
            OP_BEQ => Self::BranchEq,
            OP_ADDI => Self::AddImm,
            OP_SLTI => Self::SetLessImm,
            OP_SLTIU => Self::SetLessImmUnsigned,
            OP_LUI => Self::LoadUpperImm,
            OP_LW => Self::LoadWord,
            OP_SW => Self::StoreWord,
            _ => return None,
        })
    }

    /// The opcode that encodes this class.
    pub const fn opcode(self) -> u32 {
        match self {
            Self::RType => OP_RTYPE,
            Self::Jump => OP_J,
            Self::BranchEq => OP_BEQ,
            Self::AddImm => OP_ADDI,
            Self::SetLessImm => OP_SLTI,
            Self::SetLessImmUnsigned => OP_SLTIU,
            Self::LoadUpperImm => OP_LUI,
            Self::LoadWord => OP_LW,
            Self::StoreWord => OP_SW,
        }
    }

    /// Short assembler mnemonic for reports.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::RType => "r-type",
            Self::Jump => "j",
            Self::BranchEq => "beq",
            Self::AddImm => "addi",
            Self::SetLessImm => "slti",
            Self::SetLessImmUnsigned => "sltiu",
            Self::LoadUpperImm => "lui",
            Self::LoadWord => "lw",
            Self::StoreWord => "sw",
        }
    }
}
