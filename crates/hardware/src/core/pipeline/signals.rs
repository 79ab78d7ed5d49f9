//! Datapath control signals and operation types.
//!
//! This module defines the signals that steer one instruction through the
//! datapath. It performs:
//! 1. **Operation Classification:** Names the ALU operations and the R-type funct sentinel.
//! 2. **Operand Selection:** Chooses the ALU's second operand (register or immediate).
//! 3. **Write-Back Steering:** Chooses the destination register and the value written back.
//! 4. **Flow Control:** Flags branches, jumps, loads, and stores.

/// ALU operations, in the order of their 3-bit control selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AluOp {
    /// Wrapping addition (selector 0).
    #[default]
    Add = 0,

    /// Wrapping subtraction (selector 1).
    Sub = 1,

    /// Set less than, signed (selector 2).
    Slt = 2,

    /// Set less than, unsigned (selector 3).
    Sltu = 3,

    /// Truth-valued AND: `1` if `a & b` is non-zero (selector 4).
    And = 4,

    /// Truth-valued OR: `1` if `a | b` is non-zero (selector 5).
    Or = 5,

    /// Operand B shifted left by 16; A is ignored (selector 6).
    ShiftLeft16 = 6,

    /// Bitwise complement of A; B is ignored (selector 7).
    Not = 7,
}

impl AluOp {
    /// Maps a raw 3-bit control selector to its operation.
    ///
    /// Returns `None` for selectors outside `0..=7`.
    pub const fn from_selector(selector: u8) -> Option<Self> {
        Some(match selector {
            0 => Self::Add,
            1 => Self::Sub,
            2 => Self::Slt,
            3 => Self::Sltu,
            4 => Self::And,
            5 => Self::Or,
            6 => Self::ShiftLeft16,
            7 => Self::Not,
            _ => return None,
        })
    }

    /// Returns the raw control selector for this operation.
    pub const fn selector(self) -> u8 {
        self as u8
    }
}

/// ALU operation requested by the control decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluControl {
    /// Use this operation directly.
    Op(AluOp),

    /// R-type: resolve the operation from the instruction's funct field.
    Funct,
}

impl Default for AluControl {
    fn default() -> Self {
        Self::Op(AluOp::Add)
    }
}

/// Destination register selection for write-back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegDst {
    /// Write to the second register field (`rt`, bits 16-20).
    Rt,

    /// Write to the third register field (`rd`, bits 11-15).
    Rd,

    /// Instruction does not write a register.
    #[default]
    DontCare,
}

/// Value selection for write-back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemToReg {
    /// Write the ALU result.
    Alu,

    /// Write the word loaded from memory.
    Memory,

    /// Instruction does not write a register.
    #[default]
    DontCare,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluSrc {
    /// Use the second register value.
    #[default]
    Reg,

    /// Use the sign-extended immediate.
    Imm,
}

/// Control signals for one instruction.
///
/// Generated once by the decoder and consumed read-only by every later stage.
/// The default value is the all-inactive vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Destination register selection.
    pub reg_dst: RegDst,
    /// Instruction is an unconditional jump.
    pub jump: bool,
    /// Instruction is a conditional branch (taken when the ALU zero flag is set).
    pub branch: bool,
    /// Enable memory read (load).
    pub mem_read: bool,
    /// Write-back value selection.
    pub mem_to_reg: MemToReg,
    /// ALU operation to perform.
    pub alu_op: AluControl,
    /// Enable memory write (store).
    pub mem_write: bool,
    /// Source selection for ALU operand B.
    pub alu_src: AluSrc,
    /// Enable write to the destination register.
    pub reg_write: bool,
}
