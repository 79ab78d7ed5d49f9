//! Instruction Decode (ID) Stage.
//!
//! This module implements the control decoder and the register-read step. It
//! performs the following:
//! 1. **Control Generation:** Maps the opcode to a fixed control-signal vector.
//! 2. **Operand Fetch:** Reads the two source registers named by `rs` and `rt`.
//! 3. **Immediate Extension:** Sign-extends the 16-bit immediate.

use tracing::debug;

use crate::common::Halt;
use crate::core::arch::Gpr;
use crate::core::pipeline::signals::{AluControl, AluOp, AluSrc, ControlSignals, MemToReg, RegDst};
use crate::isa::class::InstrClass;
use crate::isa::instruction::{Fields, sign_extend};

/// Operands read during decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    /// Value of register `rs`.
    pub data1: u32,
    /// Value of register `rt`.
    pub data2: u32,
    /// Sign-extended immediate.
    pub imm: u32,
}

/// Returns the control-signal vector for an instruction class.
///
/// Exactly one of `mem_read`, `mem_write`, `branch`, `jump` is set for
/// memory and control-flow classes, and none for ALU classes.
pub const fn control_signals(class: InstrClass) -> ControlSignals {
    const NONE: ControlSignals = ControlSignals {
        reg_dst: RegDst::DontCare,
        jump: false,
        branch: false,
        mem_read: false,
        mem_to_reg: MemToReg::DontCare,
        alu_op: AluControl::Op(AluOp::Add),
        mem_write: false,
        alu_src: AluSrc::Reg,
        reg_write: false,
    };
    const fn imm_alu(op: AluOp) -> ControlSignals {
        ControlSignals {
            reg_dst: RegDst::Rt,
            mem_to_reg: MemToReg::Alu,
            alu_op: AluControl::Op(op),
            alu_src: AluSrc::Imm,
            reg_write: true,
            ..NONE
        }
    }

    match class {
        InstrClass::RType => ControlSignals {
            reg_dst: RegDst::Rd,
            mem_to_reg: MemToReg::Alu,
            alu_op: AluControl::Funct,
            alu_src: AluSrc::Reg,
            reg_write: true,
            ..NONE
        },
        InstrClass::Jump => ControlSignals {
            jump: true,
            ..NONE
        },
        InstrClass::BranchEq => ControlSignals {
            branch: true,
            alu_op: AluControl::Op(AluOp::Sub),
            alu_src: AluSrc::Reg,
            ..NONE
        },
        InstrClass::AddImm => imm_alu(AluOp::Add),
        InstrClass::SetLessImm => imm_alu(AluOp::Slt),
        InstrClass::SetLessImmUnsigned => imm_alu(AluOp::Sltu),
        InstrClass::LoadUpperImm => imm_alu(AluOp::ShiftLeft16),
        InstrClass::LoadWord => ControlSignals {
            mem_read: true,
            mem_to_reg: MemToReg::Memory,
            ..imm_alu(AluOp::Add)
        },
        InstrClass::StoreWord => ControlSignals {
            mem_write: true,
            alu_src: AluSrc::Imm,
            ..NONE
        },
    }
}

/// Decodes the opcode of a partitioned instruction into its class and control signals.
///
/// # Errors
///
/// Returns [`Halt::IllegalOpcode`] for any opcode outside the supported set.
pub fn decode_stage(fields: &Fields) -> Result<(InstrClass, ControlSignals), Halt> {
    let Some(class) = InstrClass::from_opcode(fields.opcode) else {
        debug!(opcode = fields.opcode, word = fields.word, "ID  illegal opcode");
        return Err(Halt::IllegalOpcode {
            opcode: fields.opcode,
            word: fields.word,
        });
    };
    Ok((class, control_signals(class)))
}

/// Reads the source registers and sign-extends the immediate.
pub const fn read_operands(fields: &Fields, regs: &Gpr) -> Operands {
    let (data1, data2) = regs.read_pair(fields.rs, fields.rt);
    Operands {
        data1,
        data2,
        imm: sign_extend(fields.imm),
    }
}
