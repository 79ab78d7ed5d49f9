//! Instruction Execute (EX) Stage.
//!
//! Selects the ALU's second operand, resolves the R-type funct code to a
//! concrete operation, and evaluates the ALU exactly once.

use tracing::debug;

use crate::common::Halt;
use crate::core::pipeline::signals::{AluControl, AluOp, AluSrc, ControlSignals};
use crate::core::pipeline::stages::decode::Operands;
use crate::core::units::alu::{Alu, AluOutput};
use crate::isa::funct::{FUNCT_ADD, FUNCT_AND, FUNCT_OR, FUNCT_SLT, FUNCT_SLTU, FUNCT_SUB};
use crate::isa::instruction::Fields;

/// Maps an R-type function code to its ALU operation.
pub const fn funct_to_alu_op(funct: u32) -> Option<AluOp> {
    Some(match funct {
        FUNCT_ADD => AluOp::Add,
        FUNCT_SUB => AluOp::Sub,
        FUNCT_AND => AluOp::And,
        FUNCT_OR => AluOp::Or,
        FUNCT_SLT => AluOp::Slt,
        FUNCT_SLTU => AluOp::Sltu,
        _ => return None,
    })
}

/// Resolves the control decoder's ALU request to a concrete operation.
///
/// # Errors
///
/// Returns [`Halt::IllegalFunct`] when the request is [`AluControl::Funct`]
/// and the function code is not in the R-type table.
pub fn resolve_alu_op(alu: AluControl, fields: &Fields) -> Result<AluOp, Halt> {
    match alu {
        AluControl::Op(op) => Ok(op),
        AluControl::Funct => funct_to_alu_op(fields.funct).ok_or_else(|| {
            debug!(funct = fields.funct, word = fields.word, "EX  illegal funct");
            Halt::IllegalFunct {
                funct: fields.funct,
                word: fields.word,
            }
        }),
    }
}

/// Executes the ALU for one instruction.
///
/// Operand A is always `rs`; operand B is `rt` or the sign-extended immediate
/// per [`ControlSignals::alu_src`].
///
/// # Errors
///
/// Propagates [`Halt::IllegalFunct`] from [`resolve_alu_op`].
pub fn execute_stage(
    control: &ControlSignals,
    fields: &Fields,
    operands: &Operands,
) -> Result<AluOutput, Halt> {
    let b = match control.alu_src {
        AluSrc::Imm => operands.imm,
        AluSrc::Reg => operands.data2,
    };
    let op = resolve_alu_op(control.alu_op, fields)?;
    Ok(Alu::execute(op, operands.data1, b))
}
