//! Writeback (WB) Stage.
//!
//! Commits the ALU result or the loaded word to the destination register.

use crate::core::arch::Gpr;
use crate::core::pipeline::signals::{ControlSignals, MemToReg, RegDst};
use crate::isa::instruction::Fields;

/// Executes the writeback stage.
///
/// Does nothing unless [`ControlSignals::reg_write`] is set. The destination
/// is `rd` when [`RegDst::Rd`] is selected and `rt` otherwise; the value is the
/// loaded word when [`MemToReg::Memory`] is selected and the ALU result
/// otherwise. Returns the register written and its new value.
pub fn wb_stage(
    control: &ControlSignals,
    fields: &Fields,
    alu_result: u32,
    mem_data: Option<u32>,
    regs: &mut Gpr,
) -> Option<(usize, u32)> {
    if !control.reg_write {
        return None;
    }
    let value = match control.mem_to_reg {
        MemToReg::Memory => mem_data.unwrap_or_default(),
        MemToReg::Alu | MemToReg::DontCare => alu_result,
    };
    let dest = match control.reg_dst {
        RegDst::Rd => fields.rd,
        RegDst::Rt | RegDst::DontCare => fields.rt,
    };
    regs.write(dest, value);
    Some((dest, value))
}
