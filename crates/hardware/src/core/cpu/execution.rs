//! Single-Instruction Execution.
//!
//! This module implements one full datapath cycle. It performs the following:
//! 1. **Stage Sequencing:** Fetch, partition, decode, register read, execute, memory, writeback, PC update.
//! 2. **Halt Propagation:** Any stage's halting condition ends the cycle immediately.
//! 3. **Observability:** Emits a trace event per retired instruction and updates statistics.
//!
//! A halt leaves the PC unchanged and keeps whatever earlier stages already
//! wrote; nothing is rolled back.

use tracing::trace;

use super::Cpu;
use crate::common::Halt;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, pc_update, read_operands, wb_stage,
};
use crate::isa::disasm::disassemble;
use crate::isa::{InstrClass, partition};

/// Summary of one successfully executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// The instruction word.
    pub word: u32,
    /// Instruction class from the opcode table.
    pub class: InstrClass,
    /// Register written back, with its new value.
    pub write: Option<(usize, u32)>,
    /// A branch whose condition held, including one with a zero offset.
    pub branch_taken: bool,
    /// Program counter after the update.
    pub next_pc: u32,
}

impl Cpu {
    /// Executes exactly one instruction.
    ///
    /// # Errors
    ///
    /// Returns the [`Halt`] raised by whichever stage detected an invalid state.
    pub fn step(&mut self) -> Result<Retired, Halt> {
        self.stats.cycles += 1;

        let pc = self.pc;
        let word = fetch_stage(pc, &self.memory)?;
        let fields = partition(word);
        let (class, control) = decode_stage(&fields)?;
        let operands = read_operands(&fields, &self.regs);
        let alu = execute_stage(&control, &fields, &operands)?;
        let mem_data = mem_stage(&control, alu.result, operands.data2, &mut self.memory)?;
        let write = wb_stage(&control, &fields, alu.result, mem_data, &mut self.regs);
        let next_pc = pc_update(pc, &control, &fields, operands.imm, alu.zero);
        self.pc = next_pc;

        trace!(
            pc,
            word,
            next_pc,
            alu = alu.result,
            "{}",
            disassemble(word)
        );

        let retired = Retired {
            pc,
            word,
            class,
            write,
            branch_taken: control.branch && alu.zero,
            next_pc,
        };
        self.stats.record(&retired);
        Ok(retired)
    }
}
