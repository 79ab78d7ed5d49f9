//! Datapath stage implementations.
//!
//! One function per stage of the single-cycle datapath, called in order by
//! [`Cpu::step`](crate::core::Cpu::step):
//! 1. **Fetch:** Retrieves the instruction word at the PC.
//! 2. **Decode:** Generates control signals, reads registers, extends the immediate.
//! 3. **Execute:** Selects operand B, resolves funct codes, runs the ALU.
//! 4. **Memory:** Performs the load or store, if any.
//! 5. **Writeback:** Commits the result to the register file.
//! 6. **PC:** Advances the PC and applies branch/jump redirection.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Program-counter update.
pub mod pc;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::{control_signals, decode_stage, read_operands};
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// PC update entry point.
pub use pc::pc_update;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
