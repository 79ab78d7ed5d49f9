//! Single-cycle datapath.
//!
//! This module contains the control signals and the stage functions that
//! move one instruction from fetch to PC update.
//! 1. **Signals:** Control signals generated during instruction decoding.
//! 2. **Stages:** Fetch, Decode, Execute, Memory, Writeback, and PC update.

/// Control signals generated during instruction decode.
pub mod signals;

/// Datapath stage implementations.
pub mod stages;
