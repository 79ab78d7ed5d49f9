//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. It is a
//! pure function of two 32-bit operands and an operation selector, and it
//! never fails.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Slt, Sltu, And, Or, Not
//! - [`shifts`]:     `ShiftLeft16`

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Logical and comparison operations (slt, sltu, and, or, not).
pub mod logic;

/// Shift operations (shift-left-16).
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Result of one ALU evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutput {
    /// The 32-bit result.
    pub result: u32,
    /// Set when `result` is zero. Only meaningful for the current instruction.
    pub zero: bool,
}

impl AluOutput {
    const fn from_result(result: u32) -> Self {
        Self {
            result,
            zero: result == 0,
        }
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::core::pipeline::signals::AluOp;
    ///
    /// // Wrapping addition
    /// let out = Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1);
    /// assert_eq!(out.result, 0);
    /// assert!(out.zero);
    ///
    /// // Signed comparison
    /// let out = Alu::execute(AluOp::Slt, -5_i32 as u32, 10);
    /// assert_eq!(out.result, 1);
    ///
    /// // LUI-style shift ignores operand A
    /// let out = Alu::execute(AluOp::ShiftLeft16, 0xDEAD, 0x1234);
    /// assert_eq!(out.result, 0x1234_0000);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> AluOutput {
        let result = match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Slt | AluOp::Sltu | AluOp::And | AluOp::Or | AluOp::Not => {
                logic::execute(op, a, b)
            }
            AluOp::ShiftLeft16 => shifts::execute(op, a, b),
        };
        AluOutput::from_result(result)
    }

    /// Executes the operation named by a raw 3-bit ALU control selector.
    ///
    /// Selectors `0`-`7` map onto [`AluOp`] in declaration order. Any other
    /// selector is undefined and yields a result of `0` (with the zero flag set).
    pub const fn execute_selector(selector: u8, a: u32, b: u32) -> AluOutput {
        match AluOp::from_selector(selector) {
            Some(op) => Self::execute(op, a, b),
            None => AluOutput::from_result(0),
        }
    }
}
