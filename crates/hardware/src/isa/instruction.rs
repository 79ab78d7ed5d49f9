//! Instruction encoding and field partitioning.
//!
//! Provides bit extraction functions and structures for splitting a 32-bit
//! MIPS instruction word into its fields. The fields overlap: each is a
//! different view of the same word, and the control decoder decides which
//! views are meaningful for a given opcode.

/// Bit shift for the opcode field (bits 26-31).
const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the opcode field (6 bits).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift for the first source register field (bits 21-25).
const RS_SHIFT: u32 = 21;
/// Bit shift for the second source / target register field (bits 16-20).
const RT_SHIFT: u32 = 16;
/// Bit shift for the destination register field (bits 11-15).
const RD_SHIFT: u32 = 11;
/// Bit mask for any register field (5 bits).
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the function code field (bits 0-5).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the immediate / offset field (bits 0-15).
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the jump target field (bits 0-25).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Sign bit of a 16-bit immediate.
const IMM_SIGN_BIT: u32 = 0x8000;
/// Upper half-word filled in when sign-extending a negative immediate.
const IMM_EXTENSION: u32 = 0xFFFF_0000;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the first register field (bits 21-25).
    fn rs(&self) -> usize;

    /// Extracts the second register field (bits 16-20).
    fn rt(&self) -> usize;

    /// Extracts the third register field (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the function code (bits 0-5).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate / branch offset (bits 0-15).
    fn imm16(&self) -> u32;

    /// Extracts the 26-bit jump target (bits 0-25).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// All field views of one instruction word.
///
/// Produced once per instruction by [`partition`] and read by every later stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fields {
    /// The raw instruction word.
    pub word: u32,
    /// Opcode (bits 26-31).
    pub opcode: u32,
    /// First register index (bits 21-25).
    pub rs: usize,
    /// Second register index (bits 16-20).
    pub rt: usize,
    /// Third register index (bits 11-15).
    pub rd: usize,
    /// Function code (bits 0-5).
    pub funct: u32,
    /// Raw 16-bit immediate / offset (bits 0-15), not yet extended.
    pub imm: u32,
    /// 26-bit jump target (bits 0-25).
    pub target: u32,
}

/// Splits an instruction word into all of its field views.
///
/// Never fails; every 32-bit value has a well-defined partition.
pub fn partition(word: u32) -> Fields {
    Fields {
        word,
        opcode: word.opcode(),
        rs: word.rs(),
        rt: word.rt(),
        rd: word.rd(),
        funct: word.funct(),
        imm: word.imm16(),
        target: word.target(),
    }
}

/// Sign-extends a 16-bit field to 32 bits by replicating bit 15 into bits 16-31.
///
/// Bits above 15 of `imm` are ignored.
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::instruction::sign_extend;
///
/// assert_eq!(sign_extend(0x7FFF), 0x0000_7FFF);
/// assert_eq!(sign_extend(0x8000), 0xFFFF_8000);
/// ```
#[inline]
pub const fn sign_extend(imm: u32) -> u32 {
    let imm = imm & IMM_MASK;
    if imm & IMM_SIGN_BIT != 0 {
        imm | IMM_EXTENSION
    } else {
        imm
    }
}
