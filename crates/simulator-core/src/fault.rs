//! Error taxonomy for the simulator core.
//!
//! Decode failures and execution faults are fatal to the instruction
//! stream and surface to the driver. The halt condition is not an error;
//! it travels as an execution status instead.

use thiserror::Error;

/// An instruction word matched no catalog entry.
///
/// Raised when both the opcode-pattern and function-code lookups fail.
/// Never downgraded to a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("unrecognized instruction word {word:#010x}")]
pub struct DecodeError {
    /// The word that failed both lookups.
    pub word: u32,
}

/// Unrecoverable fault raised while applying an operation's semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecFault {
    /// A load or store computed a word index outside the memory image.
    #[error("memory access out of bounds: word index {index}, image holds {len} words")]
    MemoryOutOfBounds {
        /// Effective word index (immediate plus base register).
        index: i64,
        /// Number of words in the memory image.
        len: usize,
    },
}

/// Any failure the simulation driver can encounter while stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimError {
    /// The fetched word decoded to no operation.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// An operation faulted during its apply step.
    #[error(transparent)]
    Exec(#[from] ExecFault),
    /// The program counter points outside the loaded image.
    #[error("program counter {pc:#010x} is outside the program image")]
    PcOutOfBounds {
        /// The out-of-range program counter value.
        pc: i32,
    },
}
