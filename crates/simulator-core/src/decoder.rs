//! Instruction-word resolution against the operation catalog.

use crate::encoding::{lookup_encoding_key, Operation};
use crate::fault::DecodeError;
use crate::fields::{FUNCT_MASK, OPCODE_MASK};

/// Resolves raw 32-bit instruction words to catalog operations.
#[derive(Debug, Clone, Copy)]
pub struct Decoder;

impl Decoder {
    /// Decodes a raw instruction word to exactly one operation.
    ///
    /// Resolution order:
    /// 1. the literal all-zero word is the no-op. A zero function code is
    ///    also a legitimate SLL encoding, so the zero word is
    ///    special-cased rather than looked up; any word with nonzero
    ///    register or shamt bits still reaches SLL through step 3;
    /// 2. nonzero opcode bits select by the opcode pattern (immediate and
    ///    jump formats, plus the all-ones syscall pattern);
    /// 3. otherwise the function code selects among register formats.
    ///
    /// Decoding is a pure function of the word and is idempotent.
    ///
    /// # Errors
    ///
    /// [`DecodeError`] when neither lookup matches. The caller must treat
    /// this as fatal to the instruction stream.
    pub fn decode(word: u32) -> Result<Operation, DecodeError> {
        if word == 0 {
            return Ok(Operation::Nop);
        }

        let key = if word & OPCODE_MASK == 0 {
            word & FUNCT_MASK
        } else {
            word & OPCODE_MASK
        };

        lookup_encoding_key(key).ok_or(DecodeError { word })
    }
}
