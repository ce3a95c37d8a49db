//! Operation-agnostic bit-field extraction for 32-bit instruction words.
//!
//! Every function here is a pure mapping from a raw word to one of its
//! encoding fields. Nothing in this module branches on operation identity;
//! which fields are meaningful for a given word is the decoder's concern.

#![allow(clippy::cast_possible_wrap)]

/// Mask selecting the opcode field (bits 31..26).
pub const OPCODE_MASK: u32 = 0xFC00_0000;
/// Mask selecting the `rs` field (bits 25..21).
pub const RS_MASK: u32 = 0x03E0_0000;
/// Mask selecting the `rt` field (bits 20..16).
pub const RT_MASK: u32 = 0x001F_0000;
/// Mask selecting the `rd` field (bits 15..11).
pub const RD_MASK: u32 = 0x0000_F800;
/// Mask selecting the shift-amount field (bits 10..6).
pub const SHAMT_MASK: u32 = 0x0000_07C0;
/// Mask selecting the function-code field (bits 5..0).
pub const FUNCT_MASK: u32 = 0x0000_003F;
/// Mask selecting the 26-bit jump-target field (bits 25..0).
pub const JUMP_TARGET_MASK: u32 = 0x03FF_FFFF;
/// Mask selecting the 16-bit immediate field (bits 15..0).
pub const IMMEDIATE_MASK: u32 = 0x0000_FFFF;

/// Extracts the opcode field, left in place in the high bits.
///
/// A nonzero opcode is the primary decode key; register-format words keep
/// these bits zero and decode by function code instead.
#[must_use]
pub const fn opcode(word: u32) -> u32 {
    word & OPCODE_MASK
}

/// Extracts the function-code field (low 6 bits).
#[must_use]
pub const fn funct(word: u32) -> u32 {
    word & FUNCT_MASK
}

/// Extracts the `rs` register index.
#[must_use]
pub const fn rs(word: u32) -> usize {
    ((word & RS_MASK) >> 21) as usize
}

/// Extracts the `rt` register index.
#[must_use]
pub const fn rt(word: u32) -> usize {
    ((word & RT_MASK) >> 16) as usize
}

/// Extracts the `rd` register index.
#[must_use]
pub const fn rd(word: u32) -> usize {
    ((word & RD_MASK) >> 11) as usize
}

/// Extracts the shift amount.
#[must_use]
pub const fn shamt(word: u32) -> u32 {
    (word & SHAMT_MASK) >> 6
}

/// Extracts the raw 16-bit immediate, zero-extended.
#[must_use]
pub const fn immediate(word: u32) -> i32 {
    (word & IMMEDIATE_MASK) as i32
}

/// Extracts the raw 26-bit jump target, zero-extended.
#[must_use]
pub const fn jump_target(word: u32) -> i32 {
    (word & JUMP_TARGET_MASK) as i32
}

/// Sign-extends a 16-bit immediate to 32 bits.
///
/// When bit 15 is set, the upper 16 bits are OR-ed with all-ones.
#[must_use]
pub const fn sign_extend_immediate(immediate: i32) -> i32 {
    if immediate & 0x8000 != 0 {
        immediate | 0xFFFF_0000_u32 as i32
    } else {
        immediate
    }
}

/// Sign-extends a 26-bit jump target to 32 bits.
///
/// When bit 25 is set, bits 31..26 are OR-ed with all-ones.
#[must_use]
pub const fn sign_extend_jump_target(target: i32) -> i32 {
    if target & 0x0200_0000 != 0 {
        target | 0xFC00_0000_u32 as i32
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_extracts_from_a_fully_populated_word() {
        // rs=0b10101, rt=0b01010, rd=0b11111, shamt=0b00011, funct=0b100100
        let word = (0b10101 << 21) | (0b01010 << 16) | (0b11111 << 11) | (0b00011 << 6) | 0b10_0100;

        assert_eq!(opcode(word), 0);
        assert_eq!(rs(word), 0b10101);
        assert_eq!(rt(word), 0b01010);
        assert_eq!(rd(word), 0b11111);
        assert_eq!(shamt(word), 0b00011);
        assert_eq!(funct(word), 0b10_0100);
    }

    #[test]
    fn opcode_stays_in_the_high_bits() {
        assert_eq!(opcode(0x8C12_3456), 0x8C00_0000);
        assert_eq!(opcode(0x03FF_FFFF), 0);
    }

    #[test]
    fn immediate_is_zero_extended_on_extraction() {
        assert_eq!(immediate(0x1234_8001), 0x8001);
        assert_eq!(immediate(0xFFFF_FFFF), 0xFFFF);
    }

    #[test]
    fn immediate_sign_extension_replicates_bit_15() {
        assert_eq!(sign_extend_immediate(0x8000), 0xFFFF_8000_u32 as i32);
        assert_eq!(sign_extend_immediate(0x7FFF), 0x0000_7FFF);
        assert_eq!(sign_extend_immediate(0), 0);
    }

    #[test]
    fn jump_target_sign_extension_replicates_bit_25() {
        assert_eq!(sign_extend_jump_target(0x0200_0001), 0xFE00_0001_u32 as i32);
        assert_eq!(sign_extend_jump_target(0x01FF_FFFF), 0x01FF_FFFF);
    }

    #[test]
    fn masks_partition_the_register_format_word() {
        assert_eq!(
            RS_MASK | RT_MASK | RD_MASK | SHAMT_MASK | FUNCT_MASK | OPCODE_MASK,
            u32::MAX
        );
        assert_eq!(RS_MASK & RT_MASK, 0);
        assert_eq!(OPCODE_MASK & JUMP_TARGET_MASK, 0);
    }
}
