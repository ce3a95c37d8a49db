//! Closed catalog of supported operations.
//!
//! Each operation owns an encoding key, an encoding family, and a timing
//! class. The catalog is a single source-of-truth `const` table built
//! before first use and immutable thereafter; the decoder resolves raw
//! words against it.

use crate::timing::TimingClass;

/// Instruction encoding family (bit layout of the word).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodingFamily {
    /// `rs`/`rt`/`rd`/`shamt`/function-code layout, opcode bits zero.
    Register,
    /// opcode/`rs`/`rt`/16-bit immediate layout.
    Immediate,
    /// opcode/26-bit target layout.
    Jump,
}

/// One operation of the closed reduced-MIPS instruction set.
///
/// Variants are statically enumerated; no instance is created or destroyed
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Operation {
    And,
    Or,
    Ori,
    Add,
    Addu,
    Sll,
    Srl,
    Sra,
    Sub,
    Sltu,
    Addi,
    Addiu,
    Sltiu,
    Beq,
    Bne,
    Lw,
    Lui,
    Sw,
    J,
    Jr,
    Jal,
    Nop,
    Syscall,
}

impl Operation {
    /// The decode key for this operation.
    ///
    /// Register-format operations use their 6-bit function code;
    /// immediate- and jump-format operations use the opcode pattern
    /// shifted into the high bits. SYSCALL keeps its all-ones opcode
    /// pattern even though its family is register. The two numbering
    /// spaces never collide under the decoder's lookup rule: the opcode
    /// path only queries values with nonzero high bits, the function-code
    /// path only values below 0x40.
    #[must_use]
    pub const fn encoding_key(self) -> u32 {
        match self {
            Self::And => 0x24,
            Self::Or => 0x25,
            Self::Ori => 0x3400_0000,
            Self::Add => 0x20,
            Self::Addu => 0x21,
            Self::Sll | Self::Nop => 0x00,
            Self::Srl => 0x02,
            Self::Sra => 0x03,
            Self::Sub => 0x22,
            Self::Sltu => 0x2B,
            Self::Addi => 0x2000_0000,
            Self::Addiu => 0x2400_0000,
            Self::Sltiu => 0x2C00_0000,
            Self::Beq => 0x1000_0000,
            Self::Bne => 0x1400_0000,
            Self::Lw => 0x8C00_0000,
            Self::Lui => 0x3C00_0000,
            Self::Sw => 0xAC00_0000,
            Self::J => 0x0800_0000,
            Self::Jr => 0x08,
            Self::Jal => 0x0C00_0000,
            Self::Syscall => 0xFC00_0000,
        }
    }

    /// The encoding family this operation is laid out in.
    #[must_use]
    pub const fn family(self) -> EncodingFamily {
        match self {
            Self::And
            | Self::Or
            | Self::Add
            | Self::Addu
            | Self::Sll
            | Self::Srl
            | Self::Sra
            | Self::Sub
            | Self::Sltu
            | Self::Jr
            | Self::Nop
            | Self::Syscall => EncodingFamily::Register,
            Self::Ori
            | Self::Addi
            | Self::Addiu
            | Self::Sltiu
            | Self::Beq
            | Self::Bne
            | Self::Lw
            | Self::Lui
            | Self::Sw => EncodingFamily::Immediate,
            Self::J | Self::Jal => EncodingFamily::Jump,
        }
    }

    /// The timing class used for cycle accounting.
    ///
    /// LUI counts as a load.
    #[must_use]
    pub const fn timing_class(self) -> TimingClass {
        match self {
            Self::And
            | Self::Or
            | Self::Ori
            | Self::Add
            | Self::Addu
            | Self::Sll
            | Self::Srl
            | Self::Sra
            | Self::Sub
            | Self::Sltu
            | Self::Addi
            | Self::Addiu
            | Self::Sltiu => TimingClass::Register,
            Self::Beq | Self::Bne => TimingClass::Branch,
            Self::Lw | Self::Lui => TimingClass::Load,
            Self::Sw => TimingClass::Store,
            Self::J | Self::Jr | Self::Jal => TimingClass::Jump,
            Self::Nop => TimingClass::Nop,
            Self::Syscall => TimingClass::Halt,
        }
    }

    /// Fixed cycle cost charged when this operation retires.
    ///
    /// Not-taken branches are cheaper than this static cost suggests; the
    /// executor reports them separately.
    #[must_use]
    pub const fn cycle_cost(self) -> u32 {
        crate::timing::cycle_cost(self.timing_class())
    }

    /// Assembly mnemonic.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Ori => "ori",
            Self::Add => "add",
            Self::Addu => "addu",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Sub => "sub",
            Self::Sltu => "sltu",
            Self::Addi => "addi",
            Self::Addiu => "addiu",
            Self::Sltiu => "sltiu",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Lw => "lw",
            Self::Lui => "lui",
            Self::Sw => "sw",
            Self::J => "j",
            Self::Jr => "jr",
            Self::Jal => "jal",
            Self::Nop => "nop",
            Self::Syscall => "syscall",
        }
    }
}

/// Single source-of-truth decode key table.
///
/// NOP is deliberately absent: its all-zero word shares the zero function
/// code with SLL, so the decoder special-cases the literal zero word
/// instead of looking it up.
pub const ENCODING_KEY_TABLE: &[(u32, Operation)] = &[
    (0x24, Operation::And),
    (0x25, Operation::Or),
    (0x3400_0000, Operation::Ori),
    (0x20, Operation::Add),
    (0x21, Operation::Addu),
    (0x00, Operation::Sll),
    (0x02, Operation::Srl),
    (0x03, Operation::Sra),
    (0x22, Operation::Sub),
    (0x2B, Operation::Sltu),
    (0x2000_0000, Operation::Addi),
    (0x2400_0000, Operation::Addiu),
    (0x2C00_0000, Operation::Sltiu),
    (0x1000_0000, Operation::Beq),
    (0x1400_0000, Operation::Bne),
    (0x8C00_0000, Operation::Lw),
    (0x3C00_0000, Operation::Lui),
    (0xAC00_0000, Operation::Sw),
    (0x0800_0000, Operation::J),
    (0x08, Operation::Jr),
    (0x0C00_0000, Operation::Jal),
    (0xFC00_0000, Operation::Syscall),
];

/// Looks up an operation by its decode key.
///
/// `None` means no catalog entry claims the key.
#[must_use]
pub fn lookup_encoding_key(key: u32) -> Option<Operation> {
    ENCODING_KEY_TABLE
        .iter()
        .find_map(|(entry_key, op)| (*entry_key == key).then_some(*op))
}
