//! Human-readable rendering of instruction words for diagnostics.

use crate::decoder::Decoder;
use crate::encoding::Operation;
use crate::fields;

/// Disassembles one instruction word.
///
/// Words that decode to no operation render as `.word 0x…`.
#[must_use]
pub fn disassemble(word: u32) -> String {
    let Ok(op) = Decoder::decode(word) else {
        return format!(".word {word:#010x}");
    };

    let mnemonic = op.mnemonic();
    let rs = fields::rs(word);
    let rt = fields::rt(word);
    let rd = fields::rd(word);

    match op {
        Operation::Nop | Operation::Syscall => mnemonic.to_owned(),
        Operation::And
        | Operation::Or
        | Operation::Add
        | Operation::Addu
        | Operation::Sub
        | Operation::Sltu => format!("{mnemonic} ${rd}, ${rs}, ${rt}"),
        Operation::Sll | Operation::Srl | Operation::Sra => {
            format!("{mnemonic} ${rd}, ${rt}, {}", fields::shamt(word))
        }
        Operation::Jr => format!("{mnemonic} ${rs}"),
        Operation::Ori | Operation::Addi | Operation::Addiu | Operation::Sltiu => {
            format!("{mnemonic} ${rt}, ${rs}, {}", fields::immediate(word))
        }
        Operation::Lui => format!("{mnemonic} ${rt}, {:#x}", fields::immediate(word)),
        Operation::Lw | Operation::Sw => {
            format!("{mnemonic} ${rt}, {}(${rs})", fields::immediate(word))
        }
        Operation::Beq | Operation::Bne => {
            format!("{mnemonic} ${rs}, ${rt}, {}", fields::immediate(word))
        }
        Operation::J | Operation::Jal => format!(
            "{mnemonic} {:#x}",
            fields::sign_extend_jump_target(fields::jump_target(word))
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::disassemble;

    #[test]
    fn register_format_renders_destination_first() {
        // add $3, $1, $2
        let word = (1 << 21) | (2 << 16) | (3 << 11) | 0x20;
        assert_eq!(disassemble(word), "add $3, $1, $2");
    }

    #[test]
    fn shift_renders_rt_and_shamt() {
        // sll $3, $7, 5
        let word = (7 << 16) | (3 << 11) | (5 << 6);
        assert_eq!(disassemble(word), "sll $3, $7, 5");
    }

    #[test]
    fn load_renders_offset_base_form() {
        let word = 0x8C00_0000 | (1 << 21) | (2 << 16) | 7;
        assert_eq!(disassemble(word), "lw $2, 7($1)");
    }

    #[test]
    fn bare_forms_render_mnemonic_only() {
        assert_eq!(disassemble(0), "nop");
        assert_eq!(disassemble(0xFC00_0000), "syscall");
    }

    #[test]
    fn undecodable_words_render_as_raw_data() {
        assert_eq!(disassemble(0x4000_0000), ".word 0x40000000");
    }
}
