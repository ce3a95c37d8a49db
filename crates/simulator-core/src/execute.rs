//! Per-operation execution semantics.
//!
//! [`execute`] applies exactly one decoded operation to the register file,
//! memory image, and program counter, then reports the cycle cost and any
//! out-of-band status. The default PC advance belongs to the caller's
//! fetch loop; the executor only redirects for control flow.

#![allow(
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]

use crate::encoding::Operation;
use crate::fault::ExecFault;
use crate::fields;
use crate::state::{CoreConfig, RegisterFile, LINK_REGISTER};
use crate::timing::{cycle_cost, TimingClass};

/// Program-counter disposition after one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PcUpdate {
    /// The driver's default advance applies.
    Advance,
    /// Control transfers to the contained address.
    Redirect(i32),
}

/// Out-of-band condition reported alongside a retired instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecStatus {
    /// Nothing to report.
    Normal,
    /// A conditional branch evaluated not-taken; the PC was left alone.
    /// Reported exactly once per such branch so the driver can account
    /// for it.
    BranchNotTaken,
    /// The program requested termination. A control signal, not an error.
    Halted,
}

/// Result of applying one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecResult {
    /// Program-counter disposition.
    pub pc: PcUpdate,
    /// Cycles consumed by this instruction.
    pub cycles: u32,
    /// Status for the driver's accounting.
    pub status: ExecStatus,
}

impl ExecResult {
    const fn retired(op: Operation) -> Self {
        Self {
            pc: PcUpdate::Advance,
            cycles: cycle_cost(op.timing_class()),
            status: ExecStatus::Normal,
        }
    }

    const fn redirect(op: Operation, target: i32) -> Self {
        Self {
            pc: PcUpdate::Redirect(target),
            cycles: cycle_cost(op.timing_class()),
            status: ExecStatus::Normal,
        }
    }

    const fn halted(op: Operation) -> Self {
        Self {
            pc: PcUpdate::Advance,
            cycles: cycle_cost(op.timing_class()),
            status: ExecStatus::Halted,
        }
    }
}

#[derive(Clone, Copy)]
enum AluOp {
    And,
    Or,
    Add,
    Sub,
    Sltu,
}

#[derive(Clone, Copy)]
enum ShiftOp {
    Left,
    RightLogical,
    RightArithmetic,
}

#[derive(Clone, Copy)]
enum ImmOp {
    Ori,
    Addi,
    Addiu,
    Sltiu,
    Lui,
}

#[derive(Clone, Copy)]
enum BranchOp {
    Eq,
    Ne,
}

/// Applies `op`'s semantics for `word` against the machine state.
///
/// The register file and memory image are borrowed exclusively for this
/// single instruction; `pc` is the address the word was fetched from.
/// `config` supplies the program-start base used by jump-and-link.
///
/// # Errors
///
/// [`ExecFault::MemoryOutOfBounds`] when a load or store resolves to a
/// word index outside `memory`. No partial state change is visible in
/// that case.
pub fn execute(
    op: Operation,
    word: u32,
    regs: &mut RegisterFile,
    memory: &mut [i32],
    pc: i32,
    config: &CoreConfig,
) -> Result<ExecResult, ExecFault> {
    match op {
        Operation::And => Ok(apply_alu(op, word, regs, AluOp::And)),
        Operation::Or => Ok(apply_alu(op, word, regs, AluOp::Or)),
        Operation::Add => Ok(apply_alu(op, word, regs, AluOp::Add)),
        Operation::Sub => Ok(apply_alu(op, word, regs, AluOp::Sub)),
        Operation::Sltu => Ok(apply_alu(op, word, regs, AluOp::Sltu)),
        // ADDU retires without writing any state.
        Operation::Addu => Ok(ExecResult::retired(op)),
        Operation::Sll => Ok(apply_shift(op, word, regs, ShiftOp::Left)),
        Operation::Srl => Ok(apply_shift(op, word, regs, ShiftOp::RightLogical)),
        Operation::Sra => Ok(apply_shift(op, word, regs, ShiftOp::RightArithmetic)),
        Operation::Ori => Ok(apply_immediate(op, word, regs, ImmOp::Ori)),
        Operation::Addi => Ok(apply_immediate(op, word, regs, ImmOp::Addi)),
        Operation::Addiu => Ok(apply_immediate(op, word, regs, ImmOp::Addiu)),
        Operation::Sltiu => Ok(apply_immediate(op, word, regs, ImmOp::Sltiu)),
        Operation::Lui => Ok(apply_immediate(op, word, regs, ImmOp::Lui)),
        Operation::Lw => {
            let index = data_index(word, regs, memory.len())?;
            regs[fields::rt(word)] = memory[index];
            Ok(ExecResult::retired(op))
        }
        Operation::Sw => {
            let index = data_index(word, regs, memory.len())?;
            memory[index] = regs[fields::rt(word)];
            Ok(ExecResult::retired(op))
        }
        Operation::Beq => Ok(apply_branch(op, word, regs, pc, BranchOp::Eq)),
        Operation::Bne => Ok(apply_branch(op, word, regs, pc, BranchOp::Ne)),
        Operation::J => Ok(ExecResult::redirect(
            op,
            fields::sign_extend_jump_target(fields::jump_target(word)),
        )),
        Operation::Jr => Ok(ExecResult::redirect(op, regs[fields::rs(word)])),
        Operation::Jal => {
            // The link register receives the current PC, not PC + 4.
            regs[LINK_REGISTER] = pc;
            let target = fields::sign_extend_jump_target(fields::jump_target(word));
            Ok(ExecResult::redirect(op, config.pc_start.wrapping_add(target)))
        }
        Operation::Nop => Ok(ExecResult::retired(op)),
        Operation::Syscall => Ok(ExecResult::halted(op)),
    }
}

fn apply_alu(op: Operation, word: u32, regs: &mut RegisterFile, alu: AluOp) -> ExecResult {
    let lhs = regs[fields::rs(word)];
    let rhs = regs[fields::rt(word)];
    regs[fields::rd(word)] = match alu {
        AluOp::And => lhs & rhs,
        AluOp::Or => lhs | rhs,
        AluOp::Add => lhs.wrapping_add(rhs),
        AluOp::Sub => lhs.wrapping_sub(rhs),
        AluOp::Sltu => i32::from((lhs as u32) < (rhs as u32)),
    };
    ExecResult::retired(op)
}

fn apply_shift(op: Operation, word: u32, regs: &mut RegisterFile, shift: ShiftOp) -> ExecResult {
    let value = regs[fields::rt(word)];
    let shamt = fields::shamt(word);
    regs[fields::rd(word)] = match shift {
        ShiftOp::Left => value << shamt,
        ShiftOp::RightLogical => shift_right_zero_fill(value, shamt),
        ShiftOp::RightArithmetic => value >> shamt,
    };
    ExecResult::retired(op)
}

// Zero-fill on top of the host arithmetic shift: when the pre-shift sign
// bit was set, the vacated high bits are cleared down to bit (32 - shamt).
const fn shift_right_zero_fill(value: i32, shamt: u32) -> i32 {
    let shifted = value >> shamt;
    if value < 0 && shamt > 0 {
        shifted & !(i32::MIN >> (shamt - 1))
    } else {
        shifted
    }
}

fn apply_immediate(op: Operation, word: u32, regs: &mut RegisterFile, imm_op: ImmOp) -> ExecResult {
    let base = regs[fields::rs(word)];
    let imm = fields::immediate(word);
    regs[fields::rt(word)] = match imm_op {
        // ORI uses the raw, non-sign-extended immediate.
        ImmOp::Ori => base | imm,
        ImmOp::Addi => base.wrapping_add(fields::sign_extend_immediate(imm)),
        // Unsigned-width add, truncated back to 32 bits.
        ImmOp::Addiu => {
            (base as u32).wrapping_add(fields::sign_extend_immediate(imm) as u32) as i32
        }
        // The comparison immediate is not sign-extended.
        ImmOp::Sltiu => i32::from((base as u32) < (imm as u32)),
        ImmOp::Lui => imm << 16,
    };
    ExecResult::retired(op)
}

fn apply_branch(
    op: Operation,
    word: u32,
    regs: &RegisterFile,
    pc: i32,
    cmp: BranchOp,
) -> ExecResult {
    let lhs = regs[fields::rs(word)];
    let rhs = regs[fields::rt(word)];
    let taken = match cmp {
        BranchOp::Eq => lhs == rhs,
        BranchOp::Ne => lhs != rhs,
    };

    if taken {
        // BEQ applies the raw offset; BNE sign-extends it.
        let offset = match cmp {
            BranchOp::Eq => fields::immediate(word),
            BranchOp::Ne => fields::sign_extend_immediate(fields::immediate(word)),
        };
        ExecResult::redirect(op, pc.wrapping_add(offset))
    } else {
        ExecResult {
            pc: PcUpdate::Advance,
            cycles: cycle_cost(TimingClass::BranchNotTaken),
            status: ExecStatus::BranchNotTaken,
        }
    }
}

// Word index = raw 16-bit immediate + base register. No sign extension
// and no byte-level addressing.
fn data_index(word: u32, regs: &RegisterFile, len: usize) -> Result<usize, ExecFault> {
    let index = i64::from(fields::immediate(word)) + i64::from(regs[fields::rs(word)]);
    if index < 0 || index >= len as i64 {
        return Err(ExecFault::MemoryOutOfBounds { index, len });
    }
    Ok(index as usize)
}
