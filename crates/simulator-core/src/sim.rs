//! Fetch/decode/execute driver with run statistics.
//!
//! The simulator owns the register file, the word-addressed memory image,
//! and the program counter, and hands the core exclusive mutable access
//! for one instruction at a time. Loading an image and choosing the
//! program-start address remain the caller's responsibility.

#![allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]

use crate::decoder::Decoder;
use crate::execute::{execute, ExecStatus, PcUpdate};
use crate::fault::SimError;
use crate::state::{CoreConfig, RegisterFile, REGISTER_COUNT};

/// Width of one instruction in bytes; the default PC advance.
pub const INSTRUCTION_BYTES: i32 = 4;

/// Aggregate statistics for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Instructions retired, the halt instruction included.
    pub instructions: u64,
    /// Simulated cycles consumed.
    pub cycles: u64,
    /// Conditional branches that evaluated not-taken.
    pub branches_not_taken: u64,
}

/// Outcome of a single fetch/decode/execute step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction retired; fetching continues.
    Retired,
    /// The program requested termination.
    Halted,
}

/// Owns machine state and drives the fetch loop over a loaded word image.
#[derive(Debug, Clone)]
pub struct Simulator {
    regs: RegisterFile,
    memory: Vec<i32>,
    pc: i32,
    config: CoreConfig,
    stats: RunStats,
}

impl Simulator {
    /// Creates a simulator over a loaded memory image.
    ///
    /// Registers start zeroed and fetching begins at `config.pc_start`.
    #[must_use]
    pub fn new(memory: Vec<i32>, config: CoreConfig) -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
            memory,
            pc: config.pc_start,
            config,
            stats: RunStats::default(),
        }
    }

    /// The register file.
    #[must_use]
    pub const fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    /// Mutable access to the register file, for initial state setup.
    pub const fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    /// The memory image.
    #[must_use]
    pub fn memory(&self) -> &[i32] {
        &self.memory
    }

    /// Mutable access to the memory image.
    pub fn memory_mut(&mut self) -> &mut [i32] {
        &mut self.memory
    }

    /// The current program counter.
    #[must_use]
    pub const fn pc(&self) -> i32 {
        self.pc
    }

    /// Statistics accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> RunStats {
        self.stats
    }

    /// Executes the instruction at the current PC.
    ///
    /// # Errors
    ///
    /// [`SimError::PcOutOfBounds`] when the PC leaves the image,
    /// [`SimError::Decode`] when the fetched word matches no operation,
    /// and [`SimError::Exec`] when the apply step faults.
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        let word = self.fetch()?;
        let op = Decoder::decode(word)?;
        let result = execute(
            op,
            word,
            &mut self.regs,
            &mut self.memory,
            self.pc,
            &self.config,
        )?;

        self.stats.instructions += 1;
        self.stats.cycles += u64::from(result.cycles);

        match result.status {
            ExecStatus::Halted => return Ok(StepOutcome::Halted),
            ExecStatus::BranchNotTaken => self.stats.branches_not_taken += 1,
            ExecStatus::Normal => {}
        }

        self.pc = match result.pc {
            PcUpdate::Advance => self.pc.wrapping_add(INSTRUCTION_BYTES),
            PcUpdate::Redirect(target) => target,
        };

        Ok(StepOutcome::Retired)
    }

    /// Runs until the program halts.
    ///
    /// # Errors
    ///
    /// Propagates the first decode or execution fault; see [`Self::step`].
    pub fn run(&mut self) -> Result<RunStats, SimError> {
        loop {
            if self.step()? == StepOutcome::Halted {
                return Ok(self.stats);
            }
        }
    }

    // The image is word-addressed while the PC counts bytes in strides of
    // four.
    fn fetch(&self) -> Result<u32, SimError> {
        if self.pc < 0 {
            return Err(SimError::PcOutOfBounds { pc: self.pc });
        }
        let index = (self.pc / INSTRUCTION_BYTES) as usize;
        self.memory
            .get(index)
            .map(|word| *word as u32)
            .ok_or(SimError::PcOutOfBounds { pc: self.pc })
    }
}
