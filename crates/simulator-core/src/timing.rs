//! Fixed cycle-cost accounting for executed instructions.
//!
//! A timing class is a throughput-statistics category, not a pipeline
//! stage: each class maps to one fixed cost per retired instruction.

/// Timing classes with fixed per-instruction cycle costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimingClass {
    /// Register and immediate ALU operations.
    Register,
    /// Memory read (and upper-immediate load).
    Load,
    /// Memory write.
    Store,
    /// Conditional branch whose predicate held.
    Branch,
    /// Conditional branch whose predicate did not hold. No operation
    /// carries this class statically; the executor selects it when it
    /// reports a not-taken branch.
    BranchNotTaken,
    /// Unconditional control transfer.
    Jump,
    /// The no-operation instruction.
    Nop,
    /// The program-termination instruction.
    Halt,
}

/// Cycle cost for one executed instruction of the given timing class.
///
/// Costs follow the classic multicycle datapath breakdown: four cycles for
/// ALU forms, five for a load, four for a store, three for branches and
/// jumps, one for no-op and halt.
#[must_use]
pub const fn cycle_cost(class: TimingClass) -> u32 {
    match class {
        TimingClass::Register | TimingClass::Store => 4,
        TimingClass::Load => 5,
        TimingClass::Branch | TimingClass::BranchNotTaken | TimingClass::Jump => 3,
        TimingClass::Nop | TimingClass::Halt => 1,
    }
}
