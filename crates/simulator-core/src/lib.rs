//! Core instruction-set simulator for a reduced MIPS-style architecture.
//!
//! The core decodes raw 32-bit instruction words into operations from a
//! closed catalog, applies each operation's semantics against a register
//! file, a flat word-addressed memory image, and the program counter, and
//! charges a fixed cycle cost per timing class. Assembling source text,
//! loading program images, and the outer fetch policy belong to external
//! collaborators; [`sim::Simulator`] provides a minimal driver over a
//! loaded image.

/// Operation-agnostic instruction-word field extraction.
pub mod fields;

/// Closed operation catalog with encoding keys, families, and timing classes.
pub mod encoding;
pub use encoding::{lookup_encoding_key, EncodingFamily, Operation, ENCODING_KEY_TABLE};

/// Instruction-word resolution.
pub mod decoder;
pub use decoder::Decoder;

/// Decode and execution fault taxonomy.
pub mod fault;
pub use fault::{DecodeError, ExecFault, SimError};

/// Machine state primitives and per-run configuration.
pub mod state;
pub use state::{CoreConfig, RegisterFile, DEFAULT_PC_START, LINK_REGISTER, REGISTER_COUNT};

/// Fixed cycle-cost accounting.
pub mod timing;
pub use timing::{cycle_cost, TimingClass};

/// Per-operation execution semantics.
pub mod execute;
pub use execute::{execute, ExecResult, ExecStatus, PcUpdate};

/// Fetch/decode/execute driver with run statistics.
pub mod sim;
pub use sim::{RunStats, Simulator, StepOutcome, INSTRUCTION_BYTES};

/// Diagnostic disassembly.
pub mod disasm;
pub use disasm::disassemble;
