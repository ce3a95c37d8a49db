//! Machine state owned by the simulation driver.
//!
//! The core never owns registers or memory; it receives exclusive mutable
//! access for the duration of one instruction's execution.

/// Number of general-purpose registers in the register file.
pub const REGISTER_COUNT: usize = 32;

/// Register receiving the return address during jump-and-link.
pub const LINK_REGISTER: usize = 31;

/// Default program-start base address.
pub const DEFAULT_PC_START: i32 = 0;

/// Ordered register file of 32 signed 32-bit words.
///
/// Register 0 is conventionally held at zero by surrounding tooling; the
/// core does not enforce the convention.
pub type RegisterFile = [i32; REGISTER_COUNT];

/// Immutable per-run configuration supplied by the loader/linker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreConfig {
    /// Program-start base address. Jump-and-link targets are resolved
    /// relative to it, and the driver begins fetching from it.
    pub pc_start: i32,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            pc_start: DEFAULT_PC_START,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, LINK_REGISTER, REGISTER_COUNT};

    #[test]
    fn link_register_is_the_last_register() {
        assert_eq!(LINK_REGISTER, REGISTER_COUNT - 1);
    }

    #[test]
    fn default_config_starts_at_address_zero() {
        assert_eq!(CoreConfig::default().pc_start, 0);
    }
}
