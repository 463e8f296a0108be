//! Error type shared by the address and network models.

use thiserror::Error;

/// Failures raised while parsing or combining addresses and networks.
///
/// Every variant carries the offending input so callers can report it
/// without poking at internal state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Text that does not match the address or CIDR grammar.
    #[error("Unable to parse '{0}'")]
    Parse(String),
    /// Prefix length outside `0..=max` for the resolved family.
    #[error("Invalid CIDR '{0}'")]
    InvalidPrefix(String),
    /// Operation between values of different address families.
    #[error("Incompatible types ('{left}' and '{right}')")]
    TypeMismatch { left: String, right: String },
    /// Arithmetic result that does not fit the family bit width.
    #[error("Result out of range: {0}")]
    ArithmeticRange(String),
}

pub type Result<T> = std::result::Result<T, AddressError>;
