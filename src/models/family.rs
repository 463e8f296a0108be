//! Address family tag.

use std::fmt;

/// The two supported address families.
///
/// The family carries the bit width as data, so the CIDR math in
/// [`NetworkAddress`](super::NetworkAddress) is written once for both.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Number of bits in an address of this family (32 or 128).
    pub const fn bit_width(self) -> u8 {
        match self {
            Family::V4 => super::ipv4::MAX_LENGTH,
            Family::V6 => super::ipv6::MAX_LENGTH,
        }
    }

    /// Longest valid prefix, equal to the bit width.
    pub const fn max_prefix(self) -> u8 {
        self.bit_width()
    }

    /// The all-ones value for this family.
    pub const fn max_bits(self) -> u128 {
        match self {
            Family::V4 => u32::MAX as u128,
            Family::V6 => u128::MAX,
        }
    }

    /// Raw mask with the top `prefix` bits set. A prefix past the width
    /// yields the all-ones mask.
    pub(crate) fn mask_bits(self, prefix: u8) -> u128 {
        let right_len = u32::from(self.bit_width().saturating_sub(prefix));
        // shifting a u128 by 128 overflows, /0 is the empty mask
        self.max_bits().checked_shl(right_len).unwrap_or(0) & self.max_bits()
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}
