//! Version-tagged IP host address.
//!
//! An [`Address`] is a fixed-width unsigned value (32 bits for IPv4, 128 for
//! IPv6) plus its [`Family`]. Every operation returns a new value.

use super::{ipv4, ipv6, Family};
use crate::error::{AddressError, Result};
use num_bigint::{BigInt, Sign};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::ops::Not;
use std::str::FromStr;

/// IPv4 or IPv6 host address.
///
/// `Ord` sorts IPv4 before IPv6 and then by value, which is handy for
/// sorting mixed lists. Use [`Address::compare_to`] when the two sides must
/// be the same family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    family: Family,
    bits: u128,
}

impl Address {
    /// IPv4 address from its 32-bit value.
    pub const fn v4(bits: u32) -> Address {
        Address {
            family: Family::V4,
            bits: bits as u128,
        }
    }

    /// IPv6 address from its 128-bit value.
    pub const fn v6(bits: u128) -> Address {
        Address {
            family: Family::V6,
            bits,
        }
    }

    /// Builds an address from raw bits truncated to the family width.
    pub(crate) const fn from_bits(family: Family, bits: u128) -> Address {
        Address {
            family,
            bits: bits & family.max_bits(),
        }
    }

    /// Parse an address, picking the family from the syntax alone.
    ///
    /// Text containing `:` is IPv6, anything else is tried as IPv4.
    pub fn parse(text: &str) -> Result<Address> {
        if text.contains(':') {
            Address::parse_v6(text)
        } else {
            Address::parse_v4(text)
        }
    }

    /// Parse dotted-decimal IPv4 text.
    pub fn parse_v4(text: &str) -> Result<Address> {
        ipv4::parse(text).map(Address::v4)
    }

    /// Parse colon-hex IPv6 text.
    pub fn parse_v6(text: &str) -> Result<Address> {
        ipv6::parse(text).map(Address::v6)
    }

    /// Family of this address.
    pub const fn family(&self) -> Family {
        self.family
    }

    /// Bit width of this address's family (32 or 128).
    pub const fn bit_width(&self) -> u8 {
        self.family.bit_width()
    }

    /// Fails with [`AddressError::TypeMismatch`] unless both share a family.
    pub(crate) fn check_family(&self, other: &Address) -> Result<()> {
        if self.family != other.family {
            log::debug!("Family mismatch between {self} and {other}");
            return Err(AddressError::TypeMismatch {
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        Ok(())
    }

    /// Same-family combination of two values; the family check is the
    /// caller's job.
    pub(crate) fn combine(&self, other: &Address, op: impl Fn(u128, u128) -> u128) -> Address {
        debug_assert_eq!(self.family, other.family);
        Address::from_bits(self.family, op(self.bits, other.bits))
    }

    /// Bitwise AND with a same-family address.
    pub fn bitwise_and(&self, other: &Address) -> Result<Address> {
        self.check_family(other)?;
        Ok(self.combine(other, |a, b| a & b))
    }

    /// Bitwise OR with a same-family address.
    pub fn bitwise_or(&self, other: &Address) -> Result<Address> {
        self.check_family(other)?;
        Ok(self.combine(other, |a, b| a | b))
    }

    /// Bitwise XOR with a same-family address.
    pub fn bitwise_xor(&self, other: &Address) -> Result<Address> {
        self.check_family(other)?;
        Ok(self.combine(other, |a, b| a ^ b))
    }

    /// Complement within the family width.
    pub fn bitwise_not(&self) -> Address {
        Address::from_bits(self.family, !self.bits)
    }

    /// Move forward by `offset` (negative moves backward).
    ///
    /// # Errors
    /// [`AddressError::ArithmeticRange`] if the result leaves the family's
    /// address space; there is no wraparound.
    pub fn add(&self, offset: impl Into<BigInt>) -> Result<Address> {
        self.offset_by(offset.into())
    }

    /// Move backward by `offset` (negative moves forward).
    pub fn subtract(&self, offset: impl Into<BigInt>) -> Result<Address> {
        let offset: BigInt = offset.into();
        self.offset_by(-offset)
    }

    /// Add the value of another address of the same family.
    pub fn add_address(&self, other: &Address) -> Result<Address> {
        self.check_family(other)?;
        self.add(other.bits)
    }

    /// Subtract the value of another address of the same family.
    pub fn subtract_address(&self, other: &Address) -> Result<Address> {
        self.check_family(other)?;
        self.subtract(other.bits)
    }

    fn offset_by(&self, offset: BigInt) -> Result<Address> {
        let result = BigInt::from(self.bits) + &offset;
        match u128::try_from(&result) {
            Ok(bits) if bits <= self.family.max_bits() => Ok(Address {
                family: self.family,
                bits,
            }),
            _ => {
                let (op, magnitude) = match offset.sign() {
                    Sign::Minus => ('-', -offset),
                    _ => ('+', offset),
                };
                log::debug!("{self} {op} {magnitude} leaves the {} range", self.family);
                Err(AddressError::ArithmeticRange(format!(
                    "{self} {op} {magnitude}"
                )))
            }
        }
    }

    /// Unsigned magnitude comparison of two same-family addresses.
    pub fn compare_to(&self, other: &Address) -> Result<Ordering> {
        self.check_family(other)?;
        Ok(self.bits.cmp(&other.bits))
    }
}

impl Not for Address {
    type Output = Address;

    fn not(self) -> Address {
        self.bitwise_not()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.family {
            Family::V4 => write!(f, "{}", ipv4::format(self.bits as u32)),
            Family::V6 => write!(f, "{}", ipv6::format(self.bits)),
        }
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Address> {
        Address::parse(s)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        Address::v4(u32::from(addr))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Address {
        Address::v6(u128::from(addr))
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Address {
        match addr {
            IpAddr::V4(addr) => addr.into(),
            IpAddr::V6(addr) => addr.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> IpAddr {
        match addr.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(addr.bits as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(addr.bits)),
        }
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(de::Error::custom)
    }
}
