//! CIDR network address: a host [`Address`] paired with a prefix length.
//!
//! The address need not be the network identifier; `192.168.1.100/24` is a
//! valid value describing that host's place in `192.168.1.0/24`. All derived
//! values (mask, start, end) are computed on demand.

use super::{Address, Family};
use crate::error::{AddressError, Result};
use num_bigint::{BigInt, BigUint, Sign};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// IPv4 or IPv6 network in CIDR notation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NetworkAddress {
    address: Address,
    prefix: u8,
}

impl NetworkAddress {
    /// Create a network from an address and prefix length.
    ///
    /// # Errors
    /// [`AddressError::InvalidPrefix`] unless `0 <= prefix <= max_prefix` for
    /// the address family.
    pub fn new(address: Address, prefix: i32) -> Result<NetworkAddress> {
        let max = address.family().max_prefix();
        match u8::try_from(prefix) {
            Ok(prefix) if prefix <= max => Ok(NetworkAddress { address, prefix }),
            _ => {
                log::debug!(
                    "Prefix {prefix} out of range 0..={max} for {}",
                    address.family()
                );
                Err(AddressError::InvalidPrefix(format!("{address}/{prefix}")))
            }
        }
    }

    /// Create a network from text.
    ///
    /// Without `prefix`, `text` must be `"<address>/<digits>"`. With `prefix`,
    /// `text` is the bare address.
    ///
    /// # Examples
    /// ```
    /// use cidr_math::models::NetworkAddress;
    /// let net = NetworkAddress::factory("10.0.0.0/8", None).unwrap();
    /// assert_eq!(net, NetworkAddress::factory("10.0.0.0", Some(8)).unwrap());
    /// ```
    pub fn factory(text: &str, prefix: Option<i32>) -> Result<NetworkAddress> {
        let (address, prefix) = match prefix {
            Some(prefix) => (text, prefix),
            None => {
                let (address, suffix) = text.split_once('/').ok_or_else(|| {
                    log::debug!("Missing CIDR notation on '{text}'");
                    AddressError::Parse(text.to_string())
                })?;
                (address, parse_prefix(text, suffix)?)
            }
        };
        NetworkAddress::new(Address::parse(address)?, prefix)
    }

    /// Mask with the top `prefix` bits set for the given family.
    ///
    /// # Examples
    /// ```
    /// use cidr_math::{Address, Family, NetworkAddress};
    /// let mask = NetworkAddress::generate_subnet_mask(Family::V4, 24).unwrap();
    /// assert_eq!(mask, Address::parse("255.255.255.0").unwrap());
    /// assert!(NetworkAddress::generate_subnet_mask(Family::V4, 33).is_err());
    /// ```
    pub fn generate_subnet_mask(family: Family, prefix: u8) -> Result<Address> {
        if prefix > family.max_prefix() {
            log::debug!("Mask prefix {prefix} too long for {family}");
            return Err(AddressError::InvalidPrefix(format!("{family}/{prefix}")));
        }
        Ok(NetworkAddress::mask_for(family, prefix))
    }

    /// Mask for a prefix already known to be in range.
    fn mask_for(family: Family, prefix: u8) -> Address {
        Address::from_bits(family, family.mask_bits(prefix))
    }

    /// The all-ones address of the family.
    pub fn global_netmask(family: Family) -> Address {
        Address::from_bits(family, family.max_bits())
    }

    /// The host address the network was built from.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// CIDR prefix length.
    pub const fn prefix_length(&self) -> u8 {
        self.prefix
    }

    /// Family of the network's address.
    pub const fn family(&self) -> Family {
        self.address.family()
    }

    /// Longest prefix for this family (32 or 128).
    pub const fn max_prefix(&self) -> u8 {
        self.family().max_prefix()
    }

    /// Mask for this network's prefix, same as
    /// [`generate_subnet_mask`](NetworkAddress::generate_subnet_mask).
    pub fn subnet_mask(&self) -> Address {
        // prefix was range-checked in `new`
        NetworkAddress::mask_for(self.family(), self.prefix)
    }

    /// Lowest address in the network.
    pub fn network_start(&self) -> Address {
        self.address.combine(&self.subnet_mask(), |addr, mask| addr & mask)
    }

    /// Highest address in the network.
    ///
    /// Sets the host bits of `address` directly, so it holds whether or not
    /// `address` is the network identifier.
    pub fn network_end(&self) -> Address {
        let global = NetworkAddress::global_netmask(self.family());
        self.subnet_mask()
            .combine(&global, |mask, all| mask ^ all)
            .combine(&self.address, |host, addr| host | addr)
    }

    /// Number of addresses in the network, `2^(max_prefix - prefix)`.
    pub fn address_count(&self) -> BigUint {
        BigUint::from(1u8) << usize::from(self.max_prefix() - self.prefix)
    }

    /// The address `offset` positions into the network.
    ///
    /// `from_start` defaults to the sign of `offset`: a non-negative offset
    /// counts up from the start, a negative one counts down from the end.
    /// Counting up happens only from the start with a non-negative offset;
    /// every other combination subtracts `|offset|` from the chosen end.
    ///
    /// # Errors
    /// [`AddressError::ArithmeticRange`] if the result leaves the family's
    /// address space. Landing outside the network itself is not an error.
    pub fn address_in_network(
        &self,
        offset: impl Into<BigInt>,
        from_start: Option<bool>,
    ) -> Result<Address> {
        let offset: BigInt = offset.into();
        let positive = offset.sign() != Sign::Minus;
        let from_start = from_start.unwrap_or(positive);

        let point = if from_start {
            self.network_start()
        } else {
            self.network_end()
        };

        let magnitude = BigInt::from(offset.magnitude().clone());
        if positive && from_start {
            point.add(magnitude)
        } else {
            point.subtract(magnitude)
        }
    }

    /// Whether the address is the network start.
    pub fn is_network_identifier(&self) -> bool {
        self.address == self.network_start()
    }

    /// This network re-expressed with its start address.
    pub fn network_identifier(&self) -> NetworkAddress {
        NetworkAddress {
            address: self.network_start(),
            prefix: self.prefix,
        }
    }

    fn check_types(&self, other: &NetworkAddress) -> Result<()> {
        if self.family() != other.family() {
            log::debug!("Incompatible networks {self} and {other}");
            return Err(AddressError::TypeMismatch {
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        Ok(())
    }

    /// Whether the network with the longer prefix lies entirely inside the
    /// one with the shorter prefix.
    ///
    /// The operands are ordered by prefix first, so the answer does not
    /// depend on which side is the receiver. Equal-prefix networks only match
    /// when they cover the same range.
    pub fn shares_subnet_space(&self, other: &NetworkAddress) -> Result<bool> {
        self.check_types(other)?;

        let (first, other) = if self.prefix > other.prefix {
            (other, self)
        } else {
            (self, other)
        };

        Ok(first.network_start() <= other.network_start()
            && first.network_end() >= other.network_end())
    }

    /// Whether `other` lies inside this network.
    pub fn encloses_subnet(&self, other: &NetworkAddress) -> Result<bool> {
        self.check_types(other)?;

        if self.prefix > other.prefix {
            return Ok(false);
        }
        self.shares_subnet_space(other)
    }

    /// Whether `ip` falls between the network start and end, inclusive.
    pub fn encloses_address(&self, ip: &Address) -> Result<bool> {
        if self.family() != ip.family() {
            log::debug!("Incompatible network {self} and address {ip}");
            return Err(AddressError::TypeMismatch {
                left: self.to_string(),
                right: ip.to_string(),
            });
        }
        Ok(self.network_start() <= *ip && *ip <= self.network_end())
    }

    /// Compare by address first, then by prefix length.
    pub fn compare_to(&self, other: &NetworkAddress) -> Result<Ordering> {
        self.check_types(other)?;
        Ok(self
            .address
            .compare_to(&other.address)?
            .then(self.prefix.cmp(&other.prefix)))
    }

    /// The network that starts right after this one.
    ///
    /// `prefix` picks the size of the result (defaults to this network's).
    /// Moving to a smaller network starts after this network's end; an equal
    /// or larger one starts after the end of the enclosing network of that
    /// size.
    ///
    /// # Errors
    /// [`AddressError::ArithmeticRange`] past the top of the address space,
    /// [`AddressError::InvalidPrefix`] if `prefix` is too long.
    pub fn next_network(&self, prefix: Option<u8>) -> Result<NetworkAddress> {
        let new_prefix = i32::from(prefix.unwrap_or(self.prefix));
        let anchor = if new_prefix <= i32::from(self.prefix) {
            self.address
        } else {
            // smaller subnet
            self.network_end()
        };
        let current = NetworkAddress::new(anchor, new_prefix)?;
        let start = current.network_end().add(1)?;
        log::trace!("next_network({self}, /{new_prefix}) starts at {start}");
        NetworkAddress::new(start, new_prefix)
    }
}

/// Parse the CIDR suffix; only ASCII digits are accepted.
fn parse_prefix(text: &str, suffix: &str) -> Result<i32> {
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        log::debug!("Malformed CIDR suffix '{suffix}' in '{text}'");
        return Err(AddressError::Parse(text.to_string()));
    }
    // all digits, so the only failure left is a value too large for any family
    suffix
        .parse()
        .map_err(|_| AddressError::InvalidPrefix(text.to_string()))
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

impl FromStr for NetworkAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<NetworkAddress> {
        NetworkAddress::factory(s, None)
    }
}

impl Serialize for NetworkAddress {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NetworkAddress {
    fn deserialize<D>(deserializer: D) -> std::result::Result<NetworkAddress, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkAddress::factory(&s, None).map_err(de::Error::custom)
    }
}
