//! IPv4/IPv6 host and CIDR network value types.
//!
//! Addresses are parsed from text, rendered in canonical form and combined
//! with bitwise and range-checked arithmetic operations. Networks pair an
//! address with a prefix length and derive masks, ranges and containment.
//!
//! ```
//! use cidr_math::{Address, NetworkAddress};
//!
//! let net: NetworkAddress = "192.168.1.100/24".parse().unwrap();
//! assert_eq!(net.network_identifier().to_string(), "192.168.1.0/24");
//! assert!(net.encloses_address(&Address::parse("192.168.1.7").unwrap()).unwrap());
//! ```

pub mod error;
pub mod models;

pub use error::{AddressError, Result};
pub use models::{Address, Family, NetworkAddress};
