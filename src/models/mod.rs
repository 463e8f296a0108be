//! Address and network value types.
//!
//! - [`Address`] - IPv4/IPv6 host address with bitwise and arithmetic operations
//! - [`NetworkAddress`] - address plus CIDR prefix, with subnet math
//! - [`Family`] - the address family tag
//!
//! The per-family grammars stay private; values only cross the crate boundary
//! as [`Address`] and [`NetworkAddress`].
//!
//! ```compile_fail
//! let bits: u32 = cidr_math::models::ipv4::parse("10.0.0.1").unwrap();
//! ```

mod address;
mod family;
mod ipv4;
mod ipv6;
mod network;

// Re-export public types
pub use address::Address;
pub use family::Family;
pub use network::NetworkAddress;
