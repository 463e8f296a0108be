//! IPv4 dotted-decimal grammar.
//!
//! Works on raw `u32` values; [`Address`](super::Address) wraps them with the
//! family tag.

use crate::error::{AddressError, Result};
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Four dot-separated groups of one to three ASCII digits.
static DOTTED_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_regex() -> &'static Regex {
    DOTTED_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex")
    })
}

/// Parse `ddd.ddd.ddd.ddd` into its 32-bit value.
///
/// Each group must be decimal in `0..=255`; anything else, including a bare
/// integer, fails with [`AddressError::Parse`].
pub fn parse(text: &str) -> Result<u32> {
    let caps = get_dotted_regex().captures(text).ok_or_else(|| {
        log::debug!("Rejected IPv4 text '{text}'");
        AddressError::Parse(text.to_string())
    })?;

    let mut bits = 0u32;
    for group in caps.iter().skip(1) {
        let group = group.map(|m| m.as_str()).unwrap_or_default();
        let octet: u8 = group.parse().map_err(|_| {
            log::debug!("Octet '{group}' out of range in '{text}'");
            AddressError::Parse(text.to_string())
        })?;
        bits = (bits << 8) | u32::from(octet);
    }
    Ok(bits)
}

/// Render as four decimal octets.
pub fn format(bits: u32) -> String {
    Ipv4Addr::from(bits).to_string()
}
