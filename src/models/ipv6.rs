//! IPv6 colon-hex grammar.

use super::ipv4;
use crate::error::{AddressError, Result};
use itertools::Itertools;

/// Maximum length for an IPv6 subnet mask (128 bits).
pub const MAX_LENGTH: u8 = 128;

const GROUPS: usize = 8;

/// Parse colon-hex text into its 128-bit value.
///
/// Accepts 1-4 hex digits per hextet, a single `::` standing in for one or
/// more zero hextets, and a dotted IPv4 block in place of the last two.
pub fn parse(text: &str) -> Result<u128> {
    let hextets = parse_hextets(text).ok_or_else(|| {
        log::debug!("Rejected IPv6 text '{text}'");
        AddressError::Parse(text.to_string())
    })?;
    Ok(hextets
        .iter()
        .fold(0u128, |bits, h| (bits << 16) | u128::from(*h)))
}

fn parse_hextets(text: &str) -> Option<Vec<u16>> {
    match text.split_once("::") {
        Some((head, tail)) => {
            if tail.contains("::") {
                return None;
            }
            let head = parse_groups(head, false)?;
            let tail = parse_groups(tail, true)?;
            // `::` must replace at least one group
            if head.len() + tail.len() >= GROUPS {
                return None;
            }
            let zeros = GROUPS - head.len() - tail.len();
            Some(
                head.into_iter()
                    .chain(std::iter::repeat(0).take(zeros))
                    .chain(tail)
                    .collect(),
            )
        }
        None => {
            let groups = parse_groups(text, true)?;
            (groups.len() == GROUPS).then_some(groups)
        }
    }
}

/// Parse a `:`-separated run of hextets; an empty run yields no groups.
fn parse_groups(run: &str, allow_ipv4_tail: bool) -> Option<Vec<u16>> {
    if run.is_empty() {
        return Some(Vec::new());
    }
    let pieces: Vec<&str> = run.split(':').collect();
    let mut groups = Vec::with_capacity(GROUPS);
    for (i, piece) in pieces.iter().enumerate() {
        let last = i + 1 == pieces.len();
        if last && allow_ipv4_tail && piece.contains('.') {
            let bits = ipv4::parse(piece).ok()?;
            groups.push((bits >> 16) as u16);
            groups.push(bits as u16);
        } else {
            if piece.is_empty()
                || piece.len() > 4
                || !piece.chars().all(|c| c.is_ascii_hexdigit())
            {
                return None;
            }
            groups.push(u16::from_str_radix(piece, 16).ok()?);
        }
        if groups.len() > GROUPS {
            return None;
        }
    }
    Some(groups)
}

/// Render as eight zero-padded lowercase hextets, never compressed.
pub fn format(bits: u128) -> String {
    (0..GROUPS)
        .rev()
        .map(|i| format!("{:04x}", (bits >> (i * 16)) as u16))
        .join(":")
}
