use std::net::Ipv4Addr;

use tracing::warn;

use crate::ranges::Ipv4Ranges;

/// Keeps an address line iff it parses as IPv4, is not in a private range,
/// and is not in the deny set. Lines that don't parse (including IPv6) are
/// skipped with a diagnostic.
pub fn clean_lines(lines: &[&str], deny: &Ipv4Ranges) -> Vec<String> {
    let mut kept = Vec::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let Ok(addr) = line.parse::<Ipv4Addr>() else {
            warn!("skipping unparseable address {line:?}");
            continue;
        };

        if addr.is_private() || deny.contains(addr) {
            continue;
        }

        kept.push((*line).to_string());
    }

    kept
}
