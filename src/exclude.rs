use std::{fs, net::Ipv4Addr, path::Path, str::FromStr};

use eyre::eyre;

use crate::ranges::{Ipv4Range, Ipv4Ranges};

/// Addresses that are never worth keeping in a cleaned asset list: public
/// resolvers and loopback/zero addresses that show up in scan exports.
pub const DEFAULT_DENY: [Ipv4Addr; 6] = [
    Ipv4Addr::new(114, 114, 114, 114),
    Ipv4Addr::new(8, 8, 8, 8),
    Ipv4Addr::new(0, 0, 0, 1),
    Ipv4Addr::new(0, 0, 0, 0),
    Ipv4Addr::new(127, 0, 0, 1),
    Ipv4Addr::new(1, 1, 1, 1),
];

/// Builds the clean-mode deny set: the built-in list, plus the entries from
/// `extra_file` if one was given.
pub fn deny_list(extra_file: Option<&Path>) -> eyre::Result<Ipv4Ranges> {
    let mut ranges: Vec<Ipv4Range> = DEFAULT_DENY.iter().copied().map(Ipv4Range::single).collect();

    if let Some(path) = extra_file {
        ranges.extend(parse(&fs::read_to_string(path)?)?);
    }

    Ok(Ipv4Ranges::new(ranges))
}

fn parse(input: &str) -> eyre::Result<Vec<Ipv4Range>> {
    let mut ranges = Vec::new();

    for line in input.lines() {
        // strip everything after the first # so comments can't be mistaken
        // for range syntax
        let line = match line.find('#') {
            Some(i) => &line[..i],
            None => line,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        // can be either like 0.0.0.0-0.0.0.0 or 0.0.0.0/32

        let is_slash = line.contains('/');
        let is_hyphen = line.contains('-');

        if is_slash && is_hyphen {
            return Err(eyre!(
                "Invalid deny range: {} (cannot contain both - and /)",
                line
            ));
        }

        let range = if is_slash {
            let (ip, mask) = line
                .split_once('/')
                .ok_or_else(|| eyre!("Invalid deny range: {}", line))?;

            let mask = mask.parse::<u8>()?;
            if mask > 32 {
                return Err(eyre!(
                    "Invalid deny range: {} (mask must be at most 32)",
                    line
                ));
            }

            // host bits: all 32 for /0, none for /32
            let mask_bits = u32::MAX.checked_shr(u32::from(mask)).unwrap_or(0);

            let ip_u32 = u32::from(Ipv4Addr::from_str(ip)?);

            let addr_start = Ipv4Addr::from(ip_u32 & !mask_bits);
            let addr_end = Ipv4Addr::from(ip_u32 | mask_bits);

            Ipv4Range {
                start: addr_start,
                end: addr_end,
            }
        } else if is_hyphen {
            let (ip_start, ip_end) = line
                .split_once('-')
                .ok_or_else(|| eyre!("Invalid deny range: {}", line))?;

            let ip_start = Ipv4Addr::from_str(ip_start)?;
            let ip_end = Ipv4Addr::from_str(ip_end)?;

            if ip_start > ip_end {
                return Err(eyre!(
                    "Invalid deny range: {} (start cannot be greater than end)",
                    line
                ));
            }

            Ipv4Range {
                start: ip_start,
                end: ip_end,
            }
        } else {
            Ipv4Range::single(Ipv4Addr::from_str(line)?)
        };

        ranges.push(range);
    }

    Ok(ranges)
}
