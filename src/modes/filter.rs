use rustc_hash::FxHashMap;

use crate::error::TransformError;

/// Aggregates ports per address and keeps only the `(address, port)` pairs of
/// addresses with strictly fewer than `port_limit` observed ports.
///
/// An address hitting the limit usually means a honeypot or a middlebox
/// answering on everything, so all of its pairs are dropped.
///
/// The address is an opaque string key, not validated as an IP. Output is in
/// first-seen address order, ports in input order within an address.
pub fn filter_lines(lines: &[&str], port_limit: usize) -> Result<Vec<String>, TransformError> {
    let mut ports_by_addr: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    let mut addr_order: Vec<&str> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }

        let (addr, port) = line
            .split_once(':')
            .filter(|(addr, port)| !addr.is_empty() && !port.is_empty())
            .ok_or_else(|| TransformError::MalformedLine {
                line_number: i + 1,
                line: (*line).to_string(),
            })?;

        let ports = ports_by_addr.entry(addr).or_default();
        if ports.is_empty() {
            addr_order.push(addr);
        }
        ports.push(port);
    }

    let mut out = Vec::new();
    for addr in addr_order {
        let ports = &ports_by_addr[addr];
        if ports.len() < port_limit {
            for port in ports {
                out.push(format!("{addr}:{port}"));
            }
        }
    }

    Ok(out)
}
