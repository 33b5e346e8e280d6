use std::net::Ipv4Addr;

use rustc_hash::FxHashMap;
use tracing::warn;

/// A /24 needs at least this many addresses in the input before it's worth
/// scanning the whole block.
pub const MIN_PREFIX_COUNT: usize = 5;

/// Counts addresses per /24 prefix and emits `a.b.c.0/24` for every prefix
/// seen [`MIN_PREFIX_COUNT`] or more times, in first-seen prefix order.
/// Unparseable lines are skipped with a diagnostic.
pub fn aggregate_prefixes(lines: &[&str]) -> Vec<String> {
    let mut counts: FxHashMap<(u8, u8, u8), usize> = FxHashMap::default();
    let mut prefix_order: Vec<(u8, u8, u8)> = Vec::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let Ok(addr) = line.parse::<Ipv4Addr>() else {
            warn!("skipping unparseable address {line:?}");
            continue;
        };

        let [a, b, c, _] = addr.octets();
        let count = counts.entry((a, b, c)).or_default();
        if *count == 0 {
            prefix_order.push((a, b, c));
        }
        *count += 1;
    }

    prefix_order
        .into_iter()
        .filter(|prefix| counts[prefix] >= MIN_PREFIX_COUNT)
        .map(|(a, b, c)| format!("{a}.{b}.{c}.0/24"))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        // 5 lines in 1.2.3.0/24 (duplicates count), 3 in 4.4.4.0/24
        let lines = [
            "1.2.3.4", "1.2.3.4", "1.2.3.4", "1.2.3.4", "1.2.3.9", "4.4.4.1", "4.4.4.2", "4.4.4.3",
        ];

        assert_eq!(aggregate_prefixes(&lines), vec!["1.2.3.0/24"]);
    }

    #[test]
    fn test_four_occurrences_is_not_enough() {
        let lines = ["7.7.7.1", "7.7.7.2", "7.7.7.3", "7.7.7.4"];
        assert_eq!(aggregate_prefixes(&lines), Vec::<String>::new());
    }

    #[test]
    fn test_first_seen_prefix_order() {
        let mut lines = Vec::new();
        for i in 0..5 {
            lines.push(format!("9.9.9.{i}"));
            lines.push(format!("8.8.0.{i}"));
        }
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();

        assert_eq!(aggregate_prefixes(&refs), vec!["9.9.9.0/24", "8.8.0.0/24"]);
    }

    #[test]
    fn test_unparseable_lines_are_skipped() {
        let lines = ["1.2.3.1", "garbage", "1.2.3.2", "1.2.3.3", "1.2.3.4", "1.2.3.5"];
        assert_eq!(aggregate_prefixes(&lines), vec!["1.2.3.0/24"]);
    }
}
