use std::net::Ipv4Addr;

/// An inclusive range of IPv4 addresses.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Ipv4Range {
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
}

impl Ipv4Range {
    pub fn single(addr: Ipv4Addr) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    pub fn count(&self) -> u64 {
        u64::from(u32::from(self.end)) - u64::from(u32::from(self.start)) + 1
    }
}

/// A set of ranges kept sorted by `start` so membership is a binary search.
#[derive(Debug, Default, Clone)]
pub struct Ipv4Ranges {
    ranges: Vec<Ipv4Range>,
}

impl Ipv4Ranges {
    pub fn new(mut ranges: Vec<Ipv4Range>) -> Self {
        ranges.sort_by_key(|r| r.start);
        Self { ranges }
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let mut start = 0;
        let mut end = self.ranges.len();
        while start < end {
            let mid = (start + end) / 2;
            let range = &self.ranges[mid];
            if range.end < addr {
                start = mid + 1;
            } else if range.start > addr {
                end = mid;
            } else {
                return true;
            }
        }
        false
    }

    /// Total number of addresses covered, overlaps counted twice.
    pub fn count(&self) -> u64 {
        self.ranges.iter().map(Ipv4Range::count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &Vec<Ipv4Range> {
        &self.ranges
    }
}
