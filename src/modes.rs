pub mod cidr;
pub mod clean;
pub mod filter;
pub mod quote;

/// The transform applied to the input file. Parsed from the `--mode` flag
/// with [`std::str::FromStr`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, enum_utils::FromStr)]
pub enum Mode {
    /// Drop every `ip:port` pair of an address with too many open ports.
    #[enumeration(rename = "filter")]
    Filter,
    /// Drop private and deny-listed addresses.
    #[enumeration(rename = "clean")]
    Clean,
    /// Wrap each line in `ip="..."` search-query syntax.
    #[enumeration(rename = "quote")]
    Quote,
    /// Collapse addresses into /24 prefixes that occur often enough.
    #[enumeration(rename = "cidr")]
    Cidr,
}
