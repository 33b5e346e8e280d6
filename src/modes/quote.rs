/// Wraps every line in `ip="..."` so an asset list can be pasted straight
/// into a search-engine query. No validation, every line is wrapped.
pub fn quote_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| format!("ip=\"{line}\"")).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_wraps_every_line() {
        assert_eq!(
            quote_lines(&["1.2.3.4", "5.6.7.8"]),
            vec![r#"ip="1.2.3.4""#, r#"ip="5.6.7.8""#]
        );
    }

    #[test]
    fn test_no_validation() {
        assert_eq!(
            quote_lines(&["not-an-ip", ""]),
            vec![r#"ip="not-an-ip""#, r#"ip="""#]
        );
    }
}
