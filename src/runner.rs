use std::{
    fs,
    io::{BufWriter, Write},
};

use crate::{
    config::Config,
    error::TransformError,
    modes::{Mode, cidr, clean, filter, quote},
    ranges::Ipv4Ranges,
};

#[derive(Debug)]
pub struct RunStats {
    pub lines_in: usize,
    pub lines_out: usize,
}

/// Reads the input file, applies the configured mode, and writes the result,
/// creating or truncating the output file. Trailing whitespace on input lines
/// is ignored.
pub fn run(config: &Config, deny: &Ipv4Ranges) -> Result<RunStats, TransformError> {
    let text = fs::read_to_string(&config.input)?;
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();

    let out_lines = match config.mode {
        Mode::Filter => filter::filter_lines(&lines, config.port_limit)?,
        Mode::Clean => clean::clean_lines(&lines, deny),
        Mode::Quote => quote::quote_lines(&lines),
        Mode::Cidr => cidr::aggregate_prefixes(&lines),
    };

    let output = fs::File::create(&config.output)?;
    let mut writer = BufWriter::new(output);
    for line in &out_lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;

    Ok(RunStats {
        lines_in: lines.len(),
        lines_out: out_lines.len(),
    })
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use super::*;
    use crate::exclude;

    fn config(mode: Mode, input: PathBuf, output: PathBuf) -> Config {
        Config {
            mode,
            input,
            output,
            port_limit: 100,
            exclude_file: None,
            logging_dir: None,
        }
    }

    fn run_on(mode: Mode, input_text: &str) -> (RunStats, String) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, input_text).unwrap();

        let deny = exclude::deny_list(None).unwrap();
        let stats = run(&config(mode, input, output.clone()), &deny).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        (stats, written)
    }

    #[test]
    fn test_filter_end_to_end() {
        let (stats, out) = run_on(Mode::Filter, "1.2.3.4:80\n1.2.3.4:443\n5.6.7.8:22\n");
        assert_eq!(out, "1.2.3.4:80\n1.2.3.4:443\n5.6.7.8:22\n");
        assert_eq!(stats.lines_in, 3);
        assert_eq!(stats.lines_out, 3);
    }

    #[test]
    fn test_clean_end_to_end() {
        let (_, out) = run_on(Mode::Clean, "192.168.0.1\n8.8.8.8\n203.0.113.9\n");
        assert_eq!(out, "203.0.113.9\n");
    }

    #[test]
    fn test_quote_end_to_end() {
        let (_, out) = run_on(Mode::Quote, "1.2.3.4\n");
        assert_eq!(out, "ip=\"1.2.3.4\"\n");
    }

    #[test]
    fn test_cidr_end_to_end() {
        let input = "1.2.3.1\n1.2.3.2\n1.2.3.3\n1.2.3.4\n1.2.3.5\n4.4.4.4\n";
        let (_, out) = run_on(Mode::Cidr, input);
        assert_eq!(out, "1.2.3.0/24\n");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let (stats, out) = run_on(Mode::Filter, "");
        assert_eq!(out, "");
        assert_eq!(stats.lines_out, 0);
    }

    #[test]
    fn test_output_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "1.2.3.4\n").unwrap();
        fs::write(&output, "stale content that is longer than the new output\n").unwrap();

        let deny = exclude::deny_list(None).unwrap();
        run(&config(Mode::Quote, input, output.clone()), &deny).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "ip=\"1.2.3.4\"\n");
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let deny = exclude::deny_list(None).unwrap();
        let err = run(
            &config(
                Mode::Filter,
                dir.path().join("nope.txt"),
                dir.path().join("out.txt"),
            ),
            &deny,
        )
        .unwrap_err();
        assert!(matches!(err, TransformError::Io(_)));
    }

    #[test]
    fn test_trailing_whitespace_is_tolerated() {
        let (_, out) = run_on(Mode::Filter, "1.2.3.4:80 \t\n");
        assert_eq!(out, "1.2.3.4:80\n");
    }
}
