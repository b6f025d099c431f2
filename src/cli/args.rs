use crate::history::DEFAULT_CAPACITY;
use crate::session::Mode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Command line options for the multicalc tool
pub struct Options {
    /// Mode to start in: basic or scientific
    #[arg(short, long, default_value = "scientific")]
    pub mode: Mode,

    /// Number of history records to keep
    #[arg(long, default_value_t = DEFAULT_CAPACITY, value_parser = parse_history_size)]
    pub history_size: usize,

    /// JSON file to load history from at startup and save it to on exit
    #[arg(long)]
    pub history_file: Option<PathBuf>,

    /// Evaluate a single expression, print the result and exit
    #[arg(short, long)]
    pub eval: Option<String>,

    /// Log every transition
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_history_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("'{}' is not a positive number", s)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::parse_from(["multicalc"]);
        assert_eq!(options.mode, Mode::Scientific);
        assert_eq!(options.history_size, 20);
        assert_eq!(options.eval, None);
        assert_eq!(options.history_file, None);
        assert!(!options.verbose);
    }

    #[test]
    fn test_options() {
        let options = Options::parse_from([
            "multicalc",
            "--mode",
            "basic",
            "--history-size",
            "5",
            "--history-file",
            "history.json",
            "--eval",
            "2π",
            "-v",
        ]);
        assert_eq!(options.mode, Mode::Basic);
        assert_eq!(options.history_size, 5);
        assert_eq!(options.history_file, Some(PathBuf::from("history.json")));
        assert_eq!(options.eval.as_deref(), Some("2π"));
        assert!(options.verbose);
    }

    #[test]
    fn test_bad_options() {
        assert!(Options::try_parse_from(["multicalc", "--history-size", "0"]).is_err());
        assert!(Options::try_parse_from(["multicalc", "--mode", "finance"]).is_err());
    }
}
