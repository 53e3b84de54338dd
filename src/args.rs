use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Single-dash long flags accepted for compatibility with older invocations.
const SINGLE_DASH_LONGS: &[&str] = &["min", "fs"];

#[derive(Parser, Debug)]
#[command(
    name = "subparent",
    about = "Aggregate subdomains into parent domains that show up often enough to enumerate further",
    version,
    long_about = None
)]
pub struct Args {
    /// Input file with one subdomain per line
    #[arg(short = 'i', long = "input", value_parser = NonEmptyStringValueParser::new())]
    pub input: String,

    /// Output file path (defaults to stdout)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Minimum number of labels AND minimum hit count a parent domain needs
    #[arg(
        short = 'm',
        long = "min",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub min: i64,

    /// Comma-separated subdomain labels to ignore in count (e.g. 'www,dev')
    #[arg(short = 'f', long = "fs", default_value = "")]
    pub fs: String,

    /// File with additional labels to ignore, one per line
    #[arg(long)]
    pub filter_file: Option<PathBuf>,

    /// Print a run summary to stderr
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parses the process arguments, accepting `-min`/`-fs` as `--min`/`--fs`.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_flags(std::env::args_os()))
    }
}

/// Rewrites `-min`, `-fs` and their `=value` forms to the double-dash
/// spelling clap expects. Tokens after `--` are left alone.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut past_terminator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if past_terminator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                past_terminator = true;
                return arg;
            }
            let Some(rest) = text.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_LONGS.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["subparent", "-i", "subs.txt"]).unwrap();
        assert_eq!(args.input, "subs.txt");
        assert_eq!(args.output, None);
        assert_eq!(args.min, 1);
        assert_eq!(args.fs, "");
        assert!(args.filter_file.is_none());
        assert!(!args.stats);
        assert!(!args.verbose);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "subparent",
            "--input",
            "in.txt",
            "-o",
            "out.txt",
            "--min",
            "3",
            "--fs",
            "www,dev",
            "--stats",
        ])
        .unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert_eq!(args.min, 3);
        assert_eq!(args.fs, "www,dev");
        assert!(args.stats);
    }

    #[test]
    fn test_negative_min() {
        let args = Args::try_parse_from(["subparent", "-i", "in.txt", "--min", "-2"]).unwrap();
        assert_eq!(args.min, -2);
    }

    fn parse_normalized(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(normalize_flags(argv.iter().copied()))
    }

    #[test]
    fn test_single_dash_long_flags() {
        let args = parse_normalized(&["subparent", "-i", "subs.txt", "-min", "2", "-fs", "www"])
            .unwrap();
        assert_eq!(args.min, 2);
        assert_eq!(args.fs, "www");

        let args =
            parse_normalized(&["subparent", "-i", "subs.txt", "-min=3", "-fs=www,dev"]).unwrap();
        assert_eq!(args.min, 3);
        assert_eq!(args.fs, "www,dev");
    }

    #[test]
    fn test_single_dash_negative_min() {
        let args = parse_normalized(&["subparent", "-i", "subs.txt", "-min", "-1"]).unwrap();
        assert_eq!(args.min, -1);
    }

    #[test]
    fn test_trailing_fs_without_value_is_rejected() {
        assert!(parse_normalized(&["subparent", "-i", "subs.txt", "-fs"]).is_err());
    }

    #[test]
    fn test_normalize_leaves_other_tokens() {
        let argv = normalize_flags(["subparent", "-min", "-m", "4", "--fs", "x", "--", "-fs"]);
        let expected: Vec<OsString> = ["subparent", "--min", "-m", "4", "--fs", "x", "--", "-fs"]
            .into_iter()
            .map(OsString::from)
            .collect();
        assert_eq!(argv, expected);
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        assert!(Args::try_parse_from(["subparent"]).is_err());
    }

    #[test]
    fn test_empty_input_is_usage_error() {
        assert!(Args::try_parse_from(["subparent", "-i", ""]).is_err());
    }
}
