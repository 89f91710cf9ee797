//! Command-line argument parsing.
//!
//! The interactive menu needs no arguments; the only option points the
//! program at a non-default configuration file.

use clap::Parser;

/// Command-line arguments for the `termlib` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use termlib_cli::cli_args::Args;
///
/// let args = Args::parse_from(["termlib", "--config-path", "/tmp/termlib.yml"]);
/// assert_eq!(args.config_path.as_deref(), Some("/tmp/termlib.yml"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the configuration file YAML.
    ///
    /// If not provided, defaults to `~/.termlib/config.yml`. A missing file is not an error.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Anything else on the command line. Accepted so stray arguments never stop the menu.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::parse_from(["termlib"]);
        assert!(args.config_path.is_none());
    }

    #[test]
    fn test_short_config_path() {
        let args = Args::parse_from(["termlib", "-c", "~/custom.yml"]);
        assert_eq!(args.config_path, Some("~/custom.yml".to_string()));
    }

    #[test]
    fn test_no_arguments_leaves_nothing_ignored() {
        let args = Args::parse_from(["termlib"]);
        assert!(args.ignored.is_empty());
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let args = Args::try_parse_from(["termlib", "extra", "--verbose", "3"]).unwrap();
        assert!(args.config_path.is_none());
        assert_eq!(args.ignored, vec!["extra", "--verbose", "3"]);
    }

    #[test]
    fn test_config_path_with_extra_arguments() {
        let args = Args::try_parse_from(["termlib", "-c", "/tmp/t.yml", "extra"]).unwrap();
        assert_eq!(args.config_path.as_deref(), Some("/tmp/t.yml"));
        assert_eq!(args.ignored, vec!["extra"]);
    }
}
