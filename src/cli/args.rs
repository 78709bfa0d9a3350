//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Remove checkerboard and flat-color backgrounds from icon images
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input image path (default: icon.png)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output image path (default: icon.nobg.png)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Classifier config file (default: nobg.toml, if present)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print sampling and classification statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["nobg"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_positional_paths() {
        let cli = Cli::try_parse_from(["nobg", "in.png", "out/icon.png", "-v", "-C", "x.toml"])
            .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("in.png")));
        assert_eq!(cli.output, Some(PathBuf::from("out/icon.png")));
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_short_flags() {
        assert!(Cli::try_parse_from(["nobg", "--verbose"]).unwrap().verbose);
        let err = Cli::try_parse_from(["nobg", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_color_choice() {
        let cli = Cli::try_parse_from(["nobg", "--color", "never"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(Cli::try_parse_from(["nobg", "--color", "sometimes"]).is_err());
    }
}
