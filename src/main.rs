//! nobg - remove checkerboard and flat-color backgrounds from icon images.

mod cli;
mod config;
mod image;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::NobgConfig;

use crate::image::background::{Removal, remove_background};

/// Image read when no input path is given.
pub const DEFAULT_INPUT: &str = "icon.png";
/// Image written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "icon.nobg.png";
/// Config file looked up from the working directory upward.
pub const DEFAULT_CONFIG: &str = "nobg.toml";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = NobgConfig::load(&cli)?;
    if let Some(path) = &config.config_path {
        debug!("config"; "loaded {}", path.display());
    }

    let params = config.classifier.params();
    let removal = remove_background(config.input(), config.output(), &params)?;
    report(&removal);

    log!("nobg"; "saved to {}", config.output().display());
    Ok(())
}

/// Print classification statistics in verbose mode.
fn report(removal: &Removal) {
    debug!("image"; "{}x{}", removal.width, removal.height);
    debug!("sample"; "{} background exemplar colors", removal.exemplars);
    debug!(
        "gate";
        "icon radius {:.2}px, protected within {:.2}px",
        removal.radius,
        removal.gate_radius
    );
    debug!(
        "mask";
        "cleared {} of {} eligible pixels",
        removal.cleared,
        removal.eligible
    );
}
