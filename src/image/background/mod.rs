//! Remove checkerboard and flat-color backgrounds from icons.
//!
//! Colors sampled from the top-left corner serve as background exemplars.
//! Pixels outside a protected disk around the image center that fall within
//! a per-channel RGB threshold of any exemplar become fully transparent.

mod color;
mod detect;
mod error;
mod mask;
mod process;

pub use process::{
    BackgroundParams, DEFAULT_GATE_SCALE, DEFAULT_RADIUS_SCALE, DEFAULT_SAMPLE_WINDOW,
    DEFAULT_THRESHOLD, Removal, remove_background,
};
