use std::fs;
use std::path::Path;

use image::{ImageError, ImageFormat, ImageReader, RgbaImage};

use crate::image::background::detect::sample_exemplars;
use crate::image::background::error::BackgroundError;
use crate::image::background::mask::{PixelClassifier, RadialGate, apply_background_mask};

/// Side of the top-left square sampled for background exemplars.
pub const DEFAULT_SAMPLE_WINDOW: u32 = 20;
/// Icon radius as a fraction of the shorter half-axis.
pub const DEFAULT_RADIUS_SCALE: f64 = 0.95;
/// Protected zone as a fraction of the icon radius.
pub const DEFAULT_GATE_SCALE: f64 = 0.7;
/// Per-channel RGB distance below which a pixel matches an exemplar.
pub const DEFAULT_THRESHOLD: u8 = 30;

/// Tuning knobs of the background classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundParams {
    pub sample_window: u32,
    pub radius_scale: f64,
    pub gate_scale: f64,
    pub threshold: u8,
}

impl Default for BackgroundParams {
    fn default() -> Self {
        Self {
            sample_window: DEFAULT_SAMPLE_WINDOW,
            radius_scale: DEFAULT_RADIUS_SCALE,
            gate_scale: DEFAULT_GATE_SCALE,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// What a removal run did to the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    pub width: u32,
    pub height: u32,
    /// Unique colors sampled from the corner window.
    pub exemplars: usize,
    /// Estimated icon radius, in pixels.
    pub radius: f64,
    /// Radius of the protected zone around the center, in pixels.
    pub gate_radius: f64,
    /// Pixels outside the protected zone.
    pub eligible: usize,
    /// Pixels made transparent.
    pub cleared: usize,
}

/// Remove background from an image file and write the result to `output`.
pub fn remove_background(
    input: &Path,
    output: &Path,
    params: &BackgroundParams,
) -> Result<Removal, BackgroundError> {
    let decode_err = |err| BackgroundError::Decode(input.to_path_buf(), err);
    // Sniff the format from content; the extension may be missing or wrong.
    let img = ImageReader::open(input)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|err| decode_err(ImageError::IoError(err)))?
        .decode()
        .map_err(decode_err)?;
    let mut rgba = img.into_rgba8();
    let removal = clear_background(&mut rgba, params);

    let write_err = |err| BackgroundError::Write(output.to_path_buf(), err);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|err| write_err(ImageError::IoError(err)))?;
    }

    rgba.save_with_format(output, output_format(output))
        .map_err(write_err)?;
    Ok(removal)
}

/// Make every background pixel of `img` transparent, in place.
pub fn clear_background(img: &mut RgbaImage, params: &BackgroundParams) -> Removal {
    let (width, height) = img.dimensions();
    let exemplars = sample_exemplars(img, params.sample_window);
    let gate = RadialGate::new(width, height, params.radius_scale, params.gate_scale);
    let classifier = PixelClassifier {
        gate,
        exemplars: &exemplars,
        threshold: params.threshold,
    };
    let stats = apply_background_mask(img, &classifier);

    Removal {
        width,
        height,
        exemplars: exemplars.len(),
        radius: gate.radius(),
        gate_radius: gate.min_distance_sq().sqrt(),
        eligible: stats.eligible,
        cleared: stats.cleared,
    }
}

/// Lossless, alpha-capable format implied by the extension, PNG otherwise.
fn output_format(path: &Path) -> ImageFormat {
    match ImageFormat::from_path(path) {
        Ok(format @ (ImageFormat::Png | ImageFormat::WebP)) => format,
        _ => ImageFormat::Png,
    }
}
