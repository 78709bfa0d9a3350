use image::{Rgba, RgbaImage};
use rayon::prelude::*;

use crate::image::background::color::matches_any;

/// Fully transparent black, written over every classified background pixel.
pub(super) const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// Circular exclusion zone around the image center.
///
/// Only pixels strictly outside the zone may be reclassified as background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct RadialGate {
    cx: i64,
    cy: i64,
    radius: f64,
    min_distance_sq: f64,
}

impl RadialGate {
    /// Center is `(width / 2, height / 2)` with integer division and
    /// `radius = radius_scale * min(cx, cy)`. The zone spans
    /// `gate_scale * radius` from the center.
    pub(super) fn new(width: u32, height: u32, radius_scale: f64, gate_scale: f64) -> Self {
        let cx = i64::from(width / 2);
        let cy = i64::from(height / 2);
        let radius = cx.min(cy) as f64 * radius_scale;
        let gate = radius * gate_scale;
        Self {
            cx,
            cy,
            radius,
            min_distance_sq: gate * gate,
        }
    }

    #[inline]
    pub(super) fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub(super) fn min_distance_sq(&self) -> f64 {
        self.min_distance_sq
    }

    #[inline]
    fn distance_sq(&self, x: u32, y: u32) -> i64 {
        let dx = i64::from(x) - self.cx;
        let dy = i64::from(y) - self.cy;
        dx * dx + dy * dy
    }

    #[inline]
    pub(super) fn is_eligible(&self, x: u32, y: u32) -> bool {
        self.distance_sq(x, y) as f64 > self.min_distance_sq
    }
}

/// Pixel counts gathered while applying the mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct MaskStats {
    pub(super) eligible: usize,
    pub(super) cleared: usize,
}

impl MaskStats {
    #[inline]
    fn merge(self, other: Self) -> Self {
        Self {
            eligible: self.eligible + other.eligible,
            cleared: self.cleared + other.cleared,
        }
    }
}

/// Outcome of classifying a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PixelClass {
    /// Inside the radial gate; never modified.
    Protected,
    /// Eligible, but no exemplar is close enough.
    Foreground,
    /// Eligible and close to an exemplar.
    Background,
}

pub(super) struct PixelClassifier<'a> {
    pub(super) gate: RadialGate,
    pub(super) exemplars: &'a [Rgba<u8>],
    pub(super) threshold: u8,
}

impl PixelClassifier<'_> {
    #[inline]
    pub(super) fn classify(&self, pixel: &[u8], x: u32, y: u32) -> PixelClass {
        if !self.gate.is_eligible(x, y) {
            PixelClass::Protected
        } else if matches_any(pixel, self.exemplars, self.threshold) {
            PixelClass::Background
        } else {
            PixelClass::Foreground
        }
    }

    fn clear_row(&self, row: &mut [u8], y: u32) -> MaskStats {
        let mut stats = MaskStats::default();
        for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
            match self.classify(pixel, x as u32, y) {
                PixelClass::Protected => {}
                PixelClass::Foreground => stats.eligible += 1,
                PixelClass::Background => {
                    pixel.copy_from_slice(&TRANSPARENT.0);
                    stats.eligible += 1;
                    stats.cleared += 1;
                }
            }
        }
        stats
    }
}

/// Overwrite every background pixel with [`TRANSPARENT`], in place.
///
/// Rows are independent: each pixel is tested against its own input value
/// and the precomputed exemplars, so rows may be processed in any order.
pub(super) fn apply_background_mask(
    img: &mut RgbaImage,
    classifier: &PixelClassifier,
) -> MaskStats {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return MaskStats::default();
    }

    let stride = width as usize * 4;
    let len = width as usize * height as usize;
    let raw: &mut [u8] = img;

    if len >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_exact_mut(stride)
            .enumerate()
            .map(|(y, row)| classifier.clear_row(row, y as u32))
            .reduce(MaskStats::default, MaskStats::merge)
    } else {
        raw.chunks_exact_mut(stride)
            .enumerate()
            .map(|(y, row)| classifier.clear_row(row, y as u32))
            .fold(MaskStats::default(), MaskStats::merge)
    }
}
