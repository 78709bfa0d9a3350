use image::Rgba;

/// Whether `pixel` is within `threshold` of `exemplar` on every RGB channel.
///
/// The bound is strict and alpha is not compared.
#[inline]
pub(super) fn rgb_within(pixel: &[u8], exemplar: &Rgba<u8>, threshold: u8) -> bool {
    pixel[0].abs_diff(exemplar[0]) < threshold
        && pixel[1].abs_diff(exemplar[1]) < threshold
        && pixel[2].abs_diff(exemplar[2]) < threshold
}

/// Whether `pixel` is within `threshold` of any exemplar.
#[inline]
pub(super) fn matches_any(pixel: &[u8], exemplars: &[Rgba<u8>], threshold: u8) -> bool {
    exemplars
        .iter()
        .any(|exemplar| rgb_within(pixel, exemplar, threshold))
}
