//! Color matching for flood fill.
//!
//! Fill matching compares only the R, G and B channels; the alpha channel is
//! ignored when deciding whether a pixel belongs to the region, but the
//! target color's alpha is written verbatim when a pixel is painted.

use image::Rgba;

/// Returns true when two colors match on their R, G and B channels.
///
/// Alpha is deliberately ignored: a region filled from a seed whose alpha
/// differs from the surrounding pixels must still be treated as one region.
#[inline]
pub fn rgb_eq(a: Rgba<u8>, b: Rgba<u8>) -> bool {
    a.0[0] == b.0[0] && a.0[1] == b.0[1] && a.0[2] == b.0[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_colors_match() {
        let c = Rgba([10, 20, 30, 255]);
        assert!(rgb_eq(c, c));
    }

    #[test]
    fn test_alpha_is_ignored() {
        let opaque = Rgba([255, 0, 0, 255]);
        let translucent = Rgba([255, 0, 0, 17]);
        assert!(rgb_eq(opaque, translucent));
    }

    #[test]
    fn test_differing_channels_do_not_match() {
        let red = Rgba([255, 0, 0, 255]);
        assert!(!rgb_eq(red, Rgba([254, 0, 0, 255])));
        assert!(!rgb_eq(red, Rgba([255, 1, 0, 255])));
        assert!(!rgb_eq(red, Rgba([255, 0, 1, 255])));
    }
}
