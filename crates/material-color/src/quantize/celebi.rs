//! Wu followed by weighted k-means

use tracing::debug;

use super::wsmeans::quantize_wsmeans;
use super::wu::QuantizerWu;
use super::{opaque_pixels, Quantizer, QuantizerResult};
use crate::cancel::{CancellationToken, Cancelled};
use crate::color::Argb;

/// The quantizer used for source-color extraction.
///
/// Wu's boxes seed k-means, which then pulls the centres toward the actual
/// pixel mass. Output populations sum to the number of opaque input pixels.
pub struct QuantizerCelebi;

impl Quantizer for QuantizerCelebi {
    fn quantize(
        &self,
        pixels: &[Argb],
        max_colors: usize,
        cancel: Option<&CancellationToken>,
    ) -> Result<QuantizerResult, Cancelled> {
        let opaque = opaque_pixels(pixels);
        let wu = QuantizerWu.quantize(&opaque, max_colors, cancel)?;
        let starting_clusters: Vec<Argb> = wu.color_to_count.keys().copied().collect();
        debug!(
            pixels = opaque.len(),
            starting_clusters = starting_clusters.len(),
            "refining wu clusters"
        );
        let color_to_count = quantize_wsmeans(&opaque, &starting_clusters, max_colors, cancel)?;
        Ok(QuantizerResult { color_to_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantize(pixels: &[Argb], max_colors: usize) -> QuantizerResult {
        QuantizerCelebi.quantize(pixels, max_colors, None).unwrap()
    }

    #[test]
    fn test_one_red() {
        let result = quantize(&[Argb(0xFFFF0000)], 128);
        assert_eq!(result.color_to_count.len(), 1);
        assert_eq!(result.color_to_count[&Argb(0xFFFF0000)], 1);
    }

    #[test]
    fn test_primaries_stay_distinct() {
        let pixels = [
            Argb(0xFFFF0000),
            Argb(0xFFFF0000),
            Argb(0xFF00FF00),
            Argb(0xFF0000FF),
        ];
        let result = quantize(&pixels, 128);
        assert_eq!(result.color_to_count.len(), 3);
        assert_eq!(result.color_to_count[&Argb(0xFFFF0000)], 2);
        assert_eq!(result.color_to_count[&Argb(0xFF00FF00)], 1);
        assert_eq!(result.color_to_count[&Argb(0xFF0000FF)], 1);
    }

    #[test]
    fn test_mass_is_preserved_for_gradients() {
        let pixels: Vec<Argb> = (0..64u32)
            .flat_map(|i| {
                let v = (i * 4) as u8;
                [Argb::from_rgb(v, 255 - v, 40), Argb::from_rgb(200, v, v / 3)]
            })
            .chain([Argb(0x10FFFFFF), Argb(0x7F000000)])
            .collect();
        let result = quantize(&pixels, 16);
        assert!(result.color_to_count.len() <= 16);
        assert_eq!(result.total_population(), 128);
    }

    #[test]
    fn test_fully_transparent_input_is_empty() {
        assert!(quantize(&[Argb(0x00FF0000), Argb(0x00000000)], 128).is_empty());
    }

    #[test]
    fn test_cancellation_short_circuits() {
        let token = CancellationToken::new();
        token.cancel();
        let result = QuantizerCelebi.quantize(&[Argb(0xFF00FF00)], 128, Some(&token));
        assert_eq!(result, Err(Cancelled));
    }
}
