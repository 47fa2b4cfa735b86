//! Color quantization
//!
//! Reduces an arbitrary pixel population to a handful of representative
//! colors with their populations. The pipeline uses [`QuantizerCelebi`]:
//!
//! 1. [`QuantizerWu`] splits the RGB cube along the axes of greatest
//!    variance, which is fast and gives good starting clusters
//! 2. weighted k-means in CIELAB refines those clusters until points stop
//!    moving
//!
//! # Architecture
//!
//! Every quantizer implements the [`Quantizer`] trait. Only opaque pixels
//! take part in clustering; [`QuantizerMap`] is the exception and simply
//! counts every pixel it sees.
//!
//! # Example
//!
//! ```
//! use material_color::{Argb, Quantizer, QuantizerCelebi};
//!
//! let pixels = vec![Argb(0xFFFF0000); 10];
//! let result = QuantizerCelebi.quantize(&pixels, 128, None).unwrap();
//! assert_eq!(result.color_to_count.get(&Argb(0xFFFF0000)), Some(&10));
//! ```

mod celebi;
mod map;
mod wsmeans;
mod wu;

use std::collections::BTreeMap;

use crate::cancel::{CancellationToken, Cancelled};
use crate::color::Argb;

pub use celebi::QuantizerCelebi;
pub use map::{quantize_map, QuantizerMap};
pub use wsmeans::quantize_wsmeans;
pub use wu::QuantizerWu;

/// Colors found by a quantizer and the number of input pixels each stands for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantizerResult {
    pub color_to_count: BTreeMap<Argb, u32>,
}

impl QuantizerResult {
    /// Sum of all populations.
    pub fn total_population(&self) -> u64 {
        self.color_to_count.values().map(|&count| count as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.color_to_count.is_empty()
    }
}

/// A color quantization algorithm.
pub trait Quantizer {
    /// Reduces `pixels` to at most `max_colors` colors.
    ///
    /// Returns `Err(Cancelled)` when `cancel` is set at one of the
    /// algorithm's checkpoints.
    fn quantize(
        &self,
        pixels: &[Argb],
        max_colors: usize,
        cancel: Option<&CancellationToken>,
    ) -> Result<QuantizerResult, Cancelled>;
}

/// Opaque pixels only, in input order.
pub(crate) fn opaque_pixels(pixels: &[Argb]) -> Vec<Argb> {
    pixels.iter().copied().filter(|p| p.is_opaque()).collect()
}
