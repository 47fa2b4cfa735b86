//! Exact population counting

use std::collections::BTreeMap;

use super::{Quantizer, QuantizerResult};
use crate::cancel::{CancellationToken, Cancelled};
use crate::color::Argb;

/// Counts how often each distinct pixel occurs, including translucent ones.
pub fn quantize_map(pixels: &[Argb]) -> BTreeMap<Argb, u32> {
    let mut counts = BTreeMap::new();
    for &pixel in pixels {
        *counts.entry(pixel).or_insert(0) += 1;
    }
    counts
}

/// A quantizer that performs no reduction: every distinct pixel is a color.
///
/// `max_colors` is ignored.
pub struct QuantizerMap;

impl Quantizer for QuantizerMap {
    fn quantize(
        &self,
        pixels: &[Argb],
        _max_colors: usize,
        _cancel: Option<&CancellationToken>,
    ) -> Result<QuantizerResult, Cancelled> {
        Ok(QuantizerResult {
            color_to_count: quantize_map(pixels),
        })
    }
}
