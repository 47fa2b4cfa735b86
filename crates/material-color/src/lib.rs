// Colorimetric constants are kept at their published precision.
#![allow(clippy::excessive_precision, clippy::needless_range_loop)]

//! material-color: Material dynamic color from images and seed colors
//!
//! The crate turns pixels into a Material theme in three steps:
//!
//! 1. [`quantize`] reduces the pixels to a small weighted palette
//! 2. [`score`] ranks that palette and picks the seed color
//! 3. [`dynamic`] derives six tonal palettes from the seed and resolves
//!    every theme [`Role`] against contrast and tone-delta constraints
//!
//! Underneath sits the [`color`] kernel: sRGB, CIELAB, CAM16 and the HCT
//! space with its gamut-mapping solver.
//!
//! # Quick Start
//!
//! [`SchemeGenerator`] runs the whole pipeline:
//!
//! ```
//! use material_color::{Argb, Role, SchemeGenerator, Source, Variant};
//!
//! let theme = SchemeGenerator::new()
//!     .variant(Variant::Vibrant)
//!     .dark(true)
//!     .generate(&Source::hex("#4285F4"))
//!     .unwrap();
//!
//! assert_eq!(theme.seed(), Argb(0xFF4285F4));
//! assert!(theme.color(Role::PrimaryDim).is_some());
//! ```
//!
//! For finer control, build a [`DynamicScheme`] from an [`Hct`] directly.

pub mod api;
pub mod blend;
pub mod cancel;
pub mod color;
pub mod contrast;
pub mod dislike;
pub mod dynamic;
pub mod math;
pub mod palettes;
pub mod quantize;
pub mod score;
pub mod temperature;

#[cfg(test)]
mod domain_tests;

pub use api::{GenerateError, GenerateOptions, GeneratedScheme, SchemeGenerator, Source};
pub use blend::harmonize;
pub use cancel::{CancellationToken, Cancelled};
pub use color::{Argb, Cam16, Hct, HexStyle, ParseColorError, ViewingConditions};
pub use dislike::{fix_if_disliked, is_disliked};
pub use dynamic::{DynamicScheme, Platform, Role, SchemeParams, SpecVersion, Variant};
pub use palettes::TonalPalette;
pub use quantize::{Quantizer, QuantizerCelebi, QuantizerResult, QuantizerWu};
pub use score::{score, ScoreOptions};
pub use temperature::TemperatureCache;
