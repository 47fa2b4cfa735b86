//! Dynamic color: from a seed to a full Material scheme
//!
//! A [`DynamicScheme`] derives six tonal palettes from a seed according to
//! a [`Variant`] and [`Platform`], then resolves each [`Role`] to a color
//! using the rules of a [`SpecVersion`]:
//!
//! - **2021**: 55 roles. Contrast is enforced against each role's
//!   background, and tone-delta pairs are solved together from their
//!   nearer member outwards.
//! - **2025**: adds the four accent `*_dim` roles. Surfaces and accents
//!   depend on the platform, neutral roles carry chroma multipliers, and
//!   tone-delta pairs read their partner's resolved tone.
//!
//! Only the neutral, tonal spot, expressive and vibrant variants have 2025
//! rules; the others always resolve with the 2021 rules.
//!
//! Roles refer to each other only by [`Role`] id. Resolution is lazy and
//! memoised per scheme, and each version's role graph is checked for
//! cycles when its catalog is first used.

mod calculation;
mod catalog;
mod contrast_curve;
mod palettes;
mod role;
mod scheme;
mod spec_2021;
mod spec_2025;
mod tone_delta_pair;
mod variant;

pub use calculation::{
    enable_light_foreground, foreground_tone, tone_allows_light_foreground,
    tone_prefers_light_foreground,
};
pub use catalog::PaletteKind;
pub use contrast_curve::ContrastCurve;
pub use role::{Role, UnknownRole};
pub use scheme::{DynamicScheme, SchemeParams};
pub use tone_delta_pair::{DeltaConstraint, ToneDeltaPair, TonePolarity};
pub use variant::{Platform, SpecVersion, UnknownOption, Variant};
