//! Color types and conversions
//!
//! - [`Argb`]: packed 8-bit sRGB, the input and output currency
//! - [`LinearRgb`], [`Xyz`], [`Lab`], [`Luv`], [`Oklab`]: intermediate spaces
//! - [`Cam16`] with [`ViewingConditions`]: the appearance model
//! - [`Hct`]: hue, chroma and tone, built on CAM16 and L*

mod argb;
mod cam16;
mod error;
mod hct;
mod lab;
mod linear_rgb;
pub(crate) mod lut;
mod luv;
mod oklab;
mod solver;
mod viewing_conditions;
mod xyz;

pub use argb::{Argb, HexStyle};
pub use cam16::Cam16;
pub use error::ParseColorError;
pub use hct::Hct;
pub(crate) use hct::{is_blue_hue, is_cyan_hue, is_yellow_hue};
pub use lab::{Lab, LchAb};
pub use linear_rgb::LinearRgb;
pub use lut::{lstar_from_y, y_from_lstar};
pub use luv::{LchUv, Luv};
pub use oklab::{Oklab, Oklch};
pub use solver::solve_to_argb;
pub use viewing_conditions::ViewingConditions;
pub use xyz::Xyz;
