//! Tonal palettes

mod tonal;

pub use tonal::TonalPalette;
