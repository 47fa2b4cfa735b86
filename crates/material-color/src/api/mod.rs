//! Generation pipeline: source, quantize, score, synthesize.

mod builder;
mod error;
mod source;

pub use builder::{GenerateOptions, GeneratedScheme, SchemeGenerator};
pub use error::GenerateError;
pub use source::Source;
