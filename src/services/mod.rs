pub mod image_source;
pub mod renderer;

pub use image_source::{collect_sources, decode_png, load_png, load_raw};
pub use renderer::{render, write_output};
