//! Test fixtures and constants.

use std::path::{Path, PathBuf};

/// Seed colors used across tests
pub mod colors {
    /// Google Blue, also the pipeline's fallback
    pub const GOOGLE_BLUE: &str = "#4285F4";

    /// Material baseline purple
    pub const BASELINE: &str = "#6750A4";

    /// Pure blue, whose 2021 tonal-spot primary is 0xFF555992
    pub const PURE_BLUE: &str = "#0000FF";
}

/// A config file exercising every field
pub const FULL_CONFIG: &str = r##"
variant: tonal-spot
dark: true
contrast: 0.5
platform: watch
version: 2021
max_colors: 32
desired_seeds: 2
fallback: "#00AA00"
filter: false
format: yaml
"##;

/// Write `content` to `name` inside `dir`.
pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

/// Encode an 8-bit PNG in memory.
pub fn png_bytes(color_type: png::ColorType, width: u32, height: u32, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("png header");
        writer.write_image_data(data).expect("png data");
    }
    buf
}

/// An RGB image whose left `blue_columns` columns are blue and the rest
/// black.
pub fn blue_and_black_rgb(width: u32, height: u32, blue_columns: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..height {
        for x in 0..width {
            if x < blue_columns {
                data.extend([0, 0, 255]);
            } else {
                data.extend([0, 0, 0]);
            }
        }
    }
    data
}
