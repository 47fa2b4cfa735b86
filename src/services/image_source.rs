use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use material_color::{Argb, Source};
use tracing::debug;

use crate::error::CliError;

/// Path that means "read from stdin" for `--raw`.
pub const STDIN_PATH: &str = "-";

/// Decode a PNG into an image source.
///
/// Palette images are expanded and 16-bit channels stripped, so every
/// supported file arrives as 8-bit gray, gray+alpha, RGB or RGBA.
pub fn decode_png<R: Read>(reader: R) -> Result<Source, CliError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    let pixels: Vec<Argb> = match info.color_type {
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .map(|p| Argb::from_rgb(p[0], p[1], p[2]))
            .collect(),
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .map(|p| Argb::from_components(p[3], p[0], p[1], p[2]))
            .collect(),
        png::ColorType::Grayscale => data.iter().map(|&v| Argb::from_rgb(v, v, v)).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|p| Argb::from_components(p[1], p[0], p[0], p[0]))
            .collect(),
        other => return Err(CliError::UnsupportedPng(other)),
    };

    debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );

    Ok(Source::Image {
        width: info.width,
        height: info.height,
        pixels,
    })
}

pub fn load_png(path: &Path) -> Result<Source, CliError> {
    let file = File::open(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_png(BufReader::new(file))
}

/// Read packed RGB bytes from a file, or from stdin when `path` is `-`.
pub fn load_raw(path: &Path) -> Result<Source, CliError> {
    let bytes = if path == Path::new(STDIN_PATH) {
        let mut bytes = Vec::new();
        std::io::stdin().lock().read_to_end(&mut bytes)?;
        bytes
    } else {
        std::fs::read(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };
    debug!(bytes = bytes.len(), "Read raw source");
    Ok(Source::Raw(bytes))
}

/// Combine the command-line sources into one.
///
/// A single source is returned as is; several become a list, in the
/// order hex, image, raw.
pub fn collect_sources(
    hex: &[String],
    image: Option<&Path>,
    raw: Option<&Path>,
) -> Result<Source, CliError> {
    let mut sources: Vec<Source> = hex.iter().map(Source::hex).collect();
    if let Some(path) = image {
        sources.push(load_png(path)?);
    }
    if let Some(path) = raw {
        sources.push(load_raw(path)?);
    }

    match sources.len() {
        0 => Err(CliError::NoSource),
        1 => Ok(sources.remove(0)),
        _ => Ok(Source::List(sources)),
    }
}
