//! Things a scheme can be generated from.

use crate::color::{Argb, ParseColorError};

/// A pixel source for [`SchemeGenerator`](super::SchemeGenerator).
///
/// Every variant reduces to a flat list of pixels; a single color is
/// simply a one-pixel image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Argb(Argb),
    /// `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`, any case, `#` optional.
    Hex(String),
    /// Packed `R G B` byte triples. Up to two trailing bytes are ignored.
    Raw(Vec<u8>),
    /// A decoded image in row-major order.
    Image {
        width: u32,
        height: u32,
        pixels: Vec<Argb>,
    },
    List(Vec<Source>),
}

impl Source {
    /// Convenience for [`Source::Hex`].
    pub fn hex(s: impl Into<String>) -> Self {
        Self::Hex(s.into())
    }

    /// All pixels of this source, in order.
    ///
    /// Fails on the first malformed hex string.
    pub fn pixels(&self) -> Result<Vec<Argb>, ParseColorError> {
        let mut out = Vec::new();
        self.collect_into(&mut out)?;
        Ok(out)
    }

    fn collect_into(&self, out: &mut Vec<Argb>) -> Result<(), ParseColorError> {
        match self {
            Self::Argb(argb) => out.push(*argb),
            Self::Hex(s) => out.push(s.parse()?),
            Self::Raw(bytes) => out.extend(
                bytes
                    .chunks_exact(3)
                    .map(|rgb| Argb::from_rgb(rgb[0], rgb[1], rgb[2])),
            ),
            // Trust the pixel buffer over the declared size.
            Self::Image { pixels, .. } => out.extend_from_slice(pixels),
            Self::List(sources) => {
                for source in sources {
                    source.collect_into(out)?;
                }
            }
        }
        Ok(())
    }
}

impl From<Argb> for Source {
    fn from(argb: Argb) -> Self {
        Self::Argb(argb)
    }
}

impl From<Vec<Source>> for Source {
    fn from(sources: Vec<Source>) -> Self {
        Self::List(sources)
    }
}
