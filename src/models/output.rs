use std::collections::BTreeMap;

use material_color::dynamic::PaletteKind;
use material_color::{GeneratedScheme, HexStyle, Platform, SpecVersion, Variant};
use serde::{Deserialize, Serialize};

/// The serialized form of a generated scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeDocument {
    pub params: SchemeParamsDoc,
    pub seed: String,
    pub candidates: Vec<String>,
    pub palettes: BTreeMap<String, PaletteDoc>,
    /// Role name to hex color; `None` for roles the spec version lacks.
    pub roles: BTreeMap<String, Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeParamsDoc {
    pub variant: Variant,
    pub dark: bool,
    pub contrast: f64,
    pub platform: Platform,
    /// The version that actually resolved the roles.
    pub version: SpecVersion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteDoc {
    pub hue: f64,
    pub chroma: f64,
    pub key_color: String,
}

impl SchemeDocument {
    pub fn new(generated: &GeneratedScheme, style: HexStyle) -> Self {
        let scheme = generated.scheme();

        let palettes = PaletteKind::ALL
            .iter()
            .map(|&kind| {
                let palette = scheme.palette(kind);
                let doc = PaletteDoc {
                    hue: round2(palette.hue()),
                    chroma: round2(palette.chroma()),
                    key_color: palette.key_color().to_argb().to_hex(style),
                };
                (kind.name().to_string(), doc)
            })
            .collect();

        let roles = generated
            .colors()
            .iter()
            .map(|(role, argb)| (role.name().to_string(), argb.map(|c| c.to_hex(style))))
            .collect();

        Self {
            params: SchemeParamsDoc {
                variant: scheme.variant(),
                dark: scheme.is_dark(),
                contrast: scheme.contrast_level(),
                platform: scheme.platform(),
                version: scheme.spec_version(),
            },
            seed: generated.seed().to_hex(style),
            candidates: generated
                .candidates()
                .iter()
                .map(|c| c.to_hex(style))
                .collect(),
            palettes,
            roles,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
