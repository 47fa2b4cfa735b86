//! Scheme parameters: style variant, target platform and spec version

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Raised when a variant, platform, spec version or hex style name is not
/// recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Style family deciding how the six palettes are derived from the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Grayscale: every palette has chroma 0.
    Monochrome,
    /// Close to grayscale, a hint of the seed hue.
    Neutral,
    /// Calm, the seed hue at moderate chroma.
    TonalSpot,
    /// High chroma, primary at maximum colorfulness.
    Vibrant,
    /// Playful; the primary hue is deliberately not the seed's.
    #[default]
    Expressive,
    /// The seed's own chroma, tertiary from the temperature analogues.
    Fidelity,
    /// Like fidelity; meant for schemes derived from content images.
    Content,
    /// Chromatic accents over grayscale neutrals.
    Rainbow,
    /// Accents rotated 50 degrees away from the seed.
    FruitSalad,
}

impl Variant {
    pub const ALL: [Variant; 9] = [
        Variant::Monochrome,
        Variant::Neutral,
        Variant::TonalSpot,
        Variant::Vibrant,
        Variant::Expressive,
        Variant::Fidelity,
        Variant::Content,
        Variant::Rainbow,
        Variant::FruitSalad,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Monochrome => "monochrome",
            Variant::Neutral => "neutral",
            Variant::TonalSpot => "tonal-spot",
            Variant::Vibrant => "vibrant",
            Variant::Expressive => "expressive",
            Variant::Fidelity => "fidelity",
            Variant::Content => "content",
            Variant::Rainbow => "rainbow",
            Variant::FruitSalad => "fruit-salad",
        }
    }

    /// Fidelity and content keep the seed's chroma.
    pub(crate) fn is_fidelity(self) -> bool {
        matches!(self, Variant::Fidelity | Variant::Content)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = UnknownOption;

    /// Accepts kebab-case or snake_case, any letter case.
    ///
    /// ```
    /// use material_color::dynamic::Variant;
    ///
    /// assert_eq!("tonal-spot".parse(), Ok(Variant::TonalSpot));
    /// assert_eq!("FRUIT_SALAD".parse(), Ok(Variant::FruitSalad));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name() == normalized)
            .ok_or_else(|| UnknownOption {
                kind: "variant",
                value: s.to_string(),
                expected: "monochrome, neutral, tonal-spot, vibrant, expressive, fidelity, content, rainbow, fruit-salad",
            })
    }
}

/// Form factor the scheme is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    #[default]
    Phone,
    Watch,
}

impl Platform {
    pub fn name(self) -> &'static str {
        match self {
            Platform::Phone => "phone",
            Platform::Watch => "watch",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phone" => Ok(Platform::Phone),
            "watch" => Ok(Platform::Watch),
            _ => Err(UnknownOption {
                kind: "platform",
                value: s.to_string(),
                expected: "phone, watch",
            }),
        }
    }
}

/// Which revision of the Material color rules resolves the roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum SpecVersion {
    V2021,
    #[default]
    V2025,
}

impl SpecVersion {
    pub const ALL: [SpecVersion; 2] = [SpecVersion::V2021, SpecVersion::V2025];

    pub fn name(self) -> &'static str {
        match self {
            SpecVersion::V2021 => "2021",
            SpecVersion::V2025 => "2025",
        }
    }

    /// The 2025 rules only cover four variants; the rest use 2021.
    pub(crate) fn for_variant(self, variant: Variant) -> SpecVersion {
        match variant {
            Variant::Neutral | Variant::TonalSpot | Variant::Expressive | Variant::Vibrant => self,
            _ => SpecVersion::V2021,
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpecVersion {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2021" => Ok(SpecVersion::V2021),
            "2025" => Ok(SpecVersion::V2025),
            _ => Err(UnknownOption {
                kind: "spec version",
                value: s.to_string(),
                expected: "2021, 2025",
            }),
        }
    }
}

impl Serialize for SpecVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for SpecVersion {
    /// Accepts both `2025` and `"2025"`, since YAML reads a bare year as a number.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Year(u64),
            Name(String),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Year(year) => year.to_string(),
            Raw::Name(name) => name,
        };
        text.parse().map_err(serde::de::Error::custom)
    }
}
