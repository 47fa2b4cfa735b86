//! Named color roles of a Material scheme

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Raised by [`Role::from_str`] for names outside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color role '{0}'")]
pub struct UnknownRole(pub String);

macro_rules! roles {
    ($($variant:ident => $name:literal,)*) => {
        /// A named slot in a Material theme.
        ///
        /// Names are snake_case, as they appear in generated themes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Role {
            $($variant,)*
        }

        impl Role {
            /// Every role, in theme order.
            pub const ALL: &'static [Role] = &[$(Role::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(Role::$variant => $name,)*
                }
            }
        }
    };
}

roles! {
    PrimaryPaletteKeyColor => "primary_palette_key_color",
    SecondaryPaletteKeyColor => "secondary_palette_key_color",
    TertiaryPaletteKeyColor => "tertiary_palette_key_color",
    NeutralPaletteKeyColor => "neutral_palette_key_color",
    NeutralVariantPaletteKeyColor => "neutral_variant_palette_key_color",
    ErrorPaletteKeyColor => "error_palette_key_color",
    Background => "background",
    OnBackground => "on_background",
    Surface => "surface",
    SurfaceDim => "surface_dim",
    SurfaceBright => "surface_bright",
    SurfaceContainerLowest => "surface_container_lowest",
    SurfaceContainerLow => "surface_container_low",
    SurfaceContainer => "surface_container",
    SurfaceContainerHigh => "surface_container_high",
    SurfaceContainerHighest => "surface_container_highest",
    OnSurface => "on_surface",
    SurfaceVariant => "surface_variant",
    OnSurfaceVariant => "on_surface_variant",
    Outline => "outline",
    OutlineVariant => "outline_variant",
    InverseSurface => "inverse_surface",
    InverseOnSurface => "inverse_on_surface",
    Shadow => "shadow",
    Scrim => "scrim",
    SurfaceTint => "surface_tint",
    Primary => "primary",
    PrimaryDim => "primary_dim",
    OnPrimary => "on_primary",
    PrimaryContainer => "primary_container",
    OnPrimaryContainer => "on_primary_container",
    PrimaryFixed => "primary_fixed",
    PrimaryFixedDim => "primary_fixed_dim",
    OnPrimaryFixed => "on_primary_fixed",
    OnPrimaryFixedVariant => "on_primary_fixed_variant",
    InversePrimary => "inverse_primary",
    Secondary => "secondary",
    SecondaryDim => "secondary_dim",
    OnSecondary => "on_secondary",
    SecondaryContainer => "secondary_container",
    OnSecondaryContainer => "on_secondary_container",
    SecondaryFixed => "secondary_fixed",
    SecondaryFixedDim => "secondary_fixed_dim",
    OnSecondaryFixed => "on_secondary_fixed",
    OnSecondaryFixedVariant => "on_secondary_fixed_variant",
    Tertiary => "tertiary",
    TertiaryDim => "tertiary_dim",
    OnTertiary => "on_tertiary",
    TertiaryContainer => "tertiary_container",
    OnTertiaryContainer => "on_tertiary_container",
    TertiaryFixed => "tertiary_fixed",
    TertiaryFixedDim => "tertiary_fixed_dim",
    OnTertiaryFixed => "on_tertiary_fixed",
    OnTertiaryFixedVariant => "on_tertiary_fixed_variant",
    Error => "error",
    ErrorDim => "error_dim",
    OnError => "on_error",
    ErrorContainer => "error_container",
    OnErrorContainer => "on_error_container",
}

impl Role {
    /// Dense index, for role-keyed tables.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The accent `*_dim` roles, which only the 2025 rules define.
    ///
    /// `*_fixed_dim` roles are not included; they exist in both versions.
    pub fn is_dim(self) -> bool {
        matches!(
            self,
            Role::PrimaryDim | Role::SecondaryDim | Role::TertiaryDim | Role::ErrorDim
        )
    }

    pub(crate) fn is_fixed_dim(self) -> bool {
        matches!(
            self,
            Role::PrimaryFixedDim | Role::SecondaryFixedDim | Role::TertiaryFixedDim
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    /// ```
    /// use material_color::dynamic::Role;
    ///
    /// assert_eq!("on_primary_container".parse(), Ok(Role::OnPrimaryContainer));
    /// assert!("primary-ish".parse::<Role>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.name() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(Role::ALL.len(), 59);
        assert_eq!(Role::ALL.iter().filter(|role| role.is_dim()).count(), 4);
    }

    #[test]
    fn test_index_matches_position() {
        for (position, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), position);
        }
    }

    #[test]
    fn test_names_are_unique_and_parse_back() {
        let names: HashSet<&str> = Role::ALL.iter().map(|role| role.name()).collect();
        assert_eq!(names.len(), Role::ALL.len());
        for &role in Role::ALL {
            assert_eq!(role.name().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_fixed_dim_is_not_dim() {
        assert!(!Role::PrimaryFixedDim.is_dim());
        assert!(Role::PrimaryFixedDim.is_fixed_dim());
        assert!(Role::SurfaceDim.name().ends_with("_dim"));
        assert!(!Role::SurfaceDim.is_dim());
    }
}
