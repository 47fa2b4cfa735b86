//! Role descriptors and the per-version role catalogs
//!
//! Every role is a row of plain function pointers over the scheme. Roles
//! refer to each other by [`Role`] id only and are resolved lazily through
//! the scheme's memo, so the descriptors themselves never form cycles. The
//! resolution order they imply still has to be acyclic; each catalog is
//! checked with a topological sort when it is first loaded.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use super::contrast_curve::ContrastCurve;
use super::role::Role;
use super::scheme::{DynamicScheme, SchemeParams};
use super::tone_delta_pair::ToneDeltaPair;
use super::variant::{Platform, SpecVersion, Variant};
use super::{spec_2021, spec_2025};
use crate::color::{Argb, Hct};

pub(crate) type ToneFn = fn(&DynamicScheme) -> f64;
pub(crate) type RoleFn = fn(&DynamicScheme) -> Option<Role>;
pub(crate) type CurveFn = fn(&DynamicScheme) -> Option<ContrastCurve>;
pub(crate) type PairFn = fn(&DynamicScheme) -> Option<ToneDeltaPair>;

/// Which of the scheme's six palettes a role draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    NeutralVariant,
    Error,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 6] = [
        PaletteKind::Primary,
        PaletteKind::Secondary,
        PaletteKind::Tertiary,
        PaletteKind::Neutral,
        PaletteKind::NeutralVariant,
        PaletteKind::Error,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteKind::Primary => "primary",
            PaletteKind::Secondary => "secondary",
            PaletteKind::Tertiary => "tertiary",
            PaletteKind::Neutral => "neutral",
            PaletteKind::NeutralVariant => "neutral_variant",
            PaletteKind::Error => "error",
        }
    }
}

/// Declarative description of one role.
#[derive(Clone, Copy)]
pub(crate) struct RoleSpec {
    pub role: Role,
    pub palette: PaletteKind,
    pub is_background: bool,
    /// Initial tone; without one the role starts at its background's tone.
    pub tone: Option<ToneFn>,
    pub chroma_multiplier: Option<ToneFn>,
    pub background: Option<RoleFn>,
    pub second_background: Option<RoleFn>,
    pub contrast_curve: Option<CurveFn>,
    pub tone_delta_pair: Option<PairFn>,
    /// Roles whose resolved tone the `tone` function reads.
    pub tone_deps: &'static [Role],
}

impl RoleSpec {
    pub fn new(role: Role, palette: PaletteKind) -> Self {
        Self {
            role,
            palette,
            is_background: false,
            tone: None,
            chroma_multiplier: None,
            background: None,
            second_background: None,
            contrast_curve: None,
            tone_delta_pair: None,
            tone_deps: &[],
        }
    }

    pub fn tone(mut self, tone: ToneFn) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn as_background(mut self) -> Self {
        self.is_background = true;
        self
    }

    pub fn chroma_multiplier(mut self, multiplier: ToneFn) -> Self {
        self.chroma_multiplier = Some(multiplier);
        self
    }

    pub fn background(mut self, background: RoleFn) -> Self {
        self.background = Some(background);
        self
    }

    pub fn second_background(mut self, background: RoleFn) -> Self {
        self.second_background = Some(background);
        self
    }

    pub fn contrast_curve(mut self, curve: CurveFn) -> Self {
        self.contrast_curve = Some(curve);
        self
    }

    pub fn tone_delta_pair(mut self, pair: PairFn) -> Self {
        self.tone_delta_pair = Some(pair);
        self
    }

    pub fn tone_deps(mut self, deps: &'static [Role]) -> Self {
        self.tone_deps = deps;
        self
    }

    /// Same descriptor under another name, as the 2025 rules do for
    /// `background`, `surface_variant` and `surface_tint`.
    pub fn renamed(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn background_in(&self, scheme: &DynamicScheme) -> Option<Role> {
        self.background.and_then(|background| background(scheme))
    }

    pub fn second_background_in(&self, scheme: &DynamicScheme) -> Option<Role> {
        self.second_background.and_then(|background| background(scheme))
    }

    pub fn contrast_curve_in(&self, scheme: &DynamicScheme) -> Option<ContrastCurve> {
        self.contrast_curve.and_then(|curve| curve(scheme))
    }

    pub fn tone_delta_pair_in(&self, scheme: &DynamicScheme) -> Option<ToneDeltaPair> {
        self.tone_delta_pair.and_then(|pair| pair(scheme))
    }

    pub fn chroma_multiplier_in(&self, scheme: &DynamicScheme) -> f64 {
        self.chroma_multiplier.map_or(1.0, |multiplier| multiplier(scheme))
    }
}

impl fmt::Debug for RoleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleSpec")
            .field("role", &self.role)
            .field("palette", &self.palette)
            .field("is_background", &self.is_background)
            .finish_non_exhaustive()
    }
}

/// The roles one spec version defines, indexed by [`Role`].
pub(crate) struct Catalog {
    version: SpecVersion,
    specs: Vec<Option<RoleSpec>>,
}

impl Catalog {
    /// The catalog for `version`, built and checked on first use.
    pub fn get(version: SpecVersion) -> &'static Catalog {
        static CATALOG_2021: OnceLock<Catalog> = OnceLock::new();
        static CATALOG_2025: OnceLock<Catalog> = OnceLock::new();
        match version {
            SpecVersion::V2021 => {
                CATALOG_2021.get_or_init(|| Catalog::load(version, spec_2021::roles()))
            }
            SpecVersion::V2025 => {
                CATALOG_2025.get_or_init(|| Catalog::load(version, spec_2025::roles()))
            }
        }
    }

    fn load(version: SpecVersion, specs: Vec<RoleSpec>) -> Catalog {
        let catalog = Catalog::from_specs(version, specs);
        if let Err(err) = catalog.verify() {
            panic!("role catalog {version} is invalid: {err}");
        }
        debug!(
            version = %version,
            roles = catalog.roles().count(),
            "loaded role catalog"
        );
        catalog
    }

    fn from_specs(version: SpecVersion, specs: Vec<RoleSpec>) -> Catalog {
        let mut table = vec![None; Role::ALL.len()];
        for spec in specs {
            table[spec.role.index()] = Some(spec);
        }
        Catalog {
            version,
            specs: table,
        }
    }

    pub fn spec(&self, role: Role) -> Option<&RoleSpec> {
        self.specs[role.index()].as_ref()
    }

    /// Defined roles, in theme order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL
            .iter()
            .copied()
            .filter(|&role| self.spec(role).is_some())
    }

    /// Roles that must be resolved before `spec` in `scheme`.
    fn dependencies(&self, spec: &RoleSpec, scheme: &DynamicScheme) -> Vec<Role> {
        let mut deps: Vec<Role> = spec.tone_deps.to_vec();
        deps.extend(spec.background_in(scheme));
        deps.extend(spec.second_background_in(scheme));
        // Only the 2025 rules resolve the partner of a pair; 2021 reads its
        // initial tone.
        if self.version == SpecVersion::V2025 {
            if let Some(pair) = spec.tone_delta_pair_in(scheme) {
                deps.push(pair.other(spec.role));
            }
        }
        deps
    }

    /// Kahn's algorithm over the references the roles make in `scheme`.
    pub fn topological_order(&self, scheme: &DynamicScheme) -> Result<Vec<Role>, CatalogError> {
        let mut indegree: HashMap<Role, usize> = HashMap::new();
        let mut dependents: HashMap<Role, Vec<Role>> = HashMap::new();
        for role in self.roles() {
            let Some(spec) = self.spec(role) else { continue };
            let deps = self.dependencies(spec, scheme);
            for &dep in &deps {
                if self.spec(dep).is_none() {
                    return Err(CatalogError::MissingDependency { role, dependency: dep });
                }
                dependents.entry(dep).or_default().push(role);
            }
            indegree.insert(role, deps.len());
        }

        let mut ready: Vec<Role> = self
            .roles()
            .filter(|role| indegree.get(role) == Some(&0))
            .collect();
        let mut order = Vec::with_capacity(indegree.len());
        while let Some(role) = ready.pop() {
            order.push(role);
            for &dependent in dependents.get(&role).into_iter().flatten() {
                if let Some(count) = indegree.get_mut(&dependent) {
                    *count -= 1;
                    if *count == 0 {
                        ready.push(dependent);
                    }
                }
            }
        }

        if order.len() < indegree.len() {
            let stuck = self
                .roles()
                .filter(|role| indegree.get(role).is_some_and(|&count| count > 0))
                .collect();
            return Err(CatalogError::Cycle(stuck));
        }
        Ok(order)
    }

    /// Sorts the role graph of every parameter combination this catalog
    /// serves.
    fn verify(&self) -> Result<(), CatalogError> {
        let variants: &[Variant] = match self.version {
            SpecVersion::V2021 => &Variant::ALL,
            SpecVersion::V2025 => &[
                Variant::Neutral,
                Variant::TonalSpot,
                Variant::Expressive,
                Variant::Vibrant,
            ],
        };
        let source = Hct::from_argb(Argb(0xFF4285F4));
        for &variant in variants {
            for platform in [Platform::Phone, Platform::Watch] {
                for is_dark in [false, true] {
                    for contrast_level in [-1.0, 0.0, 1.0] {
                        let params = SchemeParams {
                            variant,
                            is_dark,
                            contrast_level,
                            platform,
                            spec_version: self.version,
                        };
                        let scheme = DynamicScheme::new(source, params);
                        self.topological_order(&scheme)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// A role catalog whose references cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum CatalogError {
    #[error("reference cycle through {}", role_names(.0))]
    Cycle(Vec<Role>),
    #[error("{role} refers to {dependency}, which is not defined")]
    MissingDependency { role: Role, dependency: Role },
}

fn role_names(roles: &[Role]) -> String {
    roles
        .iter()
        .map(|role| role.name())
        .collect::<Vec<_>>()
        .join(", ")
}
