//! Role rules of the 2025 Material spec
//!
//! Starts from the 2021 catalog and replaces most roles. Adds the four accent
//! `*_dim` roles, which watch themes use as the base of each accent group.

use crate::color::{is_cyan_hue, is_yellow_hue, Hct};
use crate::math::clamp_f64;
use crate::palettes::TonalPalette;

use super::catalog::{PaletteKind, RoleSpec};
use super::contrast_curve::ContrastCurve;
use super::role::Role;
use super::scheme::DynamicScheme;
use super::spec_2021;
use super::tone_delta_pair::{DeltaConstraint, ToneDeltaPair, TonePolarity};
use super::variant::{Platform, Variant};

fn curve(default_ratio: f64) -> Option<ContrastCurve> {
    Some(ContrastCurve::standard(default_ratio))
}

fn is_phone(s: &DynamicScheme) -> bool {
    s.platform() == Platform::Phone
}

fn neutral_is_yellow(s: &DynamicScheme) -> bool {
    is_yellow_hue(s.neutral_palette().hue())
}

fn highest_surface(s: &DynamicScheme) -> Role {
    if s.is_dark() {
        Role::SurfaceBright
    } else {
        Role::SurfaceDim
    }
}

/// Accents sit on the highest surface on phones and on a container on watches.
fn accent_background(s: &DynamicScheme) -> Option<Role> {
    Some(if is_phone(s) {
        highest_surface(s)
    } else {
        Role::SurfaceContainerHigh
    })
}

fn container_background(s: &DynamicScheme) -> Option<Role> {
    is_phone(s).then(|| highest_surface(s))
}

/// Containers only get a contrast target once contrast is raised.
fn container_curve(s: &DynamicScheme) -> Option<ContrastCurve> {
    if is_phone(s) && s.contrast_level() > 0.0 {
        curve(1.5)
    } else {
        None
    }
}

fn on_accent_curve(s: &DynamicScheme) -> Option<ContrastCurve> {
    curve(if is_phone(s) { 6.0 } else { 7.0 })
}

fn accent_curve(s: &DynamicScheme) -> Option<ContrastCurve> {
    curve(if is_phone(s) { 4.5 } else { 7.0 })
}

fn farther(role_a: Role, role_b: Role, delta: f64, polarity: TonePolarity) -> ToneDeltaPair {
    ToneDeltaPair::new(role_a, role_b, delta, polarity, true).with_constraint(DeltaConstraint::Farther)
}

/// Phones keep each accent 5 tones out from its container.
fn accent_pair(s: &DynamicScheme, container: Role, accent: Role) -> Option<ToneDeltaPair> {
    is_phone(s).then(|| farther(container, accent, 5.0, TonePolarity::RelativeLighter))
}

/// Watches keep each container 10 tones below the accent's dim role.
fn container_pair(s: &DynamicScheme, container: Role, dim: Role) -> Option<ToneDeltaPair> {
    (!is_phone(s)).then(|| farther(container, dim, 10.0, TonePolarity::Darker))
}

fn dim_pair(dim: Role, accent: Role) -> Option<ToneDeltaPair> {
    Some(farther(dim, accent, 5.0, TonePolarity::Darker))
}

fn fixed_dim_pair(fixed_dim: Role, fixed: Role) -> Option<ToneDeltaPair> {
    Some(
        ToneDeltaPair::new(fixed_dim, fixed, 5.0, TonePolarity::Darker, true)
            .with_constraint(DeltaConstraint::Exact),
    )
}

/// The tone in `[0, 100]` where the palette reaches its chroma, searching
/// from `tone` one step at a time.
fn find_best_tone_for_chroma(hue: f64, chroma: f64, tone: f64, by_decreasing_tone: bool) -> f64 {
    let mut tone = tone;
    let mut answer = tone;
    let mut best = Hct::from(hue, chroma, answer);
    while best.chroma() < chroma {
        if !(0.0..=100.0).contains(&tone) {
            break;
        }
        tone += if by_decreasing_tone { -1.0 } else { 1.0 };
        let candidate = Hct::from(hue, chroma, tone);
        if best.chroma() < candidate.chroma() {
            best = candidate;
            answer = tone;
        }
    }
    answer
}

/// The lightest tone of maximum chroma, clamped to `[lower, upper]`.
pub(crate) fn t_max_c(palette: &TonalPalette, lower: f64, upper: f64, chroma_multiplier: f64) -> f64 {
    let answer = find_best_tone_for_chroma(
        palette.hue(),
        palette.chroma() * chroma_multiplier,
        100.0,
        true,
    );
    clamp_f64(lower, upper, answer)
}

/// The darkest tone of maximum chroma, clamped to `[lower, upper]`.
pub(crate) fn t_min_c(palette: &TonalPalette, lower: f64, upper: f64) -> f64 {
    let answer = find_best_tone_for_chroma(palette.hue(), palette.chroma(), 0.0, false);
    clamp_f64(lower, upper, answer)
}

fn max_c(palette: &TonalPalette) -> f64 {
    t_max_c(palette, 0.0, 100.0, 1.0)
}

fn min_c(palette: &TonalPalette) -> f64 {
    t_min_c(palette, 0.0, 100.0)
}

/// Per-variant neutral chroma boost: neutral, tonal spot, expressive (regular
/// and yellow), vibrant.
fn variant_multiplier(s: &DynamicScheme, values: [f64; 5]) -> f64 {
    match s.variant() {
        Variant::Neutral => values[0],
        Variant::TonalSpot => values[1],
        Variant::Expressive if neutral_is_yellow(s) => values[3],
        Variant::Expressive => values[2],
        Variant::Vibrant => values[4],
        _ => 1.0,
    }
}

/// Light surface tone: yellow neutrals go lighter, vibrant goes darker.
fn light_surface_tone(s: &DynamicScheme, yellow: f64, vibrant: f64, other: f64) -> f64 {
    if neutral_is_yellow(s) {
        yellow
    } else if s.variant() == Variant::Vibrant {
        vibrant
    } else {
        other
    }
}

/// Chroma boost of text and outlines on phones.
fn text_multiplier(s: &DynamicScheme) -> f64 {
    if !is_phone(s) {
        return 1.0;
    }
    match s.variant() {
        Variant::Neutral => 2.2,
        Variant::TonalSpot => 1.7,
        Variant::Expressive if neutral_is_yellow(s) => {
            if s.is_dark() {
                3.0
            } else {
                2.3
            }
        }
        Variant::Expressive => 1.6,
        _ => 1.0,
    }
}

fn surfaces() -> Vec<RoleSpec> {
    use PaletteKind::Neutral;
    let surface = RoleSpec::new(Role::Surface, Neutral)
        .tone(|s| match (is_phone(s), s.is_dark()) {
            (false, _) => 0.0,
            (true, true) => 4.0,
            (true, false) => light_surface_tone(s, 99.0, 97.0, 98.0),
        })
        .as_background();
    let surface_container_highest = RoleSpec::new(Role::SurfaceContainerHighest, Neutral)
        .tone(|s| {
            if s.is_dark() {
                15.0
            } else {
                light_surface_tone(s, 92.0, 88.0, 90.0)
            }
        })
        .as_background()
        .chroma_multiplier(|s| variant_multiplier(s, [2.2, 1.7, 1.6, 2.3, 1.29]));
    let on_surface = RoleSpec::new(Role::OnSurface, Neutral)
        .tone(|s| {
            if s.variant() == Variant::Vibrant {
                t_max_c(s.neutral_palette(), 0.0, 100.0, 1.1)
            } else {
                s.tone_of(highest_surface(s))
            }
        })
        .tone_deps(&[Role::SurfaceDim, Role::SurfaceBright])
        .chroma_multiplier(text_multiplier)
        .background(accent_background)
        .contrast_curve(|s| curve(if s.is_dark() && is_phone(s) { 11.0 } else { 9.0 }));

    vec![
        surface.renamed(Role::Background),
        on_surface
            .renamed(Role::OnBackground)
            .tone(|s| if is_phone(s) { s.tone_of(Role::OnSurface) } else { 100.0 })
            .tone_deps(&[Role::OnSurface]),
        surface,
        RoleSpec::new(Role::SurfaceDim, Neutral)
            .tone(|s| {
                if s.is_dark() {
                    4.0
                } else {
                    light_surface_tone(s, 90.0, 85.0, 87.0)
                }
            })
            .as_background()
            .chroma_multiplier(|s| {
                if s.is_dark() {
                    1.0
                } else {
                    variant_multiplier(s, [2.5, 1.7, 1.75, 2.7, 1.36])
                }
            }),
        RoleSpec::new(Role::SurfaceBright, Neutral)
            .tone(|s| {
                if s.is_dark() {
                    18.0
                } else {
                    light_surface_tone(s, 99.0, 97.0, 98.0)
                }
            })
            .as_background()
            .chroma_multiplier(|s| {
                if s.is_dark() {
                    variant_multiplier(s, [2.5, 1.7, 1.75, 2.7, 1.36])
                } else {
                    1.0
                }
            }),
        RoleSpec::new(Role::SurfaceContainerLowest, Neutral)
            .tone(|s| if s.is_dark() { 0.0 } else { 100.0 })
            .as_background(),
        RoleSpec::new(Role::SurfaceContainerLow, Neutral)
            .tone(|s| match (is_phone(s), s.is_dark()) {
                (false, _) => 15.0,
                (true, true) => 6.0,
                (true, false) => light_surface_tone(s, 98.0, 95.0, 96.0),
            })
            .as_background()
            .chroma_multiplier(|s| {
                if is_phone(s) {
                    variant_multiplier(s, [1.3, 1.25, 1.15, 1.3, 1.08])
                } else {
                    1.0
                }
            }),
        RoleSpec::new(Role::SurfaceContainer, Neutral)
            .tone(|s| match (is_phone(s), s.is_dark()) {
                (false, _) => 20.0,
                (true, true) => 9.0,
                (true, false) => light_surface_tone(s, 96.0, 92.0, 94.0),
            })
            .as_background()
            .chroma_multiplier(|s| {
                if is_phone(s) {
                    variant_multiplier(s, [1.6, 1.4, 1.3, 1.6, 1.15])
                } else {
                    1.0
                }
            }),
        RoleSpec::new(Role::SurfaceContainerHigh, Neutral)
            .tone(|s| match (is_phone(s), s.is_dark()) {
                (false, _) => 25.0,
                (true, true) => 12.0,
                (true, false) => light_surface_tone(s, 94.0, 90.0, 92.0),
            })
            .as_background()
            .chroma_multiplier(|s| {
                if is_phone(s) {
                    variant_multiplier(s, [1.9, 1.5, 1.45, 1.95, 1.22])
                } else {
                    1.0
                }
            }),
        surface_container_highest,
        on_surface,
        surface_container_highest.renamed(Role::SurfaceVariant),
        RoleSpec::new(Role::OnSurfaceVariant, Neutral)
            .chroma_multiplier(text_multiplier)
            .background(accent_background)
            .contrast_curve(|s| match (is_phone(s), s.is_dark()) {
                (false, _) => curve(7.0),
                (true, true) => curve(6.0),
                (true, false) => curve(4.5),
            }),
        RoleSpec::new(Role::InverseSurface, Neutral)
            .tone(|s| if s.is_dark() { 98.0 } else { 4.0 })
            .as_background(),
        RoleSpec::new(Role::InverseOnSurface, Neutral)
            .background(|_| Some(Role::InverseSurface))
            .contrast_curve(|_| curve(7.0)),
        RoleSpec::new(Role::Outline, Neutral)
            .chroma_multiplier(text_multiplier)
            .background(accent_background)
            .contrast_curve(|s| curve(if is_phone(s) { 3.0 } else { 4.5 })),
        RoleSpec::new(Role::OutlineVariant, Neutral)
            .chroma_multiplier(text_multiplier)
            .background(accent_background)
            .contrast_curve(|s| curve(if is_phone(s) { 1.5 } else { 3.0 })),
    ]
}

fn primary() -> Vec<RoleSpec> {
    use PaletteKind::Primary;
    let primary = RoleSpec::new(Role::Primary, Primary)
        .tone(|s| {
            let palette = s.primary_palette();
            let cyan = is_cyan_hue(palette.hue());
            match (s.variant(), is_phone(s)) {
                (Variant::Neutral, true) => {
                    if s.is_dark() {
                        80.0
                    } else {
                        40.0
                    }
                }
                (Variant::Neutral, false) => 90.0,
                (Variant::TonalSpot, true) if s.is_dark() => 80.0,
                (Variant::TonalSpot, true) => max_c(palette),
                (Variant::TonalSpot, false) => t_max_c(palette, 0.0, 90.0, 1.0),
                (Variant::Expressive, true) => {
                    let upper = if is_yellow_hue(palette.hue()) {
                        25.0
                    } else if cyan {
                        88.0
                    } else {
                        98.0
                    };
                    t_max_c(palette, 0.0, upper, 1.0)
                }
                (_, true) => t_max_c(palette, 0.0, if cyan { 88.0 } else { 98.0 }, 1.0),
                (_, false) => max_c(palette),
            }
        })
        .as_background()
        .background(accent_background)
        .contrast_curve(accent_curve)
        .tone_delta_pair(|s| accent_pair(s, Role::PrimaryContainer, Role::Primary));

    vec![
        primary.renamed(Role::SurfaceTint),
        primary,
        RoleSpec::new(Role::PrimaryDim, Primary)
            .tone(|s| match s.variant() {
                Variant::Neutral => 85.0,
                Variant::TonalSpot => t_max_c(s.primary_palette(), 0.0, 90.0, 1.0),
                _ => max_c(s.primary_palette()),
            })
            .as_background()
            .background(|_| Some(Role::SurfaceContainerHigh))
            .contrast_curve(|_| curve(4.5))
            .tone_delta_pair(|_| dim_pair(Role::PrimaryDim, Role::Primary)),
        RoleSpec::new(Role::OnPrimary, Primary)
            .background(|s| Some(if is_phone(s) { Role::Primary } else { Role::PrimaryDim }))
            .contrast_curve(on_accent_curve),
        RoleSpec::new(Role::PrimaryContainer, Primary)
            .tone(|s| {
                let palette = s.primary_palette();
                let dark = s.is_dark();
                let cyan = is_cyan_hue(palette.hue());
                if !is_phone(s) {
                    return 30.0;
                }
                match s.variant() {
                    Variant::Neutral if dark => 30.0,
                    Variant::Neutral => 90.0,
                    Variant::TonalSpot if dark => t_min_c(palette, 35.0, 93.0),
                    Variant::TonalSpot => t_max_c(palette, 0.0, 90.0, 1.0),
                    Variant::Expressive if dark => t_max_c(palette, 30.0, 93.0, 1.0),
                    Variant::Expressive => {
                        t_max_c(palette, 78.0, if cyan { 88.0 } else { 90.0 }, 1.0)
                    }
                    _ if dark => t_min_c(palette, 66.0, 93.0),
                    _ => t_max_c(palette, 66.0, if cyan { 88.0 } else { 93.0 }, 1.0),
                }
            })
            .as_background()
            .background(container_background)
            .contrast_curve(container_curve)
            .tone_delta_pair(|s| container_pair(s, Role::PrimaryContainer, Role::PrimaryDim)),
        RoleSpec::new(Role::OnPrimaryContainer, Primary)
            .background(|_| Some(Role::PrimaryContainer))
            .contrast_curve(on_accent_curve),
        RoleSpec::new(Role::InversePrimary, Primary)
            .tone(|s| max_c(s.primary_palette()))
            .background(|_| Some(Role::InverseSurface))
            .contrast_curve(on_accent_curve),
    ]
}

fn secondary() -> Vec<RoleSpec> {
    use PaletteKind::Secondary;
    vec![
        RoleSpec::new(Role::Secondary, Secondary)
            .tone(|s| {
                let palette = s.secondary_palette();
                let dark = s.is_dark();
                if !is_phone(s) {
                    return match s.variant() {
                        Variant::Neutral => 90.0,
                        _ => t_max_c(palette, 0.0, 90.0, 1.0),
                    };
                }
                match s.variant() {
                    Variant::Neutral if dark => t_min_c(palette, 0.0, 98.0),
                    Variant::Neutral => max_c(palette),
                    Variant::Vibrant => t_max_c(palette, 0.0, if dark { 90.0 } else { 98.0 }, 1.0),
                    _ if dark => 80.0,
                    _ => max_c(palette),
                }
            })
            .as_background()
            .background(accent_background)
            .contrast_curve(accent_curve)
            .tone_delta_pair(|s| accent_pair(s, Role::SecondaryContainer, Role::Secondary)),
        RoleSpec::new(Role::SecondaryDim, Secondary)
            .tone(|s| match s.variant() {
                Variant::Neutral => 85.0,
                _ => t_max_c(s.secondary_palette(), 0.0, 90.0, 1.0),
            })
            .as_background()
            .background(|_| Some(Role::SurfaceContainerHigh))
            .contrast_curve(|_| curve(4.5))
            .tone_delta_pair(|_| dim_pair(Role::SecondaryDim, Role::Secondary)),
        RoleSpec::new(Role::OnSecondary, Secondary)
            .background(|s| {
                Some(if is_phone(s) {
                    Role::Secondary
                } else {
                    Role::SecondaryDim
                })
            })
            .contrast_curve(on_accent_curve),
        RoleSpec::new(Role::SecondaryContainer, Secondary)
            .tone(|s| {
                let palette = s.secondary_palette();
                let dark = s.is_dark();
                if !is_phone(s) {
                    return 30.0;
                }
                match s.variant() {
                    Variant::Vibrant if dark => t_min_c(palette, 30.0, 40.0),
                    Variant::Vibrant => t_max_c(palette, 84.0, 90.0, 1.0),
                    Variant::Expressive if dark => 15.0,
                    Variant::Expressive => t_max_c(palette, 90.0, 95.0, 1.0),
                    _ if dark => 25.0,
                    _ => 90.0,
                }
            })
            .as_background()
            .background(container_background)
            .contrast_curve(container_curve)
            .tone_delta_pair(|s| {
                container_pair(s, Role::SecondaryContainer, Role::SecondaryDim)
            }),
        RoleSpec::new(Role::OnSecondaryContainer, Secondary)
            .background(|_| Some(Role::SecondaryContainer))
            .contrast_curve(on_accent_curve),
    ]
}

fn tertiary() -> Vec<RoleSpec> {
    use PaletteKind::Tertiary;
    vec![
        RoleSpec::new(Role::Tertiary, Tertiary)
            .tone(|s| {
                let palette = s.tertiary_palette();
                let dark = s.is_dark();
                if !is_phone(s) {
                    return match s.variant() {
                        Variant::TonalSpot => t_max_c(palette, 0.0, 90.0, 1.0),
                        _ => max_c(palette),
                    };
                }
                match s.variant() {
                    Variant::Expressive | Variant::Vibrant => {
                        let upper = if is_cyan_hue(palette.hue()) {
                            88.0
                        } else if dark {
                            98.0
                        } else {
                            100.0
                        };
                        t_max_c(palette, 0.0, upper, 1.0)
                    }
                    _ if dark => t_max_c(palette, 0.0, 98.0, 1.0),
                    _ => max_c(palette),
                }
            })
            .as_background()
            .background(accent_background)
            .contrast_curve(accent_curve)
            .tone_delta_pair(|s| accent_pair(s, Role::TertiaryContainer, Role::Tertiary)),
        RoleSpec::new(Role::TertiaryDim, Tertiary)
            .tone(|s| match s.variant() {
                Variant::TonalSpot => t_max_c(s.tertiary_palette(), 0.0, 90.0, 1.0),
                _ => max_c(s.tertiary_palette()),
            })
            .as_background()
            .background(|_| Some(Role::SurfaceContainerHigh))
            .contrast_curve(|_| curve(4.5))
            .tone_delta_pair(|_| dim_pair(Role::TertiaryDim, Role::Tertiary)),
        RoleSpec::new(Role::OnTertiary, Tertiary)
            .background(|s| {
                Some(if is_phone(s) {
                    Role::Tertiary
                } else {
                    Role::TertiaryDim
                })
            })
            .contrast_curve(on_accent_curve),
        RoleSpec::new(Role::TertiaryContainer, Tertiary)
            .tone(|s| {
                let palette = s.tertiary_palette();
                let dark = s.is_dark();
                if !is_phone(s) {
                    return match s.variant() {
                        Variant::TonalSpot => t_max_c(palette, 0.0, 90.0, 1.0),
                        _ => max_c(palette),
                    };
                }
                match s.variant() {
                    Variant::Neutral if dark => t_max_c(palette, 0.0, 93.0, 1.0),
                    Variant::Neutral => t_max_c(palette, 0.0, 96.0, 1.0),
                    Variant::TonalSpot => {
                        t_max_c(palette, 0.0, if dark { 93.0 } else { 100.0 }, 1.0)
                    }
                    Variant::Expressive => {
                        let upper = if is_cyan_hue(palette.hue()) {
                            88.0
                        } else if dark {
                            93.0
                        } else {
                            100.0
                        };
                        t_max_c(palette, 75.0, upper, 1.0)
                    }
                    _ if dark => t_max_c(palette, 0.0, 93.0, 1.0),
                    _ => t_max_c(palette, 72.0, 100.0, 1.0),
                }
            })
            .as_background()
            .background(container_background)
            .contrast_curve(container_curve)
            .tone_delta_pair(|s| container_pair(s, Role::TertiaryContainer, Role::TertiaryDim)),
        RoleSpec::new(Role::OnTertiaryContainer, Tertiary)
            .background(|_| Some(Role::TertiaryContainer))
            .contrast_curve(on_accent_curve),
    ]
}

fn error() -> Vec<RoleSpec> {
    use PaletteKind::Error;
    vec![
        RoleSpec::new(Role::Error, Error)
            .tone(|s| {
                let palette = s.error_palette();
                match (is_phone(s), s.is_dark()) {
                    (true, true) => t_min_c(palette, 0.0, 98.0),
                    (true, false) => max_c(palette),
                    (false, _) => min_c(palette),
                }
            })
            .as_background()
            .background(accent_background)
            .contrast_curve(accent_curve)
            .tone_delta_pair(|s| accent_pair(s, Role::ErrorContainer, Role::Error)),
        RoleSpec::new(Role::ErrorDim, Error)
            .tone(|s| min_c(s.error_palette()))
            .as_background()
            .background(|_| Some(Role::SurfaceContainerHigh))
            .contrast_curve(|_| curve(4.5))
            .tone_delta_pair(|_| dim_pair(Role::ErrorDim, Role::Error)),
        RoleSpec::new(Role::OnError, Error)
            .background(|s| Some(if is_phone(s) { Role::Error } else { Role::ErrorDim }))
            .contrast_curve(on_accent_curve),
        RoleSpec::new(Role::ErrorContainer, Error)
            .tone(|s| {
                let palette = s.error_palette();
                match (is_phone(s), s.is_dark()) {
                    (false, _) => 30.0,
                    (true, true) => t_min_c(palette, 30.0, 93.0),
                    (true, false) => t_max_c(palette, 0.0, 90.0, 1.0),
                }
            })
            .as_background()
            .background(container_background)
            .contrast_curve(container_curve)
            .tone_delta_pair(|s| container_pair(s, Role::ErrorContainer, Role::ErrorDim)),
        RoleSpec::new(Role::OnErrorContainer, Error)
            .background(|_| Some(Role::ErrorContainer))
            .contrast_curve(accent_curve),
    ]
}

/// Fixed roles take their container's tone from the light, standard-contrast
/// scheme so they read the same in light and dark themes.
fn fixed() -> Vec<RoleSpec> {
    use PaletteKind::{Primary, Secondary, Tertiary};
    vec![
        RoleSpec::new(Role::PrimaryFixed, Primary)
            .tone(|s| s.light_standard().tone_of(Role::PrimaryContainer))
            .tone_deps(&[Role::PrimaryContainer])
            .as_background()
            .background(container_background)
            .contrast_curve(container_curve),
        RoleSpec::new(Role::PrimaryFixedDim, Primary)
            .tone(|s| s.tone_of(Role::PrimaryFixed))
            .tone_deps(&[Role::PrimaryFixed])
            .as_background()
            .tone_delta_pair(|_| fixed_dim_pair(Role::PrimaryFixedDim, Role::PrimaryFixed)),
        RoleSpec::new(Role::OnPrimaryFixed, Primary)
            .background(|_| Some(Role::PrimaryFixedDim))
            .contrast_curve(|_| curve(7.0)),
        RoleSpec::new(Role::OnPrimaryFixedVariant, Primary)
            .background(|_| Some(Role::PrimaryFixedDim))
            .contrast_curve(|_| curve(4.5)),
        RoleSpec::new(Role::SecondaryFixed, Secondary)
            .tone(|s| s.light_standard().tone_of(Role::SecondaryContainer))
            .tone_deps(&[Role::SecondaryContainer])
            .as_background()
            .background(container_background)
            .contrast_curve(container_curve),
        RoleSpec::new(Role::SecondaryFixedDim, Secondary)
            .tone(|s| s.tone_of(Role::SecondaryFixed))
            .tone_deps(&[Role::SecondaryFixed])
            .as_background()
            .tone_delta_pair(|_| fixed_dim_pair(Role::SecondaryFixedDim, Role::SecondaryFixed)),
        RoleSpec::new(Role::OnSecondaryFixed, Secondary)
            .background(|_| Some(Role::SecondaryFixedDim))
            .contrast_curve(|_| curve(7.0)),
        RoleSpec::new(Role::OnSecondaryFixedVariant, Secondary)
            .background(|_| Some(Role::SecondaryFixedDim))
            .contrast_curve(|_| curve(4.5)),
        RoleSpec::new(Role::TertiaryFixed, Tertiary)
            .tone(|s| s.light_standard().tone_of(Role::TertiaryContainer))
            .tone_deps(&[Role::TertiaryContainer])
            .as_background()
            .background(container_background)
            .contrast_curve(container_curve),
        RoleSpec::new(Role::TertiaryFixedDim, Tertiary)
            .tone(|s| s.tone_of(Role::TertiaryFixed))
            .tone_deps(&[Role::TertiaryFixed])
            .as_background()
            .tone_delta_pair(|_| fixed_dim_pair(Role::TertiaryFixedDim, Role::TertiaryFixed)),
        RoleSpec::new(Role::OnTertiaryFixed, Tertiary)
            .background(|_| Some(Role::TertiaryFixedDim))
            .contrast_curve(|_| curve(7.0)),
        RoleSpec::new(Role::OnTertiaryFixedVariant, Tertiary)
            .background(|_| Some(Role::TertiaryFixedDim))
            .contrast_curve(|_| curve(4.5)),
    ]
}

/// The 2021 roles with the 2025 replacements applied, plus the `*_dim` roles.
pub(crate) fn roles() -> Vec<RoleSpec> {
    let mut roles = spec_2021::roles();
    let overrides = surfaces()
        .into_iter()
        .chain(primary())
        .chain(secondary())
        .chain(tertiary())
        .chain(error())
        .chain(fixed());
    for spec in overrides {
        match roles.iter_mut().find(|existing| existing.role == spec.role) {
            Some(existing) => *existing = spec,
            None => roles.push(spec),
        }
    }
    roles
}
