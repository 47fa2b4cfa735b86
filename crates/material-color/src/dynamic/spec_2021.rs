//! Role rules of the 2021 Material spec

use crate::color::Hct;
use crate::dislike::fix_if_disliked;

use super::calculation::foreground_tone;
use super::catalog::{PaletteKind, RoleSpec};
use super::contrast_curve::ContrastCurve;
use super::role::Role;
use super::scheme::DynamicScheme;
use super::tone_delta_pair::{ToneDeltaPair, TonePolarity};
use super::variant::Variant;

const TEXT: ContrastCurve = ContrastCurve::new(4.5, 7.0, 11.0, 21.0);
const ACCENT: ContrastCurve = ContrastCurve::new(3.0, 4.5, 7.0, 7.0);
const CONTAINER: ContrastCurve = ContrastCurve::new(1.0, 1.0, 3.0, 4.5);
const ON_CONTAINER: ContrastCurve = ContrastCurve::new(3.0, 4.5, 7.0, 11.0);

fn dark_light(s: &DynamicScheme, dark: f64, light: f64) -> f64 {
    if s.is_dark() {
        dark
    } else {
        light
    }
}

fn is_monochrome(s: &DynamicScheme) -> bool {
    s.variant() == Variant::Monochrome
}

fn highest_surface(s: &DynamicScheme) -> Option<Role> {
    Some(if s.is_dark() {
        Role::SurfaceBright
    } else {
        Role::SurfaceDim
    })
}

fn container_pair(container: Role, accent: Role) -> Option<ToneDeltaPair> {
    Some(ToneDeltaPair::new(
        container,
        accent,
        10.0,
        TonePolarity::Nearer,
        false,
    ))
}

fn fixed_pair(fixed: Role, fixed_dim: Role) -> Option<ToneDeltaPair> {
    Some(ToneDeltaPair::new(
        fixed,
        fixed_dim,
        10.0,
        TonePolarity::Lighter,
        true,
    ))
}

/// Walks the tone from `tone` towards the chroma a palette asks for, stopping
/// once chroma peaks or comes within 0.4 of the target.
pub(crate) fn find_desired_chroma_by_tone(
    hue: f64,
    chroma: f64,
    tone: f64,
    by_decreasing_tone: bool,
) -> f64 {
    let mut answer = tone;
    let mut closest = Hct::from(hue, chroma, tone);
    if closest.chroma() < chroma {
        let mut chroma_peak = closest.chroma();
        while closest.chroma() < chroma {
            answer += if by_decreasing_tone { -1.0 } else { 1.0 };
            let candidate = Hct::from(hue, chroma, answer);
            if chroma_peak > candidate.chroma() {
                break;
            }
            if (candidate.chroma() - chroma).abs() < 0.4 {
                break;
            }
            if (candidate.chroma() - chroma).abs() < (closest.chroma() - chroma).abs() {
                closest = candidate;
            }
            chroma_peak = chroma_peak.max(candidate.chroma());
        }
    }
    answer
}

fn surfaces() -> Vec<RoleSpec> {
    use PaletteKind::{Neutral, NeutralVariant};
    vec![
        RoleSpec::new(Role::Background, Neutral)
            .tone(|s| dark_light(s, 6.0, 98.0))
            .as_background(),
        RoleSpec::new(Role::OnBackground, Neutral)
            .tone(|s| dark_light(s, 90.0, 10.0))
            .background(|_| Some(Role::Background))
            .contrast_curve(|_| Some(ContrastCurve::new(3.0, 3.0, 4.5, 7.0))),
        RoleSpec::new(Role::Surface, Neutral)
            .tone(|s| dark_light(s, 6.0, 98.0))
            .as_background(),
        RoleSpec::new(Role::SurfaceDim, Neutral)
            .tone(|s| {
                let light = ContrastCurve::new(87.0, 87.0, 80.0, 75.0);
                dark_light(s, 6.0, light.get(s.contrast_level()))
            })
            .as_background(),
        RoleSpec::new(Role::SurfaceBright, Neutral)
            .tone(|s| {
                let dark = ContrastCurve::new(24.0, 24.0, 29.0, 34.0);
                dark_light(s, dark.get(s.contrast_level()), 98.0)
            })
            .as_background(),
        RoleSpec::new(Role::SurfaceContainerLowest, Neutral)
            .tone(|s| {
                let dark = ContrastCurve::new(4.0, 4.0, 2.0, 0.0);
                dark_light(s, dark.get(s.contrast_level()), 100.0)
            })
            .as_background(),
        RoleSpec::new(Role::SurfaceContainerLow, Neutral)
            .tone(|s| {
                let dark = ContrastCurve::new(10.0, 10.0, 11.0, 12.0);
                let light = ContrastCurve::new(96.0, 96.0, 96.0, 95.0);
                let level = s.contrast_level();
                dark_light(s, dark.get(level), light.get(level))
            })
            .as_background(),
        RoleSpec::new(Role::SurfaceContainer, Neutral)
            .tone(|s| {
                let dark = ContrastCurve::new(12.0, 12.0, 16.0, 20.0);
                let light = ContrastCurve::new(94.0, 94.0, 92.0, 90.0);
                let level = s.contrast_level();
                dark_light(s, dark.get(level), light.get(level))
            })
            .as_background(),
        RoleSpec::new(Role::SurfaceContainerHigh, Neutral)
            .tone(|s| {
                let dark = ContrastCurve::new(17.0, 17.0, 21.0, 25.0);
                let light = ContrastCurve::new(92.0, 92.0, 88.0, 85.0);
                let level = s.contrast_level();
                dark_light(s, dark.get(level), light.get(level))
            })
            .as_background(),
        RoleSpec::new(Role::SurfaceContainerHighest, Neutral)
            .tone(|s| {
                let dark = ContrastCurve::new(22.0, 22.0, 26.0, 30.0);
                let light = ContrastCurve::new(90.0, 90.0, 84.0, 80.0);
                let level = s.contrast_level();
                dark_light(s, dark.get(level), light.get(level))
            })
            .as_background(),
        RoleSpec::new(Role::OnSurface, Neutral)
            .tone(|s| dark_light(s, 90.0, 10.0))
            .background(highest_surface)
            .contrast_curve(|_| Some(TEXT)),
        RoleSpec::new(Role::SurfaceVariant, NeutralVariant)
            .tone(|s| dark_light(s, 30.0, 90.0))
            .as_background(),
        RoleSpec::new(Role::OnSurfaceVariant, NeutralVariant)
            .tone(|s| dark_light(s, 80.0, 30.0))
            .background(highest_surface)
            .contrast_curve(|_| Some(ON_CONTAINER)),
        RoleSpec::new(Role::InverseSurface, Neutral)
            .tone(|s| dark_light(s, 90.0, 20.0))
            .as_background(),
        RoleSpec::new(Role::InverseOnSurface, Neutral)
            .tone(|s| dark_light(s, 20.0, 95.0))
            .background(|_| Some(Role::InverseSurface))
            .contrast_curve(|_| Some(TEXT)),
        RoleSpec::new(Role::Outline, NeutralVariant)
            .tone(|s| dark_light(s, 60.0, 50.0))
            .background(highest_surface)
            .contrast_curve(|_| Some(ContrastCurve::new(1.5, 3.0, 4.5, 7.0))),
        RoleSpec::new(Role::OutlineVariant, NeutralVariant)
            .tone(|s| dark_light(s, 30.0, 80.0))
            .background(highest_surface)
            .contrast_curve(|_| Some(CONTAINER)),
        RoleSpec::new(Role::Shadow, Neutral).tone(|_| 0.0),
        RoleSpec::new(Role::Scrim, Neutral).tone(|_| 0.0),
        RoleSpec::new(Role::SurfaceTint, PaletteKind::Primary)
            .tone(|s| dark_light(s, 80.0, 40.0))
            .as_background(),
    ]
}

fn key_colors() -> Vec<RoleSpec> {
    vec![
        RoleSpec::new(Role::PrimaryPaletteKeyColor, PaletteKind::Primary)
            .tone(|s| s.primary_palette().key_color().tone()),
        RoleSpec::new(Role::SecondaryPaletteKeyColor, PaletteKind::Secondary)
            .tone(|s| s.secondary_palette().key_color().tone()),
        RoleSpec::new(Role::TertiaryPaletteKeyColor, PaletteKind::Tertiary)
            .tone(|s| s.tertiary_palette().key_color().tone()),
        RoleSpec::new(Role::NeutralPaletteKeyColor, PaletteKind::Neutral)
            .tone(|s| s.neutral_palette().key_color().tone()),
        RoleSpec::new(Role::NeutralVariantPaletteKeyColor, PaletteKind::NeutralVariant)
            .tone(|s| s.neutral_variant_palette().key_color().tone()),
        RoleSpec::new(Role::ErrorPaletteKeyColor, PaletteKind::Error)
            .tone(|s| s.error_palette().key_color().tone()),
    ]
}

fn primary() -> Vec<RoleSpec> {
    use PaletteKind::Primary;
    vec![
        RoleSpec::new(Role::Primary, Primary)
            .tone(|s| {
                if is_monochrome(s) {
                    dark_light(s, 100.0, 0.0)
                } else {
                    dark_light(s, 80.0, 40.0)
                }
            })
            .as_background()
            .background(highest_surface)
            .contrast_curve(|_| Some(ACCENT))
            .tone_delta_pair(|_| container_pair(Role::PrimaryContainer, Role::Primary)),
        RoleSpec::new(Role::OnPrimary, Primary)
            .tone(|s| {
                if is_monochrome(s) {
                    dark_light(s, 10.0, 90.0)
                } else {
                    dark_light(s, 20.0, 100.0)
                }
            })
            .background(|_| Some(Role::Primary))
            .contrast_curve(|_| Some(TEXT)),
        RoleSpec::new(Role::PrimaryContainer, Primary)
            .tone(|s| {
                if s.variant().is_fidelity() {
                    s.source_hct().tone()
                } else if is_monochrome(s) {
                    dark_light(s, 85.0, 25.0)
                } else {
                    dark_light(s, 30.0, 90.0)
                }
            })
            .as_background()
            .background(highest_surface)
            .contrast_curve(|_| Some(CONTAINER))
            .tone_delta_pair(|_| container_pair(Role::PrimaryContainer, Role::Primary)),
        RoleSpec::new(Role::OnPrimaryContainer, Primary)
            .tone(|s| {
                if s.variant().is_fidelity() {
                    foreground_tone(s.initial_tone(Role::PrimaryContainer), 4.5)
                } else if is_monochrome(s) {
                    dark_light(s, 0.0, 100.0)
                } else {
                    dark_light(s, 90.0, 30.0)
                }
            })
            .background(|_| Some(Role::PrimaryContainer))
            .contrast_curve(|_| Some(ON_CONTAINER)),
        RoleSpec::new(Role::InversePrimary, Primary)
            .tone(|s| dark_light(s, 40.0, 80.0))
            .background(|_| Some(Role::InverseSurface))
            .contrast_curve(|_| Some(ACCENT)),
    ]
}

fn secondary() -> Vec<RoleSpec> {
    use PaletteKind::Secondary;
    vec![
        RoleSpec::new(Role::Secondary, Secondary)
            .tone(|s| dark_light(s, 80.0, 40.0))
            .as_background()
            .background(highest_surface)
            .contrast_curve(|_| Some(ACCENT))
            .tone_delta_pair(|_| container_pair(Role::SecondaryContainer, Role::Secondary)),
        RoleSpec::new(Role::OnSecondary, Secondary)
            .tone(|s| {
                if is_monochrome(s) {
                    dark_light(s, 10.0, 100.0)
                } else {
                    dark_light(s, 20.0, 100.0)
                }
            })
            .background(|_| Some(Role::Secondary))
            .contrast_curve(|_| Some(TEXT)),
        RoleSpec::new(Role::SecondaryContainer, Secondary)
            .tone(|s| {
                let initial = dark_light(s, 30.0, 90.0);
                if is_monochrome(s) {
                    dark_light(s, 30.0, 85.0)
                } else if !s.variant().is_fidelity() {
                    initial
                } else {
                    let palette = s.secondary_palette();
                    find_desired_chroma_by_tone(
                        palette.hue(),
                        palette.chroma(),
                        initial,
                        !s.is_dark(),
                    )
                }
            })
            .as_background()
            .background(highest_surface)
            .contrast_curve(|_| Some(CONTAINER))
            .tone_delta_pair(|_| container_pair(Role::SecondaryContainer, Role::Secondary)),
        RoleSpec::new(Role::OnSecondaryContainer, Secondary)
            .tone(|s| {
                if is_monochrome(s) {
                    dark_light(s, 90.0, 10.0)
                } else if !s.variant().is_fidelity() {
                    dark_light(s, 90.0, 30.0)
                } else {
                    foreground_tone(s.initial_tone(Role::SecondaryContainer), 4.5)
                }
            })
            .background(|_| Some(Role::SecondaryContainer))
            .contrast_curve(|_| Some(ON_CONTAINER)),
    ]
}

fn tertiary() -> Vec<RoleSpec> {
    use PaletteKind::Tertiary;
    vec![
        RoleSpec::new(Role::Tertiary, Tertiary)
            .tone(|s| {
                if is_monochrome(s) {
                    dark_light(s, 90.0, 25.0)
                } else {
                    dark_light(s, 80.0, 40.0)
                }
            })
            .as_background()
            .background(highest_surface)
            .contrast_curve(|_| Some(ACCENT))
            .tone_delta_pair(|_| container_pair(Role::TertiaryContainer, Role::Tertiary)),
        RoleSpec::new(Role::OnTertiary, Tertiary)
            .tone(|s| {
                if is_monochrome(s) {
                    dark_light(s, 10.0, 90.0)
                } else {
                    dark_light(s, 20.0, 100.0)
                }
            })
            .background(|_| Some(Role::Tertiary))
            .contrast_curve(|_| Some(TEXT)),
        RoleSpec::new(Role::TertiaryContainer, Tertiary)
            .tone(|s| {
                if is_monochrome(s) {
                    dark_light(s, 60.0, 49.0)
                } else if !s.variant().is_fidelity() {
                    dark_light(s, 30.0, 90.0)
                } else {
                    let proposed = s
                        .tertiary_palette()
                        .get_hct(s.source_hct().tone());
                    fix_if_disliked(proposed).tone()
                }
            })
            .as_background()
            .background(highest_surface)
            .contrast_curve(|_| Some(CONTAINER))
            .tone_delta_pair(|_| container_pair(Role::TertiaryContainer, Role::Tertiary)),
        RoleSpec::new(Role::OnTertiaryContainer, Tertiary)
            .tone(|s| {
                if is_monochrome(s) {
                    dark_light(s, 0.0, 100.0)
                } else if !s.variant().is_fidelity() {
                    dark_light(s, 90.0, 30.0)
                } else {
                    foreground_tone(s.initial_tone(Role::TertiaryContainer), 4.5)
                }
            })
            .background(|_| Some(Role::TertiaryContainer))
            .contrast_curve(|_| Some(ON_CONTAINER)),
    ]
}

fn error() -> Vec<RoleSpec> {
    use PaletteKind::Error;
    vec![
        RoleSpec::new(Role::Error, Error)
            .tone(|s| dark_light(s, 80.0, 40.0))
            .as_background()
            .background(highest_surface)
            .contrast_curve(|_| Some(ACCENT))
            .tone_delta_pair(|_| container_pair(Role::ErrorContainer, Role::Error)),
        RoleSpec::new(Role::OnError, Error)
            .tone(|s| dark_light(s, 20.0, 100.0))
            .background(|_| Some(Role::Error))
            .contrast_curve(|_| Some(TEXT)),
        RoleSpec::new(Role::ErrorContainer, Error)
            .tone(|s| dark_light(s, 30.0, 90.0))
            .as_background()
            .background(highest_surface)
            .contrast_curve(|_| Some(CONTAINER))
            .tone_delta_pair(|_| container_pair(Role::ErrorContainer, Role::Error)),
        RoleSpec::new(Role::OnErrorContainer, Error)
            .tone(|s| {
                if is_monochrome(s) {
                    dark_light(s, 90.0, 10.0)
                } else {
                    dark_light(s, 90.0, 30.0)
                }
            })
            .background(|_| Some(Role::ErrorContainer))
            .contrast_curve(|_| Some(ON_CONTAINER)),
    ]
}

fn fixed() -> Vec<RoleSpec> {
    use PaletteKind::{Primary, Secondary, Tertiary};
    vec![
        RoleSpec::new(Role::PrimaryFixed, Primary)
            .tone(|s| if is_monochrome(s) { 40.0 } else { 90.0 })
            .as_background()
            .background(highest_surface)
            .contrast_curve(|_| Some(CONTAINER))
            .tone_delta_pair(|_| fixed_pair(Role::PrimaryFixed, Role::PrimaryFixedDim)),
        RoleSpec::new(Role::PrimaryFixedDim, Primary)
            .tone(|s| if is_monochrome(s) { 30.0 } else { 80.0 })
            .as_background()
            .background(highest_surface)
            .contrast_curve(|_| Some(CONTAINER))
            .tone_delta_pair(|_| fixed_pair(Role::PrimaryFixed, Role::PrimaryFixedDim)),
        RoleSpec::new(Role::OnPrimaryFixed, Primary)
            .tone(|s| if is_monochrome(s) { 100.0 } else { 10.0 })
            .background(|_| Some(Role::PrimaryFixedDim))
            .second_background(|_| Some(Role::PrimaryFixed))
            .contrast_curve(|_| Some(TEXT)),
        RoleSpec::new(Role::OnPrimaryFixedVariant, Primary)
            .tone(|s| if is_monochrome(s) { 90.0 } else { 30.0 })
            .background(|_| Some(Role::PrimaryFixedDim))
            .second_background(|_| Some(Role::PrimaryFixed))
            .contrast_curve(|_| Some(ON_CONTAINER)),
        RoleSpec::new(Role::SecondaryFixed, Secondary)
            .tone(|s| if is_monochrome(s) { 80.0 } else { 90.0 })
            .as_background()
            .background(highest_surface)
            .contrast_curve(|_| Some(CONTAINER))
            .tone_delta_pair(|_| fixed_pair(Role::SecondaryFixed, Role::SecondaryFixedDim)),
        RoleSpec::new(Role::SecondaryFixedDim, Secondary)
            .tone(|s| if is_monochrome(s) { 70.0 } else { 80.0 })
            .as_background()
            .background(highest_surface)
            .contrast_curve(|_| Some(CONTAINER))
            .tone_delta_pair(|_| fixed_pair(Role::SecondaryFixed, Role::SecondaryFixedDim)),
        RoleSpec::new(Role::OnSecondaryFixed, Secondary)
            .tone(|_| 10.0)
            .background(|_| Some(Role::SecondaryFixedDim))
            .second_background(|_| Some(Role::SecondaryFixed))
            .contrast_curve(|_| Some(TEXT)),
        RoleSpec::new(Role::OnSecondaryFixedVariant, Secondary)
            .tone(|s| if is_monochrome(s) { 25.0 } else { 30.0 })
            .background(|_| Some(Role::SecondaryFixedDim))
            .second_background(|_| Some(Role::SecondaryFixed))
            .contrast_curve(|_| Some(ON_CONTAINER)),
        RoleSpec::new(Role::TertiaryFixed, Tertiary)
            .tone(|s| if is_monochrome(s) { 40.0 } else { 90.0 })
            .as_background()
            .background(highest_surface)
            .contrast_curve(|_| Some(CONTAINER))
            .tone_delta_pair(|_| fixed_pair(Role::TertiaryFixed, Role::TertiaryFixedDim)),
        RoleSpec::new(Role::TertiaryFixedDim, Tertiary)
            .tone(|s| if is_monochrome(s) { 30.0 } else { 80.0 })
            .as_background()
            .background(highest_surface)
            .contrast_curve(|_| Some(CONTAINER))
            .tone_delta_pair(|_| fixed_pair(Role::TertiaryFixed, Role::TertiaryFixedDim)),
        RoleSpec::new(Role::OnTertiaryFixed, Tertiary)
            .tone(|s| if is_monochrome(s) { 100.0 } else { 10.0 })
            .background(|_| Some(Role::TertiaryFixedDim))
            .second_background(|_| Some(Role::TertiaryFixed))
            .contrast_curve(|_| Some(TEXT)),
        RoleSpec::new(Role::OnTertiaryFixedVariant, Tertiary)
            .tone(|s| if is_monochrome(s) { 90.0 } else { 30.0 })
            .background(|_| Some(Role::TertiaryFixedDim))
            .second_background(|_| Some(Role::TertiaryFixed))
            .contrast_curve(|_| Some(ON_CONTAINER)),
    ]
}

/// The 55 roles of the 2021 rules.
pub(crate) fn roles() -> Vec<RoleSpec> {
    let mut roles = key_colors();
    roles.extend(surfaces());
    roles.extend(primary());
    roles.extend(secondary());
    roles.extend(tertiary());
    roles.extend(error());
    roles.extend(fixed());
    roles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_dim_roles() {
        let roles = roles();
        assert_eq!(roles.len(), 55);
        assert!(roles.iter().all(|spec| !spec.role.is_dim()));
    }

    #[test]
    fn test_desired_chroma_stays_put_when_reachable() {
        assert_eq!(find_desired_chroma_by_tone(270.0, 0.0, 90.0, true), 90.0);
    }

    #[test]
    fn test_desired_chroma_walks_towards_mid_tones() {
        let tone = find_desired_chroma_by_tone(270.0, 60.0, 90.0, true);
        assert!(tone < 90.0);
    }
}
