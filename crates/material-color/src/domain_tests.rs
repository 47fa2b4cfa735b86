//! Regression tests for the behaviours other crates rely on.
//!
//! Each test documents what a failure would mean, so a red test points at
//! the broken contract rather than just a wrong number.

use pretty_assertions::assert_eq;

use crate::api::{GenerateError, SchemeGenerator, Source};
use crate::blend::harmonize;
use crate::cancel::CancellationToken;
use crate::color::{Argb, Cam16, Hct};
use crate::contrast::{lighter, ratio_of_tones};
use crate::dislike::{fix_if_disliked, is_disliked};
use crate::dynamic::{DynamicScheme, Platform, Role, SchemeParams, SpecVersion, Variant};
use crate::math::difference_degrees;
use crate::quantize::{Quantizer, QuantizerCelebi};
use crate::score::{score, ScoreOptions};
use crate::temperature::TemperatureCache;

fn every_scheme(seed: Argb) -> Vec<DynamicScheme> {
    let mut schemes = Vec::new();
    for variant in Variant::ALL {
        for spec_version in [SpecVersion::V2021, SpecVersion::V2025] {
            for platform in [Platform::Phone, Platform::Watch] {
                for is_dark in [false, true] {
                    let params = SchemeParams {
                        variant,
                        is_dark,
                        contrast_level: 0.0,
                        platform,
                        spec_version,
                    };
                    schemes.push(DynamicScheme::new(Hct::from_argb(seed), params));
                }
            }
        }
    }
    schemes
}

// ========================================================================
// Reference values
// ========================================================================

/// If this breaks, it means: the CAM16 forward model drifted. Every other
/// number in the crate is derived from it, so fix this first.
#[test]
fn test_cam16_of_red() {
    let cam = Cam16::from(Argb(0xFFFF0000));
    assert!((cam.hue - 27.408).abs() < 0.001, "hue {}", cam.hue);
    assert!((cam.chroma - 113.357).abs() < 0.001, "chroma {}", cam.chroma);
    assert!((cam.j - 46.445).abs() < 0.001, "j {}", cam.j);
    assert!((cam.q - 105.988).abs() < 0.001, "q {}", cam.q);
}

/// If this breaks, it means: harmonization no longer rotates by
/// min(difference / 2, 15) degrees toward the source hue.
#[test]
fn test_harmonize_reference_values() {
    assert_eq!(harmonize(Argb(0xFFFF0000), Argb(0xFF0000FF)), Argb(0xFFFB0057));
    assert_eq!(harmonize(Argb(0xFF0000FF), Argb(0xFFFFFF00)), Argb(0xFF0047A3));
}

/// If this breaks, it means: the contrast operators lost their WCAG
/// anchoring or the "impossible" sentinel.
#[test]
fn test_contrast_reference_values() {
    assert!((ratio_of_tones(0.0, 100.0) - 21.0).abs() < 0.001);
    assert_eq!(lighter(90.0, 10.0), -1.0);
}

/// If this breaks, it means: the scorer stopped filtering greys or stopped
/// ranking by chroma.
#[test]
fn test_score_reference_values() {
    let greys_and_blue = [(0xFF000000, 1), (0xFFFFFFFF, 1), (0xFF0000FF, 1)]
        .into_iter()
        .map(|(argb, count)| (Argb(argb), count))
        .collect();
    assert_eq!(
        score(&greys_and_blue, &ScoreOptions::default()),
        vec![Argb(0xFF0000FF)]
    );

    let primaries = [(0xFFFF0000, 1), (0xFF00FF00, 1), (0xFF0000FF, 1)]
        .into_iter()
        .map(|(argb, count)| (Argb(argb), count))
        .collect();
    assert_eq!(
        score(&primaries, &ScoreOptions::default()),
        vec![Argb(0xFFFF0000), Argb(0xFF00FF00), Argb(0xFF0000FF)]
    );
}

/// If this breaks, it means: the temperature ordering of the hue wheel
/// changed, which shifts every fidelity and content tertiary.
#[test]
fn test_complement_of_blue() {
    let cache = TemperatureCache::new(Hct::from_argb(Argb(0xFF0000FF)));
    assert_eq!(cache.complement().to_argb(), Argb(0xFF9D0002));
}

/// If this breaks, it means: dark yellow-greens are no longer caught, or
/// the repair no longer lifts them to tone 70.
#[test]
fn test_bile_is_disliked() {
    let bile = Hct::from(100.0, 50.0, 50.0);
    assert!(is_disliked(&bile));
    assert!((fix_if_disliked(bile).tone() - 70.0).abs() < 0.5);
}

// ========================================================================
// Kernel invariants
// ========================================================================

/// If this breaks, it means: the gamut solver no longer finds the color a
/// hue, chroma and tone were measured from. Palettes would shift by
/// visible amounts.
#[test]
fn test_solver_round_trips_the_srgb_lattice() {
    for r in (0..=255).step_by(51) {
        for g in (0..=255).step_by(51) {
            for b in (0..=255).step_by(51) {
                let argb = Argb::from_rgb(r as u8, g as u8, b as u8);
                if argb == Argb::BLACK || argb == Argb::WHITE {
                    continue;
                }
                let measured = Hct::from_argb(argb);
                let solved = Hct::from(measured.hue(), measured.chroma(), measured.tone()).to_argb();
                for (a, b) in [
                    (argb.red(), solved.red()),
                    (argb.green(), solved.green()),
                    (argb.blue(), solved.blue()),
                ] {
                    assert!(
                        a.abs_diff(b) <= 1,
                        "{argb} solved to {solved}"
                    );
                }
            }
        }
    }
}

/// If this breaks, it means: the solver overshoots the requested chroma,
/// lands at the wrong lightness or drifts off the requested hue, so
/// generated roles would miss their contrast targets or change color family.
#[test]
fn test_solver_respects_requested_hue_tone_and_chroma() {
    for hue in (0..360).step_by(15) {
        for chroma in [0.0, 16.0, 48.0, 100.0] {
            for tone in [20.0, 50.0, 80.0] {
                let hct = Hct::from(hue as f64, chroma, tone);
                let argb = hct.to_argb();
                let back = Hct::from_argb(argb);
                // Below ~12 chroma, 8-bit rounding alone moves hue by several degrees.
                if chroma >= 12.0 {
                    let on_boundary = [argb.red(), argb.green(), argb.blue()]
                        .iter()
                        .any(|&channel| channel == 0 || channel == 255);
                    let clipped = on_boundary && back.chroma() < chroma;
                    assert!(
                        difference_degrees(back.hue(), hue as f64) <= 4.0 || clipped,
                        "hue {hue} came back {} at chroma {chroma} tone {tone} ({argb})",
                        back.hue()
                    );
                }
                assert!(
                    (back.tone() - tone).abs() <= 0.5,
                    "tone {tone} came back {} at hue {hue} chroma {chroma}",
                    back.tone()
                );
                assert!(
                    back.chroma() <= chroma + 2.5,
                    "chroma {chroma} came back {} at hue {hue} tone {tone}",
                    back.chroma()
                );
            }
        }
    }
}

// ========================================================================
// Pipeline invariants
// ========================================================================

/// If this breaks, it means: the quantizer loses or invents pixels, so the
/// scorer's proportions no longer describe the image.
#[test]
fn test_quantizer_preserves_opaque_mass() {
    let mut pixels = Vec::new();
    for i in 0..400u32 {
        let r = (i * 37 % 256) as u8;
        let g = (i * 91 % 256) as u8;
        let b = (i * 13 % 256) as u8;
        pixels.push(Argb::from_rgb(r, g, b));
    }
    pixels.extend([Argb(0x00FF0000), Argb(0x80123456)]);

    let result = QuantizerCelebi.quantize(&pixels, 16, None).unwrap();
    assert_eq!(result.total_population(), 400);
    assert!(result.color_to_count.len() <= 16);
}

/// If this breaks, it means: a theme role leaked a translucent color or
/// two schemes built from the same input disagreed.
#[test]
fn test_every_scheme_is_opaque_and_deterministic() {
    let seed = Argb(0xFFB3261E);
    for (a, b) in every_scheme(seed).iter().zip(every_scheme(seed).iter()) {
        let colors = a.all_colors();
        assert!(colors.iter().all(|(_, argb)| argb.is_opaque()));
        assert_eq!(colors, b.all_colors());
    }
}

/// If this breaks, it means: text placed on an accent color can become
/// unreadable for some variant, platform or mode.
#[test]
fn test_on_accent_roles_stay_readable() {
    let pairs = [
        (Role::OnPrimary, Role::Primary),
        (Role::OnSecondary, Role::Secondary),
        (Role::OnTertiary, Role::Tertiary),
        (Role::OnError, Role::Error),
        (Role::OnSurface, Role::Surface),
    ];
    for scheme in every_scheme(Argb(0xFF6750A4)) {
        for (fg, bg) in pairs {
            let (Some(fg_tone), Some(bg_tone)) = (scheme.tone(fg), scheme.tone(bg)) else {
                panic!("{fg:?} or {bg:?} missing in {scheme:?}");
            };
            let ratio = ratio_of_tones(fg_tone, bg_tone);
            assert!(
                ratio >= 4.49,
                "{fg:?} on {bg:?} is {ratio:.2}:1 in {:?}",
                scheme.params()
            );
        }
    }
}

/// If this breaks, it means: callers asking a 2021 theme for a 2025-only
/// role get a made-up color instead of an explicit absence.
#[test]
fn test_generated_map_distinguishes_absent_roles() {
    let generator = SchemeGenerator::new().variant(Variant::TonalSpot);
    let source = Source::hex("#6750A4");

    let current = generator.clone().generate(&source).unwrap();
    assert!(current.colors().iter().all(|(_, argb)| argb.is_some()));

    let legacy = generator.version(SpecVersion::V2021).generate(&source).unwrap();
    assert_eq!(legacy.color(Role::PrimaryDim), None);
    assert!(legacy.color(Role::Primary).is_some());
}

/// If this breaks, it means: the pipeline surfaced a colour for an empty
/// input, or swallowed a cancellation.
#[test]
fn test_pipeline_errors_carry_their_tags() {
    let empty = SchemeGenerator::new().generate(&Source::List(vec![]));
    assert_eq!(empty.unwrap_err().kind(), "empty_source");

    let token = CancellationToken::new();
    token.cancel();
    let cancelled = SchemeGenerator::new()
        .cancellation(token)
        .generate(&Source::hex("#6750A4"));
    assert_eq!(cancelled.unwrap_err(), GenerateError::Cancelled);
}
