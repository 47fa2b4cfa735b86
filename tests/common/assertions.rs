//! Assertion helpers for tests.

use dynacolor::models::SchemeDocument;
use material_color::{Argb, Hct};
use pretty_assertions::assert_eq;

/// Assert a hex string parses and is fully opaque
pub fn assert_opaque_hex(hex: &str) {
    let argb: Argb = hex
        .parse()
        .unwrap_or_else(|e| panic!("{hex:?} is not a hex color: {e}"));
    assert!(argb.is_opaque(), "{hex} is translucent");
}

/// Assert the document carries every role, with exactly `absent` missing
pub fn assert_roles(document: &SchemeDocument, absent: &[&str]) {
    assert_eq!(document.roles.len(), 59, "role map should list every role");
    let mut missing: Vec<&str> = document
        .roles
        .iter()
        .filter(|(_, hex)| hex.is_none())
        .map(|(name, _)| name.as_str())
        .collect();
    missing.sort_unstable();
    let mut expected = absent.to_vec();
    expected.sort_unstable();
    assert_eq!(missing, expected);

    for hex in document.roles.values().flatten() {
        assert_opaque_hex(hex);
    }
}

/// Assert two colors have hues within `tolerance` degrees
pub fn assert_hue_near(actual: &str, expected: &str, tolerance: f64) {
    let a = Hct::from_argb(actual.parse().expect("actual hex"));
    let b = Hct::from_argb(expected.parse().expect("expected hex"));
    let diff = 180.0 - ((a.hue() - b.hue()).abs() - 180.0).abs();
    assert!(
        diff <= tolerance,
        "hue of {actual} ({:.1}) is {diff:.1} degrees from {expected} ({:.1})",
        a.hue(),
        b.hue()
    );
}
