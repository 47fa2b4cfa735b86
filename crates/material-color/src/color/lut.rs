//! Transfer functions and the critical-plane table
//!
//! The sRGB companding curves here work on the 0..=100 linear scale that the
//! rest of the kernel uses. The critical-plane table is generated at compile
//! time by build.rs.

// Include the generated table from build.rs
include!(concat!(env!("OUT_DIR"), "/critical_planes.rs"));

/// CIE constants for the L* curve.
const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// Converts an 8-bit sRGB channel to linear light on a 0..=100 scale.
#[inline]
pub fn linearized(component: u8) -> f64 {
    let normalized = component as f64 / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Converts linear light (0..=100) back to an 8-bit sRGB channel, rounding and
/// clamping to 0..=255.
#[inline]
pub fn delinearized(component: f64) -> u8 {
    (compand(component) * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Converts linear light (0..=100) to an unrounded sRGB value on 0.0..=255.0.
#[inline]
pub fn true_delinearized(component: f64) -> f64 {
    compand(component) * 255.0
}

#[inline]
fn compand(component: f64) -> f64 {
    let normalized = component / 100.0;
    if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    }
}

/// The CIE `f` function used by L*, a* and b*.
#[inline]
pub fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// Inverse of [`lab_f`].
#[inline]
pub fn lab_inv_f(ft: f64) -> f64 {
    let ft3 = ft * ft * ft;
    if ft3 > EPSILON {
        ft3
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}

/// Relative luminance Y (0..=100) for an L* value.
#[inline]
pub fn y_from_lstar(lstar: f64) -> f64 {
    100.0 * lab_inv_f((lstar + 16.0) / 116.0)
}

/// L* for a relative luminance Y (0..=100).
#[inline]
pub fn lstar_from_y(y: f64) -> f64 {
    lab_f(y / 100.0) * 116.0 - 16.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linearized_boundaries() {
        assert_eq!(linearized(0), 0.0);
        assert!((linearized(255) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_delinearized_round_trips_every_channel_value() {
        for value in 0..=255u8 {
            assert_eq!(
                delinearized(linearized(value)),
                value,
                "channel {value} did not survive linearize/delinearize"
            );
        }
    }

    #[test]
    fn test_delinearized_clamps_out_of_range() {
        assert_eq!(delinearized(-5.0), 0);
        assert_eq!(delinearized(150.0), 255);
    }

    #[test]
    fn test_lstar_y_round_trip() {
        for i in 0..=100 {
            let lstar = i as f64;
            let back = lstar_from_y(y_from_lstar(lstar));
            assert!((back - lstar).abs() < 1e-9, "L* {lstar} came back as {back}");
        }
        assert!((y_from_lstar(50.0) - 18.418651851244416).abs() < 1e-9);
    }

    #[test]
    fn test_critical_planes_are_monotonic_midpoints() {
        assert_eq!(CRITICAL_PLANES.len(), 255);
        for pair in CRITICAL_PLANES.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        // Each plane sits between the linear values of two adjacent channel values.
        for (i, plane) in CRITICAL_PLANES.iter().enumerate() {
            assert!(linearized(i as u8) < *plane);
            assert!(*plane < linearized(i as u8 + 1));
        }
        assert!((CRITICAL_PLANES[0] - 0.015176349177441876).abs() < 1e-9);
        assert!((CRITICAL_PLANES[254] - 99.55452497210776).abs() < 1e-9);
    }
}
