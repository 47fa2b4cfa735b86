//! HCT solver: finds the sRGB color for a requested hue, chroma and tone
//!
//! Tone fixes Y exactly, so the search runs on the plane of constant Y inside
//! the linear-RGB cube. A few Newton steps on CAM16 J usually land on an
//! in-gamut answer at the requested chroma. When they do not, the requested
//! chroma is out of gamut and the solver bisects along the gamut boundary for
//! the color of that hue and tone with maximum chroma.

use std::f64::consts::PI;

use super::argb::Argb;
use super::linear_rgb::LinearRgb;
use super::lut::{true_delinearized, y_from_lstar, CRITICAL_PLANES};
use super::viewing_conditions::ViewingConditions;
use crate::math::{matrix_multiply, sanitize_degrees, signum, Matrix3};

const SCALED_DISCOUNT_FROM_LINRGB: Matrix3 = [
    [0.001200833568784504, 0.002389694492170889, 0.0002795742885861124],
    [0.0005891086651375999, 0.0029785502573438758, 0.0003270666104008398],
    [0.00010146692491640572, 0.0005364214359186694, 0.0032979401770712076],
];

const LINRGB_FROM_SCALED_DISCOUNT: Matrix3 = [
    [1373.2198709594231, -1100.4251190754821, -7.278681089101213],
    [-271.815969077903, 559.6580465940733, -32.46047482791194],
    [1.9622899599665666, -57.173814538844006, 308.7233197812385],
];

const Y_FROM_LINRGB: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Sentinel for "no vertex on this edge".
const NO_POINT: [f64; 3] = [-1.0, -1.0, -1.0];

#[inline]
fn sanitize_radians(angle: f64) -> f64 {
    (angle + PI * 8.0) % (PI * 2.0)
}

#[inline]
fn chromatic_adaptation(component: f64) -> f64 {
    let af = component.abs().powf(0.42);
    signum(component) * 400.0 * af / (af + 27.13)
}

#[inline]
fn inverse_chromatic_adaptation(adapted: f64) -> f64 {
    let adapted_abs = adapted.abs();
    let base = (27.13 * adapted_abs / (400.0 - adapted_abs)).max(0.0);
    signum(adapted) * base.powf(1.0 / 0.42)
}

/// CAM16 hue, in radians, of a linear RGB point.
fn hue_of(linrgb: [f64; 3]) -> f64 {
    let scaled = matrix_multiply(linrgb, &SCALED_DISCOUNT_FROM_LINRGB);
    let r_a = chromatic_adaptation(scaled[0]);
    let g_a = chromatic_adaptation(scaled[1]);
    let b_a = chromatic_adaptation(scaled[2]);
    let a = (11.0 * r_a - 12.0 * g_a + b_a) / 11.0;
    let b = (r_a + g_a - 2.0 * b_a) / 9.0;
    b.atan2(a)
}

/// True when `b` lies on the counter-clockwise arc from `a` to `c`.
#[inline]
fn are_in_cyclic_order(a: f64, b: f64, c: f64) -> bool {
    sanitize_radians(b - a) < sanitize_radians(c - a)
}

/// Fraction of the way from `source` to `target` at which `mid` sits.
#[inline]
fn intercept(source: f64, mid: f64, target: f64) -> f64 {
    (mid - source) / (target - source)
}

fn lerp_point(source: [f64; 3], t: f64, target: [f64; 3]) -> [f64; 3] {
    [
        source[0] + (target[0] - source[0]) * t,
        source[1] + (target[1] - source[1]) * t,
        source[2] + (target[2] - source[2]) * t,
    ]
}

/// Point on the segment from `source` to `target` whose `axis` equals
/// `coordinate`.
fn set_coordinate(source: [f64; 3], coordinate: f64, target: [f64; 3], axis: usize) -> [f64; 3] {
    let t = intercept(source[axis], coordinate, target[axis]);
    lerp_point(source, t, target)
}

#[inline]
fn is_bounded(x: f64) -> bool {
    (0.0..=100.0).contains(&x)
}

/// The nth intersection of the constant-Y plane with an edge of the RGB
/// cube, or [`NO_POINT`] when that edge is missed. There are 12 edges.
fn nth_vertex(y: f64, n: usize) -> [f64; 3] {
    let [k_r, k_g, k_b] = Y_FROM_LINRGB;
    let coord_a = if n % 4 <= 1 { 0.0 } else { 100.0 };
    let coord_b = if n % 2 == 0 { 0.0 } else { 100.0 };
    if n < 4 {
        let g = coord_a;
        let b = coord_b;
        let r = (y - g * k_g - b * k_b) / k_r;
        if is_bounded(r) {
            [r, g, b]
        } else {
            NO_POINT
        }
    } else if n < 8 {
        let b = coord_a;
        let r = coord_b;
        let g = (y - r * k_r - b * k_b) / k_g;
        if is_bounded(g) {
            [r, g, b]
        } else {
            NO_POINT
        }
    } else {
        let r = coord_a;
        let g = coord_b;
        let b = (y - r * k_r - g * k_g) / k_b;
        if is_bounded(b) {
            [r, g, b]
        } else {
            NO_POINT
        }
    }
}

/// Finds the edge of the constant-Y polygon that straddles `target_hue`.
fn bisect_to_segment(y: f64, target_hue: f64) -> ([f64; 3], [f64; 3]) {
    let mut left = NO_POINT;
    let mut right = NO_POINT;
    let mut left_hue = 0.0;
    let mut right_hue = 0.0;
    let mut initialized = false;
    let mut uncut = true;
    for n in 0..12 {
        let mid = nth_vertex(y, n);
        if mid[0] < 0.0 {
            continue;
        }
        let mid_hue = hue_of(mid);
        if !initialized {
            left = mid;
            right = mid;
            left_hue = mid_hue;
            right_hue = mid_hue;
            initialized = true;
            continue;
        }
        if uncut || are_in_cyclic_order(left_hue, mid_hue, right_hue) {
            uncut = false;
            if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                right_hue = mid_hue;
            } else {
                left = mid;
                left_hue = mid_hue;
            }
        }
    }
    (left, right)
}

fn midpoint(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0, (a[2] + b[2]) / 2.0]
}

#[inline]
fn critical_plane_below(x: f64) -> i32 {
    (x - 0.5).floor() as i32
}

#[inline]
fn critical_plane_above(x: f64) -> i32 {
    (x - 0.5).ceil() as i32
}

/// Narrows the straddling segment down to the critical planes, where an
/// 8-bit channel changes value, so the result is the most chromatic
/// displayable color.
fn bisect_to_limit(y: f64, target_hue: f64) -> [f64; 3] {
    let (mut left, mut right) = bisect_to_segment(y, target_hue);
    let mut left_hue = hue_of(left);
    for axis in 0..3 {
        if left[axis] == right[axis] {
            continue;
        }
        let (mut l_plane, mut r_plane) = if left[axis] < right[axis] {
            (
                critical_plane_below(true_delinearized(left[axis])),
                critical_plane_above(true_delinearized(right[axis])),
            )
        } else {
            (
                critical_plane_above(true_delinearized(left[axis])),
                critical_plane_below(true_delinearized(right[axis])),
            )
        };
        for _ in 0..8 {
            if (r_plane - l_plane).abs() <= 1 {
                break;
            }
            let m_plane = (l_plane + r_plane).div_euclid(2);
            let mid_plane_coordinate = CRITICAL_PLANES[m_plane as usize];
            let mid = set_coordinate(left, mid_plane_coordinate, right, axis);
            let mid_hue = hue_of(mid);
            if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                r_plane = m_plane;
            } else {
                left = mid;
                left_hue = mid_hue;
                l_plane = m_plane;
            }
        }
    }
    midpoint(left, right)
}

/// Newton iteration on J for an in-gamut solution at the exact chroma.
/// Returns `None` when the requested chroma is outside the sRGB gamut.
fn find_result_by_j(hue_radians: f64, chroma: f64, y: f64) -> Option<Argb> {
    // Initial estimate of J.
    let mut j = y.sqrt() * 11.0;
    let vc = ViewingConditions::standard();
    let t_inner_coeff = 1.0 / (1.64 - 0.29f64.powf(vc.n)).powf(0.73);
    let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
    let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
    let (h_sin, h_cos) = hue_radians.sin_cos();
    for iteration in 0..5 {
        let j_normalized = j / 100.0;
        let alpha = if chroma == 0.0 || j == 0.0 {
            0.0
        } else {
            chroma / j_normalized.sqrt()
        };
        let t = (alpha * t_inner_coeff).powf(1.0 / 0.9);
        let ac = vc.aw * j_normalized.powf(1.0 / vc.c / vc.z);
        let p2 = ac / vc.nbb;
        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;
        let linrgb = matrix_multiply(
            [
                inverse_chromatic_adaptation(r_a),
                inverse_chromatic_adaptation(g_a),
                inverse_chromatic_adaptation(b_a),
            ],
            &LINRGB_FROM_SCALED_DISCOUNT,
        );
        if linrgb.iter().any(|&c| c < 0.0) {
            return None;
        }
        let fnj = Y_FROM_LINRGB[0] * linrgb[0]
            + Y_FROM_LINRGB[1] * linrgb[1]
            + Y_FROM_LINRGB[2] * linrgb[2];
        if fnj <= 0.0 {
            return None;
        }
        if iteration == 4 || (fnj - y).abs() < 0.002 {
            if linrgb.iter().any(|&c| c > 100.01) {
                return None;
            }
            return Some(LinearRgb::from_array(linrgb).to_argb());
        }
        // Newton step: J is roughly proportional to sqrt(Y).
        j -= (fnj - y) * j / (2.0 * fnj);
    }
    None
}

/// The sRGB color closest to the requested HCT coordinates.
///
/// Hue and tone are honoured exactly (up to 8-bit rounding); chroma is
/// reduced to the gamut maximum when the request exceeds it.
pub fn solve_to_argb(hue_degrees: f64, chroma: f64, lstar: f64) -> Argb {
    if chroma < 0.0001 || !(0.0001..=99.9999).contains(&lstar) {
        return Argb::from_lstar(lstar);
    }
    let hue_degrees = sanitize_degrees(hue_degrees);
    let hue_radians = hue_degrees.to_radians();
    let y = y_from_lstar(lstar);
    if let Some(exact) = find_result_by_j(hue_radians, chroma, y) {
        return exact;
    }
    LinearRgb::from_array(bisect_to_limit(y, hue_radians)).to_argb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achromatic_requests_return_grays() {
        assert_eq!(solve_to_argb(120.0, 0.0, 50.0), Argb::from_lstar(50.0));
        assert_eq!(solve_to_argb(0.0, 50.0, 0.0), Argb::BLACK);
        assert_eq!(solve_to_argb(0.0, 50.0, 100.0), Argb::WHITE);
    }

    #[test]
    fn test_in_gamut_request() {
        assert_eq!(solve_to_argb(120.0, 60.0, 50.0), Argb(0xFF6D7F00));
    }

    #[test]
    fn test_out_of_gamut_request_clamps_chroma() {
        // Chroma 200 is never reachable; the result keeps the tone.
        let argb = solve_to_argb(149.0, 200.0, 87.92);
        assert!((argb.lstar() - 87.92).abs() < 0.5);
    }

    #[test]
    fn test_nth_vertex_misses_return_sentinel() {
        // Y = 0 only touches the black corner.
        let hits = (0..12).filter(|&n| nth_vertex(0.0, n)[0] >= 0.0).count();
        assert!(hits >= 1);
        assert_eq!(nth_vertex(100.0, 0), NO_POINT);
    }

    #[test]
    fn test_critical_plane_rounding() {
        assert_eq!(critical_plane_below(10.5), 10);
        assert_eq!(critical_plane_above(10.5), 10);
        assert_eq!(critical_plane_below(10.7), 10);
        assert_eq!(critical_plane_above(10.7), 11);
    }
}
