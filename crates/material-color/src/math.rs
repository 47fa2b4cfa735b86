//! Small numeric helpers shared by the color kernel and scheme code.

/// A 3x3 matrix in row-major order.
pub type Matrix3 = [[f64; 3]; 3];

/// The sign of `num`: -1, 0 or 1.
#[inline]
pub fn signum(num: f64) -> f64 {
    if num < 0.0 {
        -1.0
    } else if num == 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Linear interpolation from `start` (at 0.0) to `stop` (at 1.0).
#[inline]
pub fn lerp(start: f64, stop: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * stop
}

/// Clamps `input` into `min..=max`.
///
/// Unlike [`f64::clamp`] this never panics when `min > max`; the lower bound
/// is checked first.
#[inline]
pub fn clamp_f64(min: f64, max: f64, input: f64) -> f64 {
    if input < min {
        min
    } else if input > max {
        max
    } else {
        input
    }
}

#[inline]
pub fn clamp_i32(min: i32, max: i32, input: i32) -> i32 {
    if input < min {
        min
    } else if input > max {
        max
    } else {
        input
    }
}

/// Normalises an integer angle into `0..360`.
#[inline]
pub fn sanitize_degrees_i32(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Normalises an angle in degrees into `0.0..360.0`.
#[inline]
pub fn sanitize_degrees(degrees: f64) -> f64 {
    let degrees = degrees % 360.0;
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Direction (+1 or -1) of the shortest rotation from `from` to `to`.
#[inline]
pub fn rotation_direction(from: f64, to: f64) -> f64 {
    let increasing_difference = sanitize_degrees(to - from);
    if increasing_difference <= 180.0 {
        1.0
    } else {
        -1.0
    }
}

/// Distance between two hues on the circle, in `0.0..=180.0`.
#[inline]
pub fn difference_degrees(a: f64, b: f64) -> f64 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// Multiplies `row` (as a column vector) by `matrix`.
#[inline]
pub fn matrix_multiply(row: [f64; 3], matrix: &Matrix3) -> [f64; 3] {
    [
        row[0] * matrix[0][0] + row[1] * matrix[0][1] + row[2] * matrix[0][2],
        row[0] * matrix[1][0] + row[1] * matrix[1][1] + row[2] * matrix[1][2],
        row[0] * matrix[2][0] + row[1] * matrix[2][1] + row[2] * matrix[2][2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_degrees() {
        assert_eq!(sanitize_degrees(-30.0), 330.0);
        assert_eq!(sanitize_degrees(390.0), 30.0);
        assert_eq!(sanitize_degrees(0.0), 0.0);
        assert_eq!(sanitize_degrees_i32(-1), 359);
        assert_eq!(sanitize_degrees_i32(720), 0);
    }

    #[test]
    fn test_rotation_direction_prefers_short_arc() {
        assert_eq!(rotation_direction(10.0, 50.0), 1.0);
        assert_eq!(rotation_direction(10.0, 350.0), -1.0);
        assert_eq!(rotation_direction(350.0, 10.0), 1.0);
    }

    #[test]
    fn test_difference_degrees_wraps() {
        assert_eq!(difference_degrees(350.0, 10.0), 20.0);
        assert_eq!(difference_degrees(0.0, 180.0), 180.0);
        assert_eq!(difference_degrees(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_clamp_checks_lower_bound_first() {
        assert_eq!(clamp_f64(0.0, 100.0, 120.0), 100.0);
        assert_eq!(clamp_f64(0.0, 100.0, -3.0), 0.0);
        assert_eq!(clamp_f64(60.0, 40.0, 50.0), 60.0);
    }

    #[test]
    fn test_matrix_multiply_identity() {
        let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(matrix_multiply([1.0, 2.0, 3.0], &identity), [1.0, 2.0, 3.0]);
    }
}
