
/// Sign of a float as `-1.0`, `0.0` or `1.0`.
///
/// Unlike `f32::signum` this maps both zeroes to `0.0`, and it also maps NaN and the infinities
/// to `0.0` so a broken reading can never look like a sign change.
///
pub fn sign(x: f32) -> f32 {
    if !x.is_finite() || x == 0.0 {
        0.0
    } else if x > 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Absolute difference between two floats.
///
#[inline]
pub fn abs_diff(a: f32, b: f32) -> f32 {
    libm::fabsf(a - b)
}

/// Approximate equality check with a given tolerance.
///
#[inline]
pub fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
    libm::fabsf(a - b) <= tol
}
