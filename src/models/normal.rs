use std::f64::consts::FRAC_1_SQRT_2;

/// Standard normal CDF, Phi(x) = erfc(-x / sqrt(2)) / 2.
///
/// Goes through erfc rather than 1 + erf so the lower tail keeps its relative
/// precision instead of cancelling against 1.
#[inline]
pub fn standard_normal_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
}
