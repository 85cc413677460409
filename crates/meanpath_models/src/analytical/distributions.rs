//! Standard normal distribution functions.
//!
//! Provides the cumulative distribution function used by the analytic
//! average-price formulas. Arguments of large magnitude saturate to the
//! natural CDF boundaries of 0 and 1 instead of overflowing.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Saturation cutoff: beyond this the CDF is 0 or 1 to double precision.
const TAIL_CUTOFF: f64 = 8.0;

/// Complementary error function approximation.
///
/// Abramowitz and Stegun formula 7.1.26, maximum absolute error 1.5e-7,
/// evaluated with Horner's method. `erfc(-x) = 2 - erfc(x)` handles the
/// negative half-line.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let abs_x = x.abs();
    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes `P(X <= x)` for `X ~ N(0, 1)` as `0.5 * erfc(-x / sqrt(2))`.
/// Accurate to about 1e-7 over the whole real line; inputs beyond the tail
/// cutoff return exactly 0 or 1.
///
/// # Examples
/// ```
/// use meanpath_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert_eq!(norm_cdf(1e6_f64), 1.0);
/// assert_eq!(norm_cdf(-1e6_f64), 0.0);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let cutoff = T::from(TAIL_CUTOFF).unwrap();
    if x > cutoff {
        return T::one();
    }
    if x < -cutoff {
        return T::zero();
    }

    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// `phi(x) = exp(-x^2 / 2) / sqrt(2 * pi)`.
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let scale = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    scale * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-5);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [-3.0, -1.5, -0.5, 0.5, 1.5, 3.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-60..=60).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) > norm_cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    #[test]
    fn test_norm_cdf_saturates_without_overflow() {
        // Arguments this large occur for high-volatility, long-maturity inputs
        assert_eq!(norm_cdf(50.0_f64), 1.0);
        assert_eq!(norm_cdf(-50.0_f64), 0.0);
        assert_eq!(norm_cdf(f64::MAX), 1.0);
        assert_eq!(norm_cdf(f64::MIN), 0.0);
    }

    #[test]
    fn test_norm_cdf_bounds() {
        for i in -100..=100 {
            let value = norm_cdf(i as f64 * 0.25);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_norm_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        for x in [0.5, 1.0, 2.0, 3.5] {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cdf_derivative_matches_pdf() {
        let h = 1e-4;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical, norm_pdf(x), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_f32_compatibility() {
        let result = norm_cdf(0.0_f32);
        assert!((result - 0.5).abs() < 1e-5);
    }
}
