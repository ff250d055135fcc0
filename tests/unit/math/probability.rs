//! Tests for the error function and normal distribution evaluation

#[cfg(test)]
mod tests {
    use statkit::StatError;
    use statkit::math::probability::{Normal, erf, normal_cdf, normal_pdf};

    // The Abramowitz-Stegun approximation carries absolute error below
    // 1.5e-7, so reference values are checked at 1e-6
    const ERF_TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_erf_reference_values() {
        assert!(erf(0.0).abs() < ERF_TOLERANCE);
        assert!((erf(1.0) - 0.842_700_792_949_715).abs() < ERF_TOLERANCE);
        assert!((erf(2.0) - 0.995_322_265_018_953).abs() < ERF_TOLERANCE);
        assert!((erf(5.0) - 1.0).abs() < ERF_TOLERANCE);
        assert!((erf(-5.0) + 1.0).abs() < ERF_TOLERANCE);
    }

    // Odd symmetry is exact by construction (the sign is factored out
    // before the polynomial), not merely approximate
    #[test]
    fn test_erf_is_exactly_odd() {
        for x in [0.1, 0.5, 1.0, 2.3, 4.0] {
            assert!((erf(-x) + erf(x)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_normal_construction_validates_sigma() {
        assert!(Normal::new(0.0, 1.0).is_ok());
        assert!(Normal::new(-3.0, 0.25).is_ok());

        assert!(matches!(
            Normal::new(0.0, 0.0),
            Err(StatError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Normal::new(0.0, -1.0),
            Err(StatError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_standard_normal_is_the_default() {
        let standard = Normal::standard();
        assert!(standard.mean().abs() < f64::EPSILON);
        assert!((standard.std_dev() - 1.0).abs() < f64::EPSILON);

        let default = Normal::default();
        assert!((default.mean() - standard.mean()).abs() < f64::EPSILON);
        assert!((default.std_dev() - standard.std_dev()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pdf_reference_values() {
        let value = normal_pdf(0.0, 0.0, 1.0).unwrap();
        assert!((value - 0.398_942_280_401_432_7).abs() < 1e-12);

        let value = normal_pdf(1.0, 0.0, 1.0).unwrap();
        assert!((value - 0.241_970_724_519_143_37).abs() < 1e-12);

        // Scaled and shifted distribution: peak density is 1 / (sigma * sqrt(2 pi))
        let value = normal_pdf(5.0, 5.0, 2.0).unwrap();
        assert!((value - 0.199_471_140_200_716_35).abs() < 1e-12);
    }

    #[test]
    fn test_pdf_is_positive_symmetric_and_peaked_at_the_mean() {
        let distribution = Normal::new(2.0, 1.5).unwrap();

        for offset in [0.0, 0.5, 1.0, 3.0, 10.0] {
            let left = distribution.pdf(2.0 - offset);
            let right = distribution.pdf(2.0 + offset);
            assert!(left > 0.0);
            assert!((left - right).abs() < 1e-12, "asymmetric at offset {offset}");
        }

        // Strictly decreasing in distance from the mean
        let mut previous = distribution.pdf(2.0);
        for offset in [0.5, 1.0, 2.0, 4.0] {
            let value = distribution.pdf(2.0 + offset);
            assert!(value < previous, "density not decreasing at offset {offset}");
            previous = value;
        }
    }

    #[test]
    fn test_cdf_reference_values() {
        let value = normal_cdf(0.0, 0.0, 1.0).unwrap();
        assert!((value - 0.5).abs() < 1e-7);

        let value = normal_cdf(1.0, 0.0, 1.0).unwrap();
        assert!((value - 0.841_344_746_068_542_9).abs() < ERF_TOLERANCE);

        let value = normal_cdf(-1.0, 0.0, 1.0).unwrap();
        assert!((value - 0.158_655_253_931_457_1).abs() < ERF_TOLERANCE);

        // Far tails saturate to the [0, 1] limits
        assert!(normal_cdf(10.0, 0.0, 1.0).unwrap() > 0.999_999);
        assert!(normal_cdf(-10.0, 0.0, 1.0).unwrap() < 1e-6);
    }

    #[test]
    fn test_cdf_is_monotonically_non_decreasing() {
        let distribution = Normal::new(1.0, 2.0).unwrap();

        let mut previous = 0.0;
        let mut x = -9.0;
        while x <= 11.0 {
            let value = distribution.cdf(x);
            assert!((0.0..=1.0).contains(&value));
            assert!(value >= previous, "CDF decreased at x = {x}");
            previous = value;
            x += 0.25;
        }
    }

    // CDF(mu - d) = 1 - CDF(mu + d); exact because erf is exactly odd
    #[test]
    fn test_cdf_symmetry_about_the_mean() {
        let distribution = Normal::new(100.0, 15.0).unwrap();

        for d in [0.0, 1.0, 7.5, 15.0, 45.0] {
            let below = distribution.cdf(100.0 - d);
            let above = distribution.cdf(100.0 + d);
            assert!(
                (below - (1.0 - above)).abs() < 1e-12,
                "asymmetric at d = {d}"
            );
        }

        assert!((distribution.cdf(100.0) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_free_functions_reject_non_positive_sigma() {
        assert!(matches!(
            normal_pdf(0.0, 0.0, 0.0),
            Err(StatError::InvalidParameter { .. })
        ));
        assert!(matches!(
            normal_pdf(0.0, 0.0, -2.0),
            Err(StatError::InvalidParameter { .. })
        ));
        assert!(matches!(
            normal_cdf(0.0, 0.0, 0.0),
            Err(StatError::InvalidParameter { .. })
        ));
        assert!(matches!(
            normal_cdf(0.0, 0.0, -0.1),
            Err(StatError::InvalidParameter { .. })
        ));
    }
}
