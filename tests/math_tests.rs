use animath::prelude::*;
use approx::assert_abs_diff_eq;

/// Integration tests for the angle and coordinate helpers, driven through the
/// public prelude the way animation code uses them
#[cfg(test)]
mod math_tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_atan2() {
        init_logging();

        let angle = atan2(100, 100);
        assert_eq!(
            (angle.value() * 10000.0).round(),
            (100_f64.atan2(100.0) * 10000.0).round()
        );
    }

    #[test]
    fn test_atan2_matches_std_at_standard_precision() {
        let config = PrecisionProfile::Standard.resolve();
        let coords: [f64; 7] = [-640.0, -17.0, -0.5, 0.0, 0.5, 17.0, 640.0];

        for &y in &coords {
            for &x in &coords {
                if x == 0.0 && y == 0.0 {
                    continue;
                }
                assert_eq!(
                    config.round(atan2(y, x).value()),
                    config.round(y.atan2(x)),
                    "atan2({y}, {x})"
                );
            }
        }
    }

    #[test]
    fn test_atan2_signed_zero_and_infinite_operands() {
        let inf = f64::INFINITY;
        let cases = [
            (1.0, -0.0),
            (-1.0, -0.0),
            (inf, inf),
            (-inf, inf),
            (inf, -inf),
            (-inf, -inf),
            (3.0, -inf),
        ];
        for (y, x) in cases {
            assert_abs_diff_eq!(atan2(y, x).value(), y.atan2(x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_canvas_to_cartesian_self_reference() {
        init_logging();

        let point = canvas_to_cartesian(Point::new(500.0, 200.0), Point::new(500.0, 200.0));
        assert_eq!(point.x.value(), 0.0);
        assert_eq!(point.y.value(), 0.0);
    }

    #[test]
    fn test_canvas_to_cartesian_inverts_vertical_axis() {
        // (500, -200) is the image of canvas point (500, 200) about center (0, 0).
        // With the arguments the other way round, point (0, 0) about center
        // (500, 200), x = p.x - c.x and y = c.y - p.y give (-500, 200).
        let point = canvas_to_cartesian(Point::new(500.0, 200.0), Point::new(0.0, 0.0));
        assert_eq!(point.x.value(), 500.0);
        assert_eq!(point.y.value(), -200.0);

        let point = canvas_to_cartesian(Point::new(0.0, 0.0), Point::new(500.0, 200.0));
        assert_eq!(point.x.value(), -500.0);
        assert_eq!(point.y.value(), 200.0);
    }

    #[test]
    fn test_conversion_law_and_inverse() {
        let centers = [Point::new(0.0, 0.0), Point::new(160.0, 240.0), Point::new(-3.0, 8.5)];
        let points = [Point::new(1.0, 2.0), Point::new(320.0, 0.0), Point::new(-44.25, 91.0)];

        for center in centers {
            for p in points {
                let cartesian = canvas_to_cartesian(p, center);
                assert_eq!(cartesian.x.value(), p.x - center.x);
                assert_eq!(cartesian.y.value(), -(p.y - center.y));

                let canvas = cartesian_to_canvas(&cartesian, center).current();
                assert_eq!(canvas, p);
            }
        }
    }

    #[test]
    fn test_polar_round_trip_through_canvas() {
        let center = Point::new(150.0, 150.0);
        for p in [Point::new(0.0, 0.0), Point::new(300.0, 75.0), Point::new(150.0, 10.0)] {
            let polar = canvas_to_polar(p, center);
            let back = polar_to_canvas(&polar, center).current();
            assert_abs_diff_eq!(back.x, p.x, epsilon = 1e-9);
            assert_abs_diff_eq!(back.y, p.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_helpers_compose_over_nodes() -> anyhow::Result<()> {
        init_logging();

        let progress = Value::new(0.0);
        let frame = block(&[
            set(&progress, clamp(1.25, 0, 1)),
            multiply(&progress, 360),
        ])?;
        assert_eq!(progress.value(), 1.0);
        assert_eq!(frame.value(), 360.0);

        let angle = round_to(to_rad(&frame), 4)?;
        assert_eq!(angle.value(), 6.2832);
        Ok(())
    }

    #[test]
    fn test_config_drives_comparison() -> anyhow::Result<()> {
        let config = EvaluationConfig::from_json(r#"{ "decimals": 2, "epsilon": 0.01 }"#)?;
        let angle = atan2(1, 1).value();

        assert_eq!(config.round(angle), 0.79);
        assert!(config.approx_eq(angle, 0.785));
        assert_eq!(approximates(angle, 0.785, config.epsilon).value(), 1.0);
        Ok(())
    }

    #[test]
    fn test_structural_errors() {
        assert!(matches!(block(&[]), Err(AnimationError::EmptyBlock)));
        assert_eq!(
            round_to(1.0, 40).unwrap_err().to_string(),
            "invalid precision: 40 decimals (at most 15 supported)"
        );
    }
}
