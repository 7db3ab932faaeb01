use super::Vec2;

/// Solve a unit cubic-bezier timing curve (endpoints (0,0) and (1,1)) for `x`.
///
/// Uses Newton-Raphson on the x polynomial, then evaluates y at the found
/// parameter. Out-of-range inputs are pinned to the endpoints.
pub fn solve_timing_curve(p1: Vec2, p2: Vec2, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut t = x;
    for _ in 0..8 {
        let u = 1.0 - t;
        let x_est = 3.0 * u * u * t * p1.x + 3.0 * u * t * t * p2.x + t * t * t;

        let err = x_est - x;
        if err.abs() < 1e-5 {
            break;
        }

        let dx_dt = 3.0 * u * u * p1.x
            + 6.0 * u * t * (p2.x - p1.x)
            + 3.0 * t * t * (1.0 - p2.x);

        if dx_dt.abs() < 1e-6 {
            break;
        }
        t = (t - err / dx_dt).clamp(0.0, 1.0);
    }

    let u = 1.0 - t;
    3.0 * u * u * t * p1.y + 3.0 * u * t * t * p2.y + t * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_timing_curve_is_identity() {
        let p1 = Vec2::new(0.0, 0.0);
        let p2 = Vec2::new(1.0, 1.0);
        for i in 0..=10 {
            let x = i as f32 / 10.0;
            assert!((solve_timing_curve(p1, p2, x) - x).abs() < 0.001);
        }
    }

    #[test]
    fn test_timing_curve_pins_out_of_range() {
        let p1 = Vec2::new(0.42, 0.0);
        let p2 = Vec2::new(1.0, 1.0);
        assert_eq!(solve_timing_curve(p1, p2, -0.5), 0.0);
        assert_eq!(solve_timing_curve(p1, p2, 1.5), 1.0);
    }
}
