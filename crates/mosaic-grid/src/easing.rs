//! Cubic bezier timing curves.

/// Easing used by the tile reveal: fast start, long soft landing.
pub const REVEAL_EASING: CubicBezier = CubicBezier::new(0.2, 0.8, 0.2, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f64 = 1e-7;

/// A timing curve through (0, 0), (x1, y1), (x2, y2), (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// Control point x values must lie in 0.0-1.0 for the curve to be a function of time.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `t` (clamped to 0.0-1.0).
    pub fn ease(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = self.solve_x(t);
        bezier(s, self.y1, self.y2)
    }

    /// Find the curve parameter whose x equals `x`.
    fn solve_x(&self, x: f64) -> f64 {
        // Newton's method converges quickly away from flat spots
        let mut s = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = bezier(s, self.x1, self.x2) - x;
            if error.abs() < EPSILON {
                return s;
            }
            let slope = bezier_slope(s, self.x1, self.x2);
            if slope.abs() < EPSILON {
                break;
            }
            s -= error / slope;
        }

        // Fall back to bisection; x(s) is monotonic for valid curves
        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = bezier(s, self.x1, self.x2);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

/// One axis of the curve at parameter `s` with endpoints fixed at 0 and 1.
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(REVEAL_EASING.ease(0.0), 0.0);
        assert_eq!(REVEAL_EASING.ease(1.0), 1.0);
        assert_eq!(REVEAL_EASING.ease(-3.0), 0.0);
        assert_eq!(REVEAL_EASING.ease(4.0), 1.0);
    }

    #[test]
    fn test_linear_curve_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!((linear.ease(t) - t).abs() < 1e-5, "t = {t}");
        }
    }

    #[test]
    fn test_reveal_easing_front_loaded() {
        // Most of the motion happens in the first half
        assert!(REVEAL_EASING.ease(0.5) > 0.8);
        assert!(REVEAL_EASING.ease(0.1) > 0.1);
    }

    #[test]
    fn test_monotonic() {
        let mut previous = 0.0;
        for i in 0..=100 {
            let value = REVEAL_EASING.ease(i as f64 / 100.0);
            assert!(value + 1e-6 >= previous);
            assert!((0.0..=1.0).contains(&value));
            previous = value;
        }
    }
}
