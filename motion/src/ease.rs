//! Cubic Bézier timing curves.
//!
//! The curve starts at (0, 0) and ends at (1, 1), shaped by two control
//! points. Given the elapsed fraction of a transition on the x axis, the
//! curve returns the fraction of the distance travelled on the y axis.

#[allow(unused_imports)]
use micromath::F32Ext as _;

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 24;
const PRECISION: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

pub const LINEAR: CubicBezier = CubicBezier {
    x1: 0.0,
    y1: 0.0,
    x2: 1.0,
    y2: 1.0,
};

pub const EASE_IN: CubicBezier = CubicBezier {
    x1: 0.42,
    y1: 0.0,
    x2: 1.0,
    y2: 1.0,
};

pub const EASE_OUT: CubicBezier = CubicBezier {
    x1: 0.0,
    y1: 0.0,
    x2: 0.58,
    y2: 1.0,
};

pub const EASE_IN_OUT: CubicBezier = CubicBezier {
    x1: 0.42,
    y1: 0.0,
    x2: 0.58,
    y2: 1.0,
};

impl CubicBezier {
    /// Control point x coordinates must lie within [0, 1] for the curve to
    /// be a function of time. They are clamped.
    #[must_use]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    #[must_use]
    pub fn sample(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let u = self.solve_parameter(x);
        bezier(u, self.y1, self.y2)
    }

    fn solve_parameter(&self, x: f32) -> f32 {
        let mut u = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = bezier(u, self.x1, self.x2) - x;
            if error.abs() < PRECISION {
                return u;
            }
            let slope = bezier_slope(u, self.x1, self.x2);
            if slope.abs() < PRECISION {
                break;
            }
            u -= error / slope;
        }

        let (mut low, mut high) = (0.0, 1.0);
        u = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = bezier(u, self.x1, self.x2);
            if (value - x).abs() < PRECISION {
                break;
            }
            if value < x {
                low = u;
            } else {
                high = u;
            }
            u = (low + high) / 2.0;
        }
        u
    }
}

fn bezier(u: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

fn bezier_slope(u: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * p1 + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}
