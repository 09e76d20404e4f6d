#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
    Bezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Ease {
    /// `easeOut` as used by the motion library for title and underline entrances.
    pub const EASE_OUT: Self = Self::Bezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };
    /// `easeInOut`, used by the node pulse loop.
    pub const EASE_IN_OUT: Self = Self::Bezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };
    /// Default stylesheet transition curve.
    pub const STANDARD: Self = Self::Bezier {
        x1: 0.4,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };
    /// Curve of the stylesheet pulse keyframes.
    pub const PULSE: Self = Self::Bezier {
        x1: 0.4,
        y1: 0.0,
        x2: 0.6,
        y2: 1.0,
    };

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Bezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let u = solve_bezier_param(t, x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0));
                bezier_axis(u, y1, y2)
            }
        }
    }
}

// One axis of a cubic bezier anchored at 0 and 1.
fn bezier_axis(u: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

fn bezier_axis_slope(u: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * p1 + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

fn solve_bezier_param(x: f64, x1: f64, x2: f64) -> f64 {
    const EPS: f64 = 1e-7;

    let mut u = x;
    for _ in 0..8 {
        let err = bezier_axis(u, x1, x2) - x;
        if err.abs() < EPS {
            return u;
        }
        let slope = bezier_axis_slope(u, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        u -= err / slope;
    }

    // Newton stalled on a flat segment; x(u) is monotonic for x1,x2 in [0,1].
    let (mut lo, mut hi) = (0.0, 1.0);
    u = x;
    for _ in 0..64 {
        let v = bezier_axis(u, x1, x2);
        if (v - x).abs() < EPS {
            break;
        }
        if v < x {
            lo = u;
        } else {
            hi = u;
        }
        u = 0.5 * (lo + hi);
    }
    u
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
