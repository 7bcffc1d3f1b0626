//! Basic 2D types for partitioning weighted point sets.
//!
//! - `WeightedPoint`: planar position plus a scalar weight (e.g. fishing hours).
//! - `Rect`: closed axis-aligned rectangle `[x_min, x_max] × [y_min, y_max]`.
//! - `Axis`: split direction.
//!
//! Coordinates are assumed to be projected already; no curvature handling.

use nalgebra::Vector2;

/// Split direction of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    X,
    Y,
}

impl Axis {
    /// Coordinate of `p` along this axis.
    #[inline]
    pub fn coord(self, p: Vector2<f64>) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

/// Immutable point with an attached scalar weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedPoint {
    pub pos: Vector2<f64>,
    pub weight: f64,
}

impl WeightedPoint {
    #[inline]
    pub fn new(x: f64, y: f64, weight: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            weight,
        }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.x.is_finite() && self.pos.y.is_finite() && self.weight.is_finite()
    }
}

impl From<(f64, f64, f64)> for WeightedPoint {
    #[inline]
    fn from((x, y, w): (f64, f64, f64)) -> Self {
        Self::new(x, y, w)
    }
}

/// Closed axis-aligned rectangle. Invariant: `x_min <= x_max`, `y_min <= y_max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Rect {
    /// Build from bounds; returns `None` if the invariant is violated or a bound is NaN.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Option<Self> {
        if x_min <= x_max && y_min <= y_max {
            Some(Self {
                x_min,
                x_max,
                y_min,
                y_max,
            })
        } else {
            None
        }
    }

    /// Minimal bounding box of `points`; `None` for an empty slice.
    pub fn bounding(points: &[WeightedPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut r = Self {
            x_min: first.x(),
            x_max: first.x(),
            y_min: first.y(),
            y_max: first.y(),
        };
        for p in &points[1..] {
            r.x_min = r.x_min.min(p.x());
            r.x_max = r.x_max.max(p.x());
            r.y_min = r.y_min.min(p.y());
            r.y_max = r.y_max.max(p.y());
        }
        Some(r)
    }

    /// `x_max - x_min`; overflows to `inf` when the bounds span more than `f64::MAX`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
    #[inline]
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width(),
            Axis::Y => self.height(),
        }
    }

    /// Closed containment test.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.x_min <= p.x && p.x <= self.x_max && self.y_min <= p.y && p.y <= self.y_max
    }

    /// Longer axis; exact ties resolve to `tie`.
    #[inline]
    pub fn longer_axis(&self, tie: Axis) -> Axis {
        let (mut w, mut h) = (self.width(), self.height());
        if w.is_infinite() || h.is_infinite() {
            w = self.x_max * 0.5 - self.x_min * 0.5;
            h = self.y_max * 0.5 - self.y_min * 0.5;
        }
        if w > h {
            Axis::X
        } else if h > w {
            Axis::Y
        } else {
            tie
        }
    }

    /// Split at `at` along `axis` into `(low, high)` sharing the edge at `at`.
    ///
    /// `at` is clamped into the rectangle so both halves keep the invariant.
    pub fn split(&self, axis: Axis, at: f64) -> (Rect, Rect) {
        match axis {
            Axis::X => {
                let at = at.clamp(self.x_min, self.x_max);
                (
                    Rect { x_max: at, ..*self },
                    Rect { x_min: at, ..*self },
                )
            }
            Axis::Y => {
                let at = at.clamp(self.y_min, self.y_max);
                (
                    Rect { y_max: at, ..*self },
                    Rect { y_min: at, ..*self },
                )
            }
        }
    }

    /// True if the open interiors intersect (shared edges do not count).
    pub fn interiors_overlap(&self, other: &Rect) -> bool {
        self.x_min.max(other.x_min) < self.x_max.min(other.x_max)
            && self.y_min.max(other.y_min) < self.y_max.min(other.y_max)
    }

    /// Closed CCW ring starting at the lower-left corner (first vertex repeated).
    pub fn corners(&self) -> [Vector2<f64>; 5] {
        let ll = Vector2::new(self.x_min, self.y_min);
        [
            ll,
            Vector2::new(self.x_max, self.y_min),
            Vector2::new(self.x_max, self.y_max),
            Vector2::new(self.x_min, self.y_max),
            ll,
        ]
    }
}
