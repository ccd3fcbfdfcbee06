//! Planar position type and the bounded movement primitive.
//!
//! Positions are `f32` metres on a flat floor plan.  Single precision keeps
//! per-agent state compact; at scene scales of a few hundred metres the
//! rounding error is far below the arrival tolerances used by the behavior
//! layer.

/// A 2-D position or displacement in metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// The behavior layer compares against squared tolerances, so the square
    /// root is almost never needed on the hot path.
    #[inline]
    pub fn dist_sq(self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn dist(self, other: Vec2) -> f32 {
        self.dist_sq(other).sqrt()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Move `position` toward `target` by at most `speed * dt`, landing exactly
/// on `target` when the step reaches it.  Never overshoots.
///
/// A non-positive step (zero speed, zero `dt`, or negative either) returns
/// `position` unchanged, as does a `target` equal to `position`.
pub fn advance(position: Vec2, target: Vec2, speed: f32, dt: f32) -> Vec2 {
    let step = speed * dt;
    if step <= 0.0 {
        return position;
    }
    let delta = target - position;
    let dist_sq = delta.x * delta.x + delta.y * delta.y;
    if dist_sq <= step * step {
        return target;
    }
    position + delta * (step / dist_sq.sqrt())
}
