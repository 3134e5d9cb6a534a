use core::ops::{Add, Div};

use bytemuck::{Pod, Zeroable};

/// 2D point in normalized device coordinates.
///
/// The layout is two tightly packed `f32`, so a `&[Vec2]` uploads directly as
/// a `Float32x2` vertex stream.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise midpoint: `((a.x + b.x) / 2, (a.y + b.y) / 2)`.
    #[inline]
    pub fn midpoint(self, other: Vec2) -> Vec2 {
        (self + other) / 2.0
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_component_average() {
        let m = Vec2::new(-0.5, -0.5).midpoint(Vec2::new(0.5, -0.5));
        assert_eq!(m, Vec2::new(0.0, -0.5));
    }

    #[test]
    fn midpoint_is_symmetric() {
        let a = Vec2::new(0.25, 3.0);
        let b = Vec2::new(-7.5, 1.0);
        assert_eq!(a.midpoint(b), b.midpoint(a));
    }

    #[test]
    fn midpoint_of_same_point_is_that_point() {
        let p = Vec2::new(0.3, -0.9);
        assert_eq!(p.midpoint(p), p);
    }

    #[test]
    fn slice_casts_to_packed_floats() {
        let pts = [Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)];
        let floats: &[f32] = bytemuck::cast_slice(&pts);
        assert_eq!(floats, &[1.0f32, 2.0, 3.0, 4.0][..]);
        assert_eq!(std::mem::size_of::<Vec2>(), 8);
    }
}
