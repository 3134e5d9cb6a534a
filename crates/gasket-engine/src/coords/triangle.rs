use super::Vec2;

/// Three corners of a triangle, in emission order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    #[inline]
    pub const fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    /// Seed triangle centered in NDC: `(-0.5, -0.5)`, `(0.5, -0.5)`, `(0, 0.5)`.
    #[inline]
    pub const fn centered() -> Self {
        Self {
            a: Vec2::new(-0.5, -0.5),
            b: Vec2::new(0.5, -0.5),
            c: Vec2::new(0.0, 0.5),
        }
    }

    #[inline]
    pub fn corners(&self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }

    /// Twice the signed area; zero for degenerate (collinear) corners.
    #[inline]
    pub fn signed_area2(&self) -> f32 {
        (self.b.x - self.a.x) * (self.c.y - self.a.y)
            - (self.c.x - self.a.x) * (self.b.y - self.a.y)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.signed_area2() == 0.0
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::centered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_centered_seed() {
        let t = Triangle::default();
        assert_eq!(
            t.corners(),
            [Vec2::new(-0.5, -0.5), Vec2::new(0.5, -0.5), Vec2::new(0.0, 0.5)]
        );
    }

    #[test]
    fn centered_seed_is_counter_clockwise() {
        assert!(Triangle::centered().signed_area2() > 0.0);
    }

    #[test]
    fn collinear_corners_are_degenerate() {
        let t = Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0));
        assert!(t.is_degenerate());
    }
}
