use std::ops::{Add, Sub};

use glam::Vec3;

/// A position in world space.
///
/// Points and vectors share the same storage but not the same algebra:
/// a vector can be added to a point, two points can only be subtracted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub Vec3);

impl Point {
    pub const ORIGIN: Point = Point(Vec3::ZERO);

    pub fn vec(self) -> Vec3 {
        self.0
    }

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }
}

impl Add<Vec3> for Point {
    type Output = Self;

    fn add(self, rhs: Vec3) -> Self::Output {
        Point(self.vec() + rhs)
    }
}

impl Sub<Vec3> for Point {
    type Output = Self;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Point(self.vec() - rhs)
    }
}

/// We can sub two points but not add them
impl Sub for Point {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        self.vec() - rhs.vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_algebra() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(1.0, 2.0, -1.0);

        assert_eq!(a - b, Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(b + Vec3::Z * 4.0, a);
        assert_eq!(a - Vec3::Z * 4.0, b);
        assert!((a.distance(b) - 4.0).abs() < 1e-6);
    }
}
