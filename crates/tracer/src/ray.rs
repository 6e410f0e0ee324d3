use std::ops::{Range, RangeInclusive};

use crate::math::point::Point;

use super::math::vec::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point,
    /// Always unit length
    pub direction: Vec3,
    pub bounds: (f32, f32),
}

impl Ray {
    pub fn new(origin: Point, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            bounds: (0.0, f32::INFINITY),
        }
    }
    pub fn new_with_range(origin: Point, direction: Vec3, range: Range<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            bounds: (range.start, range.end),
        }
    }

    pub fn bounds_from_range(&mut self, range: RangeInclusive<f32>) {
        self.bounds = (*range.start(), *range.end())
    }

    /// Whether a hit at distance `t` is close enough to be seen along this ray.
    ///
    /// The upper bound is exclusive.
    pub fn reaches(&self, t: f32) -> bool {
        self.bounds.0 <= t && t < self.bounds.1
    }

    pub fn at(&self, t: f32) -> Point {
        self.origin + t * self.direction
    }
}
