use crate::math::point::Point;

/// A point light.
///
/// `intensity` is a unitless factor, there is no falloff with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Point,
    pub intensity: f32,
}

impl Light {
    pub fn new(position: Point, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}
