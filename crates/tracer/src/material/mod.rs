use glam::Vec2;

use crate::color::Rgb;

/// Phong material: a diffuse base color plus white specular highlights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Blending weights. `x` scales the specular term, `y` scales the diffuse term.
    pub albedo: Vec2,
    pub diffuse_color: Rgb,
    /// Phong exponent, higher means sharper highlights
    pub specular_exponent: f32,
}

impl Material {
    pub fn new(albedo: [f32; 2], diffuse_color: [f32; 3], specular_exponent: f32) -> Self {
        Self {
            albedo: Vec2::from_array(albedo),
            diffuse_color: Rgb::from_array(diffuse_color),
            specular_exponent,
        }
    }

    pub fn specular_weight(&self) -> f32 {
        self.albedo.x
    }

    pub fn diffuse_weight(&self) -> f32 {
        self.albedo.y
    }
}

#[derive(Debug, Clone)]
pub struct MaterialDescriptor {
    pub label: Option<String>,
    pub material: Material,
}

/// Index of a material in the scene material table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialId(pub usize);
