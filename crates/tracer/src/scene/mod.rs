pub mod examples;

use crate::{
    aggregate::ShapeList,
    light::Light,
    material::{Material, MaterialDescriptor, MaterialId},
    math::point::Point,
    shape::{Shape, Sphere},
    utils::log_once::warn_once,
};

/// Objects, materials and lights to render. Built once, read-only afterwards.
#[derive(Default)]
pub struct Scene {
    pub objects: ShapeList,
    pub materials: Vec<MaterialDescriptor>,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object in the scene
    pub fn insert_object<T: Shape + 'static>(&mut self, object: T) {
        self.objects.0.push(Box::new(object))
    }

    pub fn insert_sphere(&mut self, material: MaterialId, center: Point, radius: f32) {
        if radius <= 0.0 {
            warn_once!("sphere with a non-positive radius ({radius}), results are unspecified");
        }
        debug_assert!(material.0 < self.materials.len(), "unknown material {material:?}");
        self.insert_object(Sphere::new(center, radius, material))
    }

    /// Insert a light in the scene
    pub fn insert_light(&mut self, position: Point, intensity: f32) {
        if intensity <= 0.0 {
            warn_once!("light with a non-positive intensity ({intensity}), results are unspecified");
        }
        self.lights.push(Light::new(position, intensity));
    }

    /// Insert a material and returns the Material ID associated with this material
    pub fn insert_material(&mut self, label: Option<String>, material: Material) -> MaterialId {
        self.materials.push(MaterialDescriptor { label, material });
        MaterialId(self.materials.len() - 1)
    }
}
