use crate::{material::Material, math::point::Point, scene::Scene};

/// A single white sphere and a single light, for checking the basics.
pub struct DebugScene;

impl DebugScene {
    pub fn insert_into(scene: &mut Scene) {
        let default_material = scene.insert_material(
            Some("Phong - Default".to_string()),
            Material::new([0.5, 0.8], [0.9, 0.9, 0.9], 20.0),
        );

        scene.insert_sphere(default_material, Point::new(0.0, 0.0, -5.0), 1.5);
        scene.insert_light(Point::new(-5.0, 5.0, 0.0), 1.0);
    }
}
