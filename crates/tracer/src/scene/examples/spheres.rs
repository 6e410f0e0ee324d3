use crate::{material::Material, math::point::Point, scene::Scene};

/// Four spheres in front of the camera, lit by three lights.
///
/// Best seen at 1024x768 with a 90° vertical field of view: the green sphere
/// sits right in the middle of the frame.
pub struct SpheresScene;

impl SpheresScene {
    pub fn insert_into(scene: &mut Scene) {
        let blue = scene.insert_material(
            Some("Blue".to_owned()),
            Material::new([0.3, 0.6], [0.2, 0.55, 0.91], 50.0),
        );
        let red = scene.insert_material(
            Some("Red".to_owned()),
            Material::new([0.5, 1.0], [0.3, 0.1, 0.1], 50.0),
        );
        let green = scene.insert_material(
            Some("Green".to_owned()),
            Material::new([0.3, 0.6], [0.35, 0.8, 0.42], 10.0),
        );
        let yellow = scene.insert_material(
            Some("Yellow".to_owned()),
            Material::new([0.3, 0.6], [0.76, 0.78, 0.31], 10.0),
        );

        scene.insert_sphere(yellow, Point::new(-4.0, 0.0, -16.0), 2.0);
        scene.insert_sphere(red, Point::new(-2.5, -1.0, -12.0), 2.0);
        scene.insert_sphere(green, Point::new(0.0, 0.0, -20.0), 3.0);
        scene.insert_sphere(blue, Point::new(3.5, 2.5, -15.0), 3.2);

        scene.insert_light(Point::new(-20.0, 20.0, 20.0), 1.5);
        scene.insert_light(Point::new(30.0, 50.0, -25.0), 1.8);
        scene.insert_light(Point::new(30.0, 20.0, 30.0), 1.7);
    }
}
