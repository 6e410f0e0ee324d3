use glam::Vec3;

use crate::{
    color::{self, Rgb},
    material::Material,
    math::vec::{ReflectVecExt, RgbAsVec3Ext, Vec3AsRgbExt},
    ray::Ray,
    renderer::World,
    shape::{local_info, IntersectionResult},
    utils::counter::counter,
};

use super::Integrator;

/// Local illumination: Phong diffuse and specular terms from every visible light,
/// with hard shadows. Rays never bounce.
pub struct PhongIntegrator {
    /// How far along the normal shadow rays start, to avoid self-intersection
    pub shadow_bias: f32,
}

impl Default for PhongIntegrator {
    fn default() -> Self {
        Self { shadow_bias: 1e-3 }
    }
}

impl Integrator for PhongIntegrator {
    fn ray_cast(&self, world: &World, ray: Ray) -> Rgb {
        let IntersectionResult::Intersection(intersection) = world.objects.intersection_full(ray)
        else {
            return self.sky_ray(world, ray);
        };

        let material = &world.materials[intersection.local_info.material.0].material;
        self.shade(world, &intersection.local_info, ray.direction, material)
    }
}

impl PhongIntegrator {
    /// Color of the surface point `hit` seen along `view_direction`.
    pub fn shade(
        &self,
        world: &World,
        hit: &local_info::Full,
        view_direction: Vec3,
        material: &Material,
    ) -> Rgb {
        let position = hit.pos;
        let normal = hit.normal;

        let mut diffuse_intensity = 0.0;
        let mut specular_intensity = 0.0;
        for light in world.lights {
            let light_distance = light.position.distance(position);
            let light_dir = (light.position - position).normalize();

            if self.is_occluded(world, hit, light_dir, light_distance) {
                counter!("Occluded lights");
                continue;
            }

            diffuse_intensity += light.intensity * light_dir.dot(normal).max(0.0);

            let highlight = light_dir.reflect(normal).dot(view_direction).max(0.0);
            specular_intensity += light.intensity * highlight.powf(material.specular_exponent);
        }

        let diffuse = material.diffuse_color.vec() * diffuse_intensity * material.diffuse_weight();
        let specular = color::linear::WHITE.vec() * specular_intensity * material.specular_weight();
        (diffuse + specular).rgb()
    }

    /// Whether something stands between `hit` and a light `light_distance` away.
    fn is_occluded(
        &self,
        world: &World,
        hit: &local_info::Full,
        light_dir: Vec3,
        light_distance: f32,
    ) -> bool {
        counter!("Shadow rays");
        let offset = self.shadow_bias * hit.normal;
        let shadow_origin = if light_dir.dot(hit.normal) < 0.0 {
            hit.pos - offset
        } else {
            hit.pos + offset
        };

        world
            .objects
            .intersect_bare(world.ray(shadow_origin, light_dir))
            .t()
            .map_or(false, |t| t < light_distance)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{
        color::Rgb,
        integrators::Integrator,
        material::Material,
        math::point::Point,
        renderer::{RenderOptions, World},
        scene::Scene,
    };

    use super::PhongIntegrator;

    /// One unit sphere 5 units down -Z, its near side is at z = -4
    fn scene_with(material: Material) -> Scene {
        let mut scene = Scene::new();
        let id = scene.insert_material(None, material);
        scene.insert_sphere(id, Point::new(0.0, 0.0, -5.0), 1.0);
        scene
    }

    fn cast(scene: &Scene) -> Rgb {
        let world = World::from_scene(scene, &RenderOptions::default());
        let ray = world.ray(Point::ORIGIN, Vec3::NEG_Z);
        PhongIntegrator::default().ray_cast(&world, ray)
    }

    fn assert_close(a: Rgb, b: [f32; 3]) {
        for (x, y) in a.0.into_iter().zip(b) {
            assert!((x - y).abs() < 1e-4, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn no_lights_is_black() {
        let scene = scene_with(Material::new([0.3, 0.6], [0.5, 0.2, 0.1], 10.0));
        assert_close(cast(&scene), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn head_on_light() {
        let mut scene = scene_with(Material::new([0.3, 0.6], [0.5, 0.2, 0.1], 10.0));
        scene.insert_light(Point::ORIGIN, 1.0);

        // diffuse and specular intensities are both 1
        assert_close(cast(&scene), [0.6, 0.42, 0.36]);
    }

    #[test]
    fn albedo_x_weights_specular() {
        let mut scene = scene_with(Material::new([1.0, 0.0], [1.0, 0.0, 0.0], 10.0));
        scene.insert_light(Point::ORIGIN, 1.0);
        assert_close(cast(&scene), [1.0, 1.0, 1.0]);

        let mut scene = scene_with(Material::new([0.0, 1.0], [1.0, 0.0, 0.0], 10.0));
        scene.insert_light(Point::ORIGIN, 1.0);
        assert_close(cast(&scene), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn intensities_add_up() {
        let mut scene = scene_with(Material::new([0.0, 1.0], [0.25, 0.25, 0.25], 10.0));
        scene.insert_light(Point::ORIGIN, 1.0);
        scene.insert_light(Point::ORIGIN, 2.0);
        assert_close(cast(&scene), [0.75, 0.75, 0.75]);
    }

    #[test]
    fn occluded_light_contributes_nothing() {
        let material = Material::new([0.3, 0.6], [0.5, 0.5, 0.5], 10.0);
        let mut scene = scene_with(material);
        scene.insert_light(Point::new(0.0, 4.0, 0.0), 1.0);
        let lit = cast(&scene);
        assert!(lit.max_channel() > 0.1);

        // Sits on the segment between the lit point and the light, away from the view ray
        let occluder = scene.insert_material(None, material);
        scene.insert_sphere(occluder, Point::new(0.0, 2.0, -2.0), 0.5);
        assert_close(cast(&scene), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn spheres_past_the_light_cast_no_shadow() {
        let material = Material::new([0.3, 0.6], [0.5, 0.5, 0.5], 10.0);
        let mut scene = scene_with(material);
        scene.insert_light(Point::new(0.0, 2.0, -2.0), 1.0);
        let lit = cast(&scene);
        assert!(lit.max_channel() > 0.1);

        // On the line from the lit point (0, 0, -4) through the light, but further away
        let beyond = scene.insert_material(None, material);
        scene.insert_sphere(beyond, Point::new(0.0, 5.0, 1.0), 0.5);
        assert_eq!(cast(&scene), lit);
    }

    #[test]
    fn light_behind_surface_is_ignored() {
        let mut scene = scene_with(Material::new([0.3, 0.6], [0.5, 0.5, 0.5], 2.5));
        scene.insert_light(Point::new(0.0, 0.0, -20.0), 1.0);

        let color = cast(&scene);
        assert!(color.0.iter().all(|c| c.is_finite()));
        assert_close(color, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn missed_rays_see_the_background() {
        let scene = scene_with(Material::new([0.3, 0.6], [0.5, 0.5, 0.5], 10.0));
        let options = RenderOptions::default();
        let world = World::from_scene(&scene, &options);

        let ray = world.ray(Point::ORIGIN, Vec3::Y);
        assert_eq!(
            PhongIntegrator::default().ray_cast(&world, ray),
            options.background
        );
    }

    #[test]
    fn spheres_past_the_horizon_are_background() {
        let mut scene = Scene::new();
        let id = scene.insert_material(None, Material::new([0.3, 0.6], [0.5, 0.5, 0.5], 10.0));
        scene.insert_sphere(id, Point::new(0.0, 0.0, -2000.0), 10.0);
        scene.insert_light(Point::ORIGIN, 1.0);

        assert_eq!(cast(&scene), RenderOptions::default().background);
    }
}
