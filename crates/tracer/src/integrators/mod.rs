use crate::{color::Rgb, ray::Ray, renderer::World};

mod phong;

pub trait Integrator: Send + Sync {
    /// Color seen along `ray`
    fn ray_cast(&self, world: &World, ray: Ray) -> Rgb;

    /// Color of a ray that escapes the scene
    fn sky_ray(&self, world: &World, _ray: Ray) -> Rgb {
        world.background
    }
}

pub use phong::PhongIntegrator;
