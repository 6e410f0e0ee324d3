//! A small Whitted-style ray tracer for scenes made of spheres and point lights.
//!
//! Pixels are shaded with a local Phong model (diffuse + specular) and hard shadows.
//! There is no recursion: reflection, refraction and anti-aliasing are out of the picture.

pub mod aggregate;
pub mod camera;
pub mod color;
pub mod framebuffer;
pub mod integrators;
pub mod light;
pub mod material;
pub mod math;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod utils;
