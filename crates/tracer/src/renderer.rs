use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::{
    camera::{Camera, PixelCoord},
    color::{self, Rgb},
    framebuffer::Framebuffer,
    integrators::{Integrator, PhongIntegrator},
    light::Light,
    material::MaterialDescriptor,
    math::{point::Point, vec::Vec3},
    ray::Ray,
    scene::Scene,
    shape::Shape,
    utils::{counter::counter, log_once::error_once},
};

/// Everything an [Integrator] may look at while shading. Read-only for the whole render.
pub struct World<'a> {
    pub objects: &'a dyn Shape,
    pub lights: &'a [Light],
    pub materials: &'a [MaterialDescriptor],
    pub background: Rgb,
    /// Hits this far away or further are not seen
    pub horizon: f32,
}

impl<'a> World<'a> {
    pub fn from_scene(scene: &'a Scene, options: &RenderOptions) -> Self {
        Self {
            objects: &scene.objects,
            lights: &scene.lights,
            materials: &scene.materials,
            background: options.background,
            horizon: options.horizon,
        }
    }

    /// A ray bounded by the visibility horizon
    pub fn ray(&self, origin: Point, direction: Vec3) -> Ray {
        Ray::new_with_range(origin, direction, 0.0..self.horizon)
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view, in radians
    pub vfov: f32,
    pub background: Rgb,
    pub horizon: f32,
    pub shadow_bias: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            vfov: std::f32::consts::FRAC_PI_2,
            background: color::linear::SKY,
            horizon: 1000.0,
            shadow_bias: 1e-3,
        }
    }
}

pub struct Renderer<'a> {
    pub camera: Camera,
    pub world: World<'a>,
    pub integrator: Box<dyn Integrator>,
}

impl<'a> Renderer<'a> {
    pub fn new(scene: &'a Scene, options: &RenderOptions) -> Self {
        Self {
            camera: Camera::new(options.width, options.height, options.vfov, Point::ORIGIN),
            world: World::from_scene(scene, options),
            integrator: Box::new(PhongIntegrator {
                shadow_bias: options.shadow_bias,
            }),
        }
    }

    /// Shade the pixel at column `x`, row `y` (row 0 is the top of the image)
    pub fn process_pixel(&self, x: u32, y: u32) -> Rgb {
        counter!("Primary rays");
        let mut ray = self.camera.ray(PixelCoord::center_of(x, y));
        ray.bounds_from_range(0.0..=self.world.horizon);

        let color = self.integrator.ray_cast(&self.world, ray);
        if !color.0.iter().all(|c| c.is_finite()) {
            error_once!("non-finite color {color:?} at pixel ({x}, {y})");
        }
        color
    }

    fn render_row(&self, y: u32, row: &mut [Rgb]) {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = self.process_pixel(x as u32, y);
        }
    }

    /// Render every pixel, one row per rayon task.
    ///
    /// `on_row_rendered` is called from worker threads, in no particular order.
    pub fn render_with<F: Fn(u32) + Sync>(&self, on_row_rendered: F) -> Framebuffer {
        let mut framebuffer = Framebuffer::new(self.camera.width, self.camera.height);
        if framebuffer.is_empty() {
            return framebuffer;
        }

        let width = framebuffer.width() as usize;
        framebuffer
            .pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                self.render_row(y as u32, row);
                on_row_rendered(y as u32);
            });
        framebuffer
    }

    pub fn render(&self) -> Framebuffer {
        self.render_with(|_| ())
    }

    /// Same pixels as [Renderer::render], computed on the calling thread
    pub fn render_monothreaded<F: FnMut(u32)>(&self, mut on_row_rendered: F) -> Framebuffer {
        let mut framebuffer = Framebuffer::new(self.camera.width, self.camera.height);
        if framebuffer.is_empty() {
            return framebuffer;
        }

        let width = framebuffer.width() as usize;
        for (y, row) in framebuffer.pixels_mut().chunks_mut(width).enumerate() {
            self.render_row(y as u32, row);
            on_row_rendered(y as u32);
        }
        framebuffer
    }
}

/// Render `scene` with the default integrator
pub fn render(scene: &Scene, options: &RenderOptions) -> Framebuffer {
    Renderer::new(scene, options).render()
}
