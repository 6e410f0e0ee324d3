use crate::{
    math::{point::Point, vec::Vec3},
    ray::Ray,
};

/// A pinhole camera looking down the -Z axis, +Y is up.
pub struct Camera {
    /// width of the sensor, in pixel
    pub width: u32,
    /// height of the sensor, in pixel
    pub height: u32,

    /// Half height of the image plane at distance 1, in world unit
    pub viewport_height: f32,
    /// Half width of the image plane at distance 1, in world unit
    pub viewport_width: f32,

    pub center_of_lens: Point,
}

impl Camera {
    pub fn new(width: u32, height: u32, vfov: f32, center_of_lens: Point) -> Self {
        let h = f32::tan(vfov / 2.);

        let aspect_ratio = width as f32 / height as f32;
        Self {
            width,
            height,
            viewport_height: h,
            viewport_width: h * aspect_ratio,
            center_of_lens,
        }
    }

    /// Generate a ray outgoing from the given [PixelCoord]
    pub fn ray(&self, coords: PixelCoord) -> Ray {
        let ViewportCoord { vx, vy } = ViewportCoord::from_pixel_coord(self, coords);
        let direction = Vec3::new(vx * self.viewport_width, -vy * self.viewport_height, -1.0);

        Ray::new(self.center_of_lens, direction)
    }
}

/// Represent a coordinate in the pixel space.
///
/// $\left(0, 0\right)$ is the top left corner of the top left pixel.
#[derive(Debug, Clone, Copy)]
pub struct PixelCoord {
    pub x: f32,
    pub y: f32,
}

impl PixelCoord {
    /// The center of the pixel at column `x`, row `y`
    pub fn center_of(x: u32, y: u32) -> PixelCoord {
        PixelCoord {
            x: x as f32 + 0.5,
            y: y as f32 + 0.5,
        }
    }
}

/// Represent a coordinate in the viewport space.
///
/// The viewport is mapped to the range $\left[-1, 1\right]$ for both `vx` and `vy`.
///
/// $\left(-1, -1\right)$ is the top left corner
#[derive(Debug, Clone, Copy)]
pub struct ViewportCoord {
    pub vx: f32,
    pub vy: f32,
}

impl ViewportCoord {
    // Convert a coordinate in pixel space into viewport space
    pub fn from_pixel_coord(camera: &Camera, coord: PixelCoord) -> Self {
        Self {
            vx: 2. * (coord.x / camera.width as f32) - 1.,
            vy: 2. * (coord.y / camera.height as f32) - 1.,
        }
    }
}
