use std::path::Path;

use anyhow::{anyhow, Context, Result};
use image::{ImageBuffer, Rgb32FImage, RgbImage};

use crate::color::Rgb;

/// Shaded colors of every pixel, row-major, top row first.
///
/// Colors are stored as produced by the integrator, tone mapping only happens
/// when converting to 8 bits.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::from_array([0.0; 3]); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of a {}x{} framebuffer",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// 8 bits per channel image, see [Rgb::tonemap]
    pub fn to_ldr(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| self.get(x, y).into())
    }

    /// Raw shaded colors, nothing is clamped
    pub fn to_hdr(&self) -> Result<Rgb32FImage> {
        let raw = bytemuck::cast_slice::<Rgb, f32>(self.pixels.as_slice()).to_vec();
        ImageBuffer::from_raw(self.width, self.height, raw).ok_or_else(|| {
            anyhow!(
                "framebuffer does not match its {}x{} size",
                self.width,
                self.height
            )
        })
    }

    /// Save the tone mapped image, the format is guessed from the extension.
    ///
    /// `.ppm` gives a binary `P6` pixmap.
    pub fn save_ldr(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_ldr()
            .save(path)
            .with_context(|| format!("saving {}", path.display()))
    }

    pub fn save_hdr(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_hdr()?
            .save(path)
            .with_context(|| format!("saving {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Rgb;

    use super::Framebuffer;

    #[test]
    fn row_major_top_first() {
        let mut fb = Framebuffer::new(3, 2);
        fb.set(2, 0, Rgb::from_array([1.0, 0.0, 0.0]));
        fb.set(0, 1, Rgb::from_array([0.0, 0.0, 1.0]));

        assert_eq!(fb.pixels()[2], Rgb::from_array([1.0, 0.0, 0.0]));
        assert_eq!(fb.pixels()[3], Rgb::from_array([0.0, 0.0, 1.0]));
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_access_panics() {
        let fb = Framebuffer::new(3, 2);
        fb.get(3, 0);
    }

    #[test]
    fn ldr_is_tonemapped() {
        let mut fb = Framebuffer::new(2, 1);
        fb.set(0, 0, Rgb::from_array([4.0, 2.0, 0.0]));
        fb.set(1, 0, Rgb::from_array([0.5, -1.0, 0.25]));

        let ldr = fb.to_ldr();
        assert_eq!(ldr.get_pixel(0, 0).0, [255, 127, 0]);
        assert_eq!(ldr.get_pixel(1, 0).0, [127, 0, 63]);
    }

    #[test]
    fn hdr_keeps_raw_values() {
        let mut fb = Framebuffer::new(2, 2);
        fb.set(1, 1, Rgb::from_array([4.0, 2.0, -1.0]));

        let hdr = fb.to_hdr().unwrap();
        assert_eq!(hdr.dimensions(), (2, 2));
        assert_eq!(hdr.get_pixel(1, 1).0, [4.0, 2.0, -1.0]);
        assert_eq!(hdr.get_pixel(0, 0).0, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn save_ppm() {
        let mut fb = Framebuffer::new(4, 3);
        fb.set(0, 0, Rgb::from_array([1.0, 0.5, 0.0]));

        let path = std::env::temp_dir().join(format!("tracer-save-{}.ppm", std::process::id()));
        fb.save_ldr(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(bytes.starts_with(b"P6"));
        assert_eq!(&bytes[bytes.len() - 4 * 3 * 3..][..3], &[255, 127, 0]);
    }
}
