use bytemuck::{Pod, Zeroable};

/// A linear RGB color.
///
/// Channels are not bounded while shading: bright highlights happily go above 1.
/// They are brought back into `[0, 1]` by [Rgb::rescaled] and [Rgb::to_byte_array].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Rgb(pub [f32; 3]);

impl std::ops::Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_array([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
        ])
    }
}

impl std::ops::Mul<Rgb> for f32 {
    type Output = Rgb;

    fn mul(self, rhs: Rgb) -> Self::Output {
        Rgb::from_array(rhs.0.map(|c| self * c))
    }
}

impl Rgb {
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self(arr)
    }

    pub const fn to_array(self) -> [f32; 3] {
        self.0
    }

    pub fn max_channel(self) -> f32 {
        self.0.into_iter().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Divide every channel by the brightest one when it exceeds 1.
    ///
    /// Hue is preserved, unlike clipping each channel on its own.
    pub fn rescaled(self) -> Self {
        let max = self.max_channel();
        if max > 1.0 {
            (1.0 / max) * self
        } else {
            self
        }
    }

    pub fn clamped(self) -> Self {
        Self::from_array(self.0.map(|c| c.clamp(0.0, 1.0)))
    }

    /// Clamp and quantize to 8 bits, truncating like the legacy ppm writer.
    ///
    /// NaN channels end up as 0.
    pub fn to_byte_array(self) -> [u8; 3] {
        self.clamped().0.map(|c| (255. * c) as u8)
    }

    /// Full conversion from a shaded color to an output pixel.
    pub fn tonemap(self) -> [u8; 3] {
        self.rescaled().to_byte_array()
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(val: [f32; 3]) -> Self {
        Rgb::from_array(val)
    }
}

impl From<Rgb> for image::Rgb<f32> {
    fn from(val: Rgb) -> Self {
        image::Rgb(val.to_array())
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(val: Rgb) -> Self {
        image::Rgb(val.tonemap())
    }
}

pub mod linear {
    use super::Rgb;

    pub const WHITE: Rgb = Rgb::from_array([1.0, 1.0, 1.0]);
    pub const SKY: Rgb = Rgb::from_array([0.5, 0.8, 0.9]);
}
