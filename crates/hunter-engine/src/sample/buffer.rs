use std::path::Path;

use bytemuck::{Pod, Zeroable};
use hunter_css::Rgba;

use crate::error::InferError;

/// One straight-alpha RGBA8 pixel, laid out as in decoded image data.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn to_rgba(self) -> Rgba {
        Rgba::from_bytes([self.r, self.g, self.b, self.a])
    }
}

impl From<Rgba> for Pixel {
    fn from(c: Rgba) -> Self {
        let a = (c.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(c.r, c.g, c.b, a)
    }
}

/// Decoded image: row-major RGBA8 pixels.
///
/// Invariant: `pixels.len() == width * height`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Wraps raw RGBA8 bytes (4 per pixel, row-major).
    pub fn new(width: u32, height: u32, data: &[u8]) -> Result<Self, InferError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(InferError::BufferSizeMismatch { expected, actual: data.len() });
        }
        let pixels: &[Pixel] = bytemuck::try_cast_slice(data)
            .map_err(|_| InferError::BufferSizeMismatch { expected, actual: data.len() })?;
        Ok(Self { width, height, pixels: pixels.to_vec() })
    }

    /// Builds a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(Pixel::from(f(x, y)));
            }
        }
        Self { width, height, pixels }
    }

    /// Converts any decoded image to straight RGBA8.
    pub fn from_image(image: &image::DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = bytemuck::cast_slice::<u8, Pixel>(rgba.as_raw()).to_vec();
        Self { width, height, pixels }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Raw RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.pixels.get(index).map(|p| p.to_rgba())
    }
}

/// Decodes an image file into a [`PixelBuffer`].
pub fn load_image(path: impl AsRef<Path>) -> Result<PixelBuffer, InferError> {
    let path = path.as_ref();
    let image = image::open(path)?;
    log::debug!("decoded {} ({}x{})", path.display(), image.width(), image.height());

    let buffer = PixelBuffer::from_image(&image);
    if buffer.is_empty() {
        return Err(InferError::EmptyImage);
    }
    Ok(buffer)
}
