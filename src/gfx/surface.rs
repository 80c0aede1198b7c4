//! CPU-side pixel surface
//!
//! Everything the engine draws in a frame lands on a [`Surface`], an RGBA8
//! bitmap in main memory. Sprites are surfaces, rendered text is a surface,
//! and the engine's offscreen frame is a surface that the presenter uploads
//! to the window once per frame.

use image::RgbaImage;

use super::Color;

/// An RGBA8 bitmap with row-major pixel storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Create a fully transparent surface.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    /// Create a surface filled with a single color.
    ///
    /// Useful as a placeholder sprite when a texture is missing.
    #[must_use]
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let mut surface = Self::new(width, height);
        surface.fill(color);
        surface
    }

    /// Create a surface from a decoded image.
    #[must_use]
    pub fn from_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.into_raw(),
        }
    }

    /// Surface width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill the whole surface with a color.
    pub fn fill(&mut self, color: Color) {
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color.to_bytes());
        }
    }

    /// Set a single pixel. Out-of-bounds coordinates are ignored.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let index = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[index..index + 4].copy_from_slice(&color.to_bytes());
    }

    /// Read a single pixel, or `None` when out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let index = ((y as u32 * self.width + x as u32) * 4) as usize;
        let bytes: [u8; 4] = self.pixels[index..index + 4].try_into().ok()?;
        Some(Color::from(bytes))
    }

    /// Blit `src` onto this surface with its top-left corner at `(x, y)`.
    ///
    /// The source is clipped against the destination bounds, so partially or
    /// fully offscreen blits are fine. Pixels blend with source-over alpha.
    pub fn blit(&mut self, src: &Surface, x: i32, y: i32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + src.width as i32).min(self.width as i32);
        let y1 = (y + src.height as i32).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for dy in y0..y1 {
            let sy = (dy - y) as u32;
            for dx in x0..x1 {
                let sx = (dx - x) as u32;
                let si = ((sy * src.width + sx) * 4) as usize;
                let di = ((dy as u32 * self.width + dx as u32) * 4) as usize;
                blend_over(&mut self.pixels[di..di + 4], &src.pixels[si..si + 4]);
            }
        }
    }

    /// Return a copy grown by `padding` pixels on every side.
    ///
    /// The returned surface is exactly `2 * padding` wider and taller. The
    /// padding background is `bg` when given, transparent otherwise, and this
    /// surface is blitted at `(padding, padding)`.
    #[must_use]
    pub fn padded(&self, padding: u32, bg: Option<Color>) -> Surface {
        let mut out = Surface::new(self.width + padding * 2, self.height + padding * 2);
        if let Some(color) = bg {
            out.fill(color);
        }
        out.blit(self, padding as i32, padding as i32);
        out
    }
}

/// Source-over blend of one RGBA pixel onto another.
fn blend_over(dst: &mut [u8], src: &[u8]) {
    let sa = src[3] as u32;
    match sa {
        0 => {}
        255 => dst.copy_from_slice(src),
        _ => {
            let inv = 255 - sa;
            for i in 0..3 {
                dst[i] = ((src[i] as u32 * sa + dst[i] as u32 * inv) / 255) as u8;
            }
            dst[3] = (sa + dst[3] as u32 * inv / 255) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let surface = Surface::new(4, 4);
        assert_eq!(surface.get_pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(surface.data().len(), 4 * 4 * 4);
    }

    #[test]
    fn test_fill() {
        let mut surface = Surface::new(3, 2);
        surface.fill(Color::RED);
        assert_eq!(surface.get_pixel(2, 1), Some(Color::RED));
        assert_eq!(surface.get_pixel(0, 0), Some(Color::RED));
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let mut surface = Surface::new(2, 2);
        surface.put_pixel(-1, 0, Color::WHITE);
        surface.put_pixel(2, 0, Color::WHITE);
        assert_eq!(surface.get_pixel(-1, 0), None);
        assert_eq!(surface.get_pixel(0, 2), None);
        assert_eq!(surface.get_pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_blit_opaque_copy() {
        let mut dst = Surface::solid(4, 4, Color::BLACK);
        let src = Surface::solid(2, 2, Color::WHITE);
        dst.blit(&src, 1, 1);
        assert_eq!(dst.get_pixel(1, 1), Some(Color::WHITE));
        assert_eq!(dst.get_pixel(2, 2), Some(Color::WHITE));
        assert_eq!(dst.get_pixel(0, 0), Some(Color::BLACK));
        assert_eq!(dst.get_pixel(3, 3), Some(Color::BLACK));
    }

    #[test]
    fn test_blit_clips_at_edges() {
        let mut dst = Surface::solid(4, 4, Color::BLACK);
        let src = Surface::solid(3, 3, Color::WHITE);
        dst.blit(&src, -2, -2);
        assert_eq!(dst.get_pixel(0, 0), Some(Color::WHITE));
        assert_eq!(dst.get_pixel(1, 1), Some(Color::BLACK));

        dst.blit(&src, 3, 3);
        assert_eq!(dst.get_pixel(3, 3), Some(Color::WHITE));
        assert_eq!(dst.get_pixel(2, 3), Some(Color::BLACK));
    }

    #[test]
    fn test_blit_fully_offscreen_is_noop() {
        let mut dst = Surface::solid(4, 4, Color::BLACK);
        let src = Surface::solid(2, 2, Color::WHITE);
        dst.blit(&src, 10, 10);
        dst.blit(&src, -5, -5);
        assert_eq!(dst.get_pixel(0, 0), Some(Color::BLACK));
        assert_eq!(dst.get_pixel(3, 3), Some(Color::BLACK));
    }

    #[test]
    fn test_blit_alpha_blend() {
        let mut dst = Surface::solid(1, 1, Color::BLACK);
        let src = Surface::solid(1, 1, Color::rgba(255, 0, 0, 128));
        dst.blit(&src, 0, 0);
        // 255 * 128 / 255 = 128 over black, alpha saturates against opaque dst
        assert_eq!(dst.get_pixel(0, 0), Some(Color::rgba(128, 0, 0, 255)));
    }

    #[test]
    fn test_blit_zero_alpha_leaves_dst() {
        let mut dst = Surface::solid(1, 1, Color::GREEN);
        let src = Surface::solid(1, 1, Color::TRANSPARENT);
        dst.blit(&src, 0, 0);
        assert_eq!(dst.get_pixel(0, 0), Some(Color::GREEN));
    }

    #[test]
    fn test_padded_dimensions() {
        let surface = Surface::solid(10, 6, Color::WHITE);
        let padded = surface.padded(4, None);
        assert_eq!(padded.width(), 10 + 2 * 4);
        assert_eq!(padded.height(), 6 + 2 * 4);
    }

    #[test]
    fn test_padded_background_fill() {
        let surface = Surface::solid(2, 2, Color::WHITE);
        let padded = surface.padded(2, Some(Color::BLUE));
        assert_eq!(padded.get_pixel(0, 0), Some(Color::BLUE));
        assert_eq!(padded.get_pixel(2, 2), Some(Color::WHITE));
        assert_eq!(padded.get_pixel(5, 5), Some(Color::BLUE));
    }

    #[test]
    fn test_padded_transparent_default() {
        let surface = Surface::solid(2, 2, Color::WHITE);
        let padded = surface.padded(1, None);
        assert_eq!(padded.get_pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(padded.get_pixel(1, 1), Some(Color::WHITE));
    }

    #[test]
    fn test_from_image() {
        let image = RgbaImage::from_pixel(3, 2, image::Rgba([9, 8, 7, 255]));
        let surface = Surface::from_image(image);
        assert_eq!(surface.width(), 3);
        assert_eq!(surface.height(), 2);
        assert_eq!(surface.get_pixel(2, 1), Some(Color::rgb(9, 8, 7)));
    }
}
