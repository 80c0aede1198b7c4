//! Text rendering
//!
//! Rasterizes strings into [`Surface`] bitmaps with fontdue. Nothing is
//! cached: every call rasterizes fresh, which is fine for a handful of HUD
//! lines per frame.

use std::fs;
use std::path::Path;

use fontdue::layout::{CoordinateSystem, Layout, TextStyle};
use fontdue::{Font, FontSettings};

use crate::assets::AssetError;
use crate::gfx::{Color, Surface};

/// Rasterizes text with a single TTF or OTF font.
pub struct TextRenderer {
    font: Font,
}

impl TextRenderer {
    /// Load a font from a TTF or OTF file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid font.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|e| AssetError::IoError(format!("{}: {e}", path.display())))?;
        Self::from_bytes(&bytes)
    }

    /// Parse a font from raw TTF or OTF bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes do not parse as a font.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| AssetError::FontError(e.to_string()))?;
        Ok(Self { font })
    }

    /// Render a line of text into a tightly sized bitmap.
    ///
    /// The surface is transparent where the text is not; glyph coverage
    /// scales the color's alpha. Empty input gives a zero-sized surface.
    #[must_use]
    pub fn render(&self, content: &str, px: f32, color: Color) -> Surface {
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.append(&[&self.font], &TextStyle::new(content, px, 0));

        let glyphs = layout.glyphs();
        let width = glyphs
            .iter()
            .map(|g| g.x.round() as i32 + g.width as i32)
            .max()
            .unwrap_or(0)
            .max(0) as u32;
        let height = layout.height().ceil().max(0.0) as u32;
        let mut surface = Surface::new(width, height);

        for glyph in glyphs {
            let (metrics, coverage) = self.font.rasterize_config(glyph.key);
            let gx = glyph.x.round() as i32;
            let gy = glyph.y.round() as i32;

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let c = coverage[row * metrics.width + col];
                    if c == 0 {
                        continue;
                    }
                    let alpha = (u32::from(c) * u32::from(color.a) / 255) as u8;
                    let x = gx + col as i32;
                    let y = gy + row as i32;
                    // overlapping glyph edges keep the stronger pixel
                    if surface.get_pixel(x, y).is_none_or(|p| p.a < alpha) {
                        surface.put_pixel(x, y, Color::rgba(color.r, color.g, color.b, alpha));
                    }
                }
            }
        }

        surface
    }

    /// Render text with padding on all sides and an optional background.
    ///
    /// The result is exactly `2 * padding` wider and taller than the
    /// corresponding [`TextRenderer::render`] surface. With no background
    /// color the padding stays transparent.
    #[must_use]
    pub fn render_padded(
        &self,
        content: &str,
        px: f32,
        color: Color,
        background: Option<Color>,
        padding: u32,
    ) -> Surface {
        self.render(content, px, color).padded(padding, background)
    }
}

impl std::fmt::Debug for TextRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRenderer")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let result = TextRenderer::from_bytes(b"definitely not a font");
        assert!(matches!(result, Err(AssetError::FontError(_))));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = TextRenderer::from_path("/nonexistent/font.otf");
        assert!(matches!(result, Err(AssetError::IoError(_))));
    }
}
