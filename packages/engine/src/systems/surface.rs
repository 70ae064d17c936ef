/// Drawing target for glyphs.
///
/// The browser implementation wraps a `CanvasRenderingContext2d`; headless
/// runs use `NullSurface` or a recording surface.
pub trait Surface {
    /// Match the backing store to new viewport dimensions
    fn resize(&mut self, width: f64, height: f64);

    /// Clear the full drawing area
    fn clear(&mut self, width: f64, height: f64);

    /// Fill `glyph` at (x, y) with a `font_px` font of `font_family`
    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, font_px: f64, font_family: &str, color: &str);
}

/// Discards everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn resize(&mut self, _width: f64, _height: f64) {}

    fn clear(&mut self, _width: f64, _height: f64) {}

    fn draw_glyph(&mut self, _glyph: char, _x: f64, _y: f64, _font_px: f64, _font_family: &str, _color: &str) {}
}
