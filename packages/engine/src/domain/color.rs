use serde::Serialize;

/// Glyph colour: random hue, fixed saturation and lightness.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HslColor {
    pub hue: f64,
    pub saturation: u8,
    pub lightness: u8,
    #[serde(skip)]
    css: String,
}

impl HslColor {
    pub fn new(hue: f64, saturation: u8, lightness: u8) -> Self {
        let css = format!("hsl({}, {}%, {}%)", hue, saturation, lightness);
        Self { hue, saturation, lightness, css }
    }

    /// CSS colour string, built once at creation
    #[inline]
    pub fn css(&self) -> &str {
        &self.css
    }
}
