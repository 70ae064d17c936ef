use crate::core::Xorshift32;
use crate::domain::{HslColor, Settings};
use crate::systems::surface::Surface;
use crate::systems::vec2::Vec2;

use super::Viewport;

/// Falling glyph
#[derive(Clone, Debug)]
pub struct Particle {
    // === Physics State ===
    /// Collision centre and text anchor
    pub pos: Vec2,
    /// Pixels per frame
    pub velocity: Vec2,

    // === Fixed at spawn ===
    glyph: char,
    /// Render diameter, also the font size in px
    size: f64,
    color: HslColor,
    density: f64,
}

impl Particle {
    /// Build a particle with explicit state (tests, replays)
    pub fn new(glyph: char, pos: Vec2, velocity: Vec2, size: f64, color: HslColor) -> Self {
        Self {
            pos,
            velocity,
            glyph,
            size,
            color,
            density: crate::domain::glyphs::DENSITY,
        }
    }

    /// Spawn `glyph` just above the top edge with randomized size, fall speed,
    /// drift and hue.
    pub fn spawn(glyph: char, viewport: &Viewport, settings: &Settings, rng: &mut Xorshift32) -> Self {
        let size = rng.range(settings.size_min, settings.size_max);
        let x = rng.next_f64() * viewport.width;
        let vy = rng.range(settings.fall_speed_min, settings.fall_speed_max);
        let vx = rng.range(-settings.drift, settings.drift);
        let hue = rng.next_f64() * 360.0;

        Self {
            pos: Vec2::new(x, -size),
            velocity: Vec2::new(vx, vy),
            glyph,
            size,
            color: HslColor::new(hue, settings.saturation, settings.lightness),
            density: settings.density,
        }
    }

    #[inline]
    pub fn glyph(&self) -> char {
        self.glyph
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn color(&self) -> &HslColor {
        &self.color
    }

    #[inline]
    pub fn density(&self) -> f64 {
        self.density
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Centre distance below which two glyphs touch
    #[inline]
    pub fn reach(&self, other: &Particle) -> f64 {
        self.size / 2.0 + other.size / 2.0
    }

    #[inline]
    pub fn overlaps(&self, other: &Particle) -> bool {
        (self.pos - other.pos).length() < self.reach(other)
    }

    /// Fallen past the bottom edge
    #[inline]
    pub fn is_below(&self, viewport: &Viewport) -> bool {
        self.pos.y > viewport.height
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, font_family: &str) {
        surface.draw_glyph(self.glyph, self.pos.x, self.pos.y, self.size, font_family, self.color.css());
    }
}
