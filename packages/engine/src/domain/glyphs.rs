/// The 62 glyphs a particle can carry.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

// === Physics ===
/// Gravity constant (m/s²), scaled per frame by `GRAVITY_SCALE`
pub const GRAVITY: f64 = 9.8;
pub const GRAVITY_SCALE: f64 = 0.02;
/// Carried on every particle, never read by the physics
pub const DENSITY: f64 = 1.0;
/// Fraction of velocity kept after hitting the ground or a wall
pub const RESTITUTION: f64 = 0.8;

// === Spawning ===
pub const SPAWN_PROBABILITY: f64 = 0.02;
pub const SIZE_MIN: f64 = 10.0;
pub const SIZE_MAX: f64 = 40.0;
pub const FALL_SPEED_MIN: f64 = 2.0;
pub const FALL_SPEED_MAX: f64 = 4.0;
/// Horizontal speed is drawn from [-DRIFT, DRIFT)
pub const DRIFT: f64 = 0.5;

// === Rendering ===
pub const SATURATION: u8 = 100;
pub const LIGHTNESS: u8 = 80;
pub const FONT_FAMILY: &str = "Arial";
pub const DEFAULT_CANVAS_ID: &str = "fallingLetters";
