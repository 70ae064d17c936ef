//! Domain - what a glyph is and how a session is tuned
//!
//! - glyphs.rs   - alphabet and physical constants
//! - color.rs    - HSL colour of a glyph
//! - settings.rs - serde-backed session configuration

pub mod color;
pub mod glyphs;
pub mod settings;

pub use color::HslColor;
pub use settings::Settings;
