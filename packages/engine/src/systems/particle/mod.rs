//! Particle - a single falling glyph
//!
//! The body stores its glyph, size and colour once at spawn; only position and
//! velocity change afterwards. Peer collisions live in `systems::collision`.

mod body;
mod motion;
mod viewport;

pub use body::Particle;
pub use viewport::Viewport;
