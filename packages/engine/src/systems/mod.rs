//! Systems - per-frame physics
//!
//! - vec2.rs      - 2D vector math
//! - particle/    - glyph body: spawn, integrate, bounce, draw
//! - collision/   - pairwise collision responses (strategy + dispatch)
//! - surface.rs   - `Surface` drawing seam

pub mod collision;
pub mod particle;
pub mod surface;
pub mod vec2;

pub use collision::{CollisionPolicy, CollisionSolver};
pub use particle::{Particle, Viewport};
pub use surface::{NullSurface, Surface};
pub use vec2::Vec2;
