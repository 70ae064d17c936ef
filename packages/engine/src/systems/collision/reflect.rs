use crate::systems::particle::Particle;

use super::{contact_normal, CollisionResponse};

/// Simplified response: the stepping glyph keeps its own speed and heads
/// straight away from the other glyph. The other glyph is never modified, so
/// this is neither symmetric nor momentum-conserving.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaiveReflect;

impl CollisionResponse for NaiveReflect {
    fn resolve(&self, this: &mut Particle, other: &mut Particle) -> bool {
        let (away, distance) = contact_normal(this, other);
        if distance >= this.reach(other) {
            return false;
        }
        this.velocity = away * this.speed();
        true
    }
}
