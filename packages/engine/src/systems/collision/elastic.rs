use crate::systems::particle::Particle;

use super::{contact_normal, CollisionResponse};

/// Equal-mass elastic response along the contact normal.
///
/// The normal velocity components of the pair are exchanged, tangential
/// components are untouched, and both glyphs are pushed apart by half the
/// overlap each so they end up exactly touching.
#[derive(Clone, Copy, Debug, Default)]
pub struct ElasticNormalResponse;

impl CollisionResponse for ElasticNormalResponse {
    fn resolve(&self, this: &mut Particle, other: &mut Particle) -> bool {
        let reach = this.reach(other);
        let (normal, distance) = contact_normal(this, other);
        if distance >= reach {
            return false;
        }

        let this_normal = this.velocity.dot(normal);
        let other_normal = other.velocity.dot(normal);
        let exchange = this_normal - other_normal;

        this.velocity -= normal * exchange;
        other.velocity += normal * exchange;

        let correction = (reach - distance) / 2.0;
        this.pos += normal * correction;
        other.pos -= normal * correction;
        true
    }
}
