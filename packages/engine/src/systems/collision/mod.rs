//! Collision - pairwise glyph contact
//!
//! Two mutually exclusive responses exist for the same contact:
//! - `ElasticNormalResponse`: equal-mass elastic exchange along the contact
//!   normal plus positional de-overlap of both glyphs
//! - `NaiveReflect`: only the stepping glyph changes; it keeps its speed and
//!   heads straight away from the other glyph
//!
//! `CollisionSolver` dispatches to whichever one the session selected.

mod elastic;
mod reflect;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::EngineError;
use crate::systems::particle::Particle;
use crate::systems::vec2::Vec2;

pub use elastic::ElasticNormalResponse;
pub use reflect::NaiveReflect;

/// Below this centre distance the contact normal is undefined
pub const MIN_SEPARATION: f64 = 1e-9;

/// Normal used for coincident centres: the stepping glyph goes up
pub const FALLBACK_NORMAL: Vec2 = Vec2::new(0.0, -1.0);

/// Which response resolves a contact
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    #[default]
    ElasticNormal,
    NaiveReflect,
}

impl CollisionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionPolicy::ElasticNormal => "elastic_normal",
            CollisionPolicy::NaiveReflect => "naive_reflect",
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollisionPolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "elastic_normal" => Ok(CollisionPolicy::ElasticNormal),
            "naive_reflect" => Ok(CollisionPolicy::NaiveReflect),
            other => Err(EngineError::UnknownCollisionPolicy(other.to_string())),
        }
    }
}

/// Collision response trait - each policy implements this
pub trait CollisionResponse {
    /// Resolve contact between the stepping glyph and one peer.
    /// Returns false when the pair was not actually touching.
    fn resolve(&self, this: &mut Particle, other: &mut Particle) -> bool;
}

/// Unit vector from `other` towards `this`, with the coincident-centre guard.
/// Also returns the centre distance.
#[inline]
pub(crate) fn contact_normal(this: &Particle, other: &Particle) -> (Vec2, f64) {
    let delta = this.pos - other.pos;
    let distance = delta.length();
    if distance > MIN_SEPARATION {
        (delta * (1.0 / distance), distance)
    } else {
        (FALLBACK_NORMAL, distance)
    }
}

/// Response registry - dispatch by policy
pub struct CollisionSolver {
    policy: CollisionPolicy,
    elastic: ElasticNormalResponse,
    reflect: NaiveReflect,
}

impl CollisionSolver {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            elastic: ElasticNormalResponse,
            reflect: NaiveReflect,
        }
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: CollisionPolicy) {
        self.policy = policy;
    }

    pub fn resolve(&self, this: &mut Particle, other: &mut Particle) -> bool {
        match self.policy {
            CollisionPolicy::ElasticNormal => self.elastic.resolve(this, other),
            CollisionPolicy::NaiveReflect => self.reflect.resolve(this, other),
        }
    }

    /// Brute-force scan of `particles[index]` against every other live glyph,
    /// in collection order. Returns the number of contacts resolved.
    pub fn resolve_peers(&self, particles: &mut [Particle], index: usize) -> u32 {
        let mut resolved = 0;
        for j in 0..particles.len() {
            if j == index {
                continue;
            }
            let (this, other) = pair_mut(particles, index, j);
            if this.overlaps(other) && self.resolve(this, other) {
                resolved += 1;
            }
        }
        resolved
    }
}

impl Default for CollisionSolver {
    fn default() -> Self {
        Self::new(CollisionPolicy::default())
    }
}

/// Two distinct mutable elements of one slice. `i != j` is required.
#[inline]
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
