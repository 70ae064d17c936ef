use serde::Serialize;

use crate::systems::Particle;

/// Serializable view of one live glyph (debug overlays, JS inspection)
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticleSnapshot {
    pub glyph: char,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub color: String,
}

impl From<&Particle> for ParticleSnapshot {
    fn from(p: &Particle) -> Self {
        Self {
            glyph: p.glyph(),
            x: p.pos.x,
            y: p.pos.y,
            vx: p.velocity.x,
            vy: p.velocity.y,
            size: p.size(),
            color: p.color().css().to_string(),
        }
    }
}

pub(super) fn snapshot(particles: &[Particle]) -> Vec<ParticleSnapshot> {
    particles.iter().map(ParticleSnapshot::from).collect()
}

pub(super) fn to_json(particles: &[Particle]) -> String {
    serde_json::to_string(&snapshot(particles)).unwrap_or_else(|_| "[]".to_string())
}
