use serde::{Deserialize, Serialize};

use crate::core::EngineError;
use crate::systems::collision::CollisionPolicy;

use super::glyphs::{
    ALPHABET, DENSITY, DRIFT, FALL_SPEED_MAX, FALL_SPEED_MIN, FONT_FAMILY,
    GRAVITY, GRAVITY_SCALE, LIGHTNESS, RESTITUTION, SATURATION, SIZE_MAX, SIZE_MIN,
    SPAWN_PROBABILITY,
};

/// Session tuning. Every field falls back to the stock constant, so `{}` is a
/// valid settings document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub gravity: f64,
    pub gravity_scale: f64,
    pub density: f64,
    pub restitution: f64,
    pub spawn_probability: f64,
    pub size_min: f64,
    pub size_max: f64,
    pub fall_speed_min: f64,
    pub fall_speed_max: f64,
    pub drift: f64,
    pub saturation: u8,
    pub lightness: u8,
    pub font_family: String,
    pub alphabet: String,
    pub collision_policy: CollisionPolicy,
    /// Live glyph cap; at the cap the oldest glyph makes room. `None` is uncapped.
    pub max_particles: Option<usize>,
    /// `None` seeds from the environment
    pub seed: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            gravity_scale: GRAVITY_SCALE,
            density: DENSITY,
            restitution: RESTITUTION,
            spawn_probability: SPAWN_PROBABILITY,
            size_min: SIZE_MIN,
            size_max: SIZE_MAX,
            fall_speed_min: FALL_SPEED_MIN,
            fall_speed_max: FALL_SPEED_MAX,
            drift: DRIFT,
            saturation: SATURATION,
            lightness: LIGHTNESS,
            font_family: FONT_FAMILY.to_string(),
            alphabet: ALPHABET.to_string(),
            collision_policy: CollisionPolicy::default(),
            max_particles: None,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Per-frame downward acceleration
    #[inline]
    pub fn gravity_per_frame(&self) -> f64 {
        self.gravity * self.gravity_scale
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.gravity.is_finite() || !self.gravity_scale.is_finite() {
            return Err(EngineError::invalid("gravity", "must be finite"));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(EngineError::invalid("restitution", "must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(EngineError::invalid("spawn_probability", "must be within [0, 1]"));
        }
        check_range("size_min", self.size_min, self.size_max)?;
        if self.size_min <= 0.0 {
            return Err(EngineError::invalid("size_min", "must be positive"));
        }
        check_range("fall_speed_min", self.fall_speed_min, self.fall_speed_max)?;
        if !self.drift.is_finite() || self.drift < 0.0 {
            return Err(EngineError::invalid("drift", "must be finite and non-negative"));
        }
        if self.saturation > 100 {
            return Err(EngineError::invalid("saturation", "must be a percentage"));
        }
        if self.lightness > 100 {
            return Err(EngineError::invalid("lightness", "must be a percentage"));
        }
        if self.font_family.trim().is_empty() {
            return Err(EngineError::invalid("font_family", "must not be empty"));
        }
        if self.alphabet.is_empty() {
            return Err(EngineError::invalid("alphabet", "must contain at least one glyph"));
        }
        Ok(())
    }
}

fn check_range(field: &'static str, lo: f64, hi: f64) -> Result<(), EngineError> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(EngineError::invalid(field, "bounds must be finite"));
    }
    if lo >= hi {
        return Err(EngineError::invalid(field, format!("lower bound {} must be below upper bound {}", lo, hi)));
    }
    Ok(())
}
