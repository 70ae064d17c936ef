use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::domain::Settings;
use crate::platform::CanvasSurface;
use crate::systems::CollisionPolicy;

use super::perf_stats::PerfStats;
use super::SessionCore;

/// JS handle on one session, for callers that run their own frame loop
#[wasm_bindgen]
pub struct FallingGlyphs {
    core: SessionCore,
}

#[wasm_bindgen]
impl FallingGlyphs {
    /// Create a session with stock settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            core: SessionCore::new(width, height),
        }
    }

    /// Create a session from a JSON settings document (missing keys use defaults)
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(width: f64, height: f64, settings_json: &str) -> Result<FallingGlyphs, JsValue> {
        let settings = Settings::from_json(settings_json)?;
        Ok(Self {
            core: SessionCore::with_settings(width, height, settings)?,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.viewport().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.viewport().height }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn collision_policy(&self) -> String {
        self.core.collision_policy().as_str().to_string()
    }

    /// `"elastic_normal"` or `"naive_reflect"`
    pub fn set_collision_policy(&mut self, name: &str) -> Result<(), JsValue> {
        let policy: CollisionPolicy = name.parse()?;
        self.core.set_collision_policy(policy);
        Ok(())
    }

    pub fn set_spawn_probability(&mut self, probability: f64) {
        self.core.set_spawn_probability(probability);
    }

    /// `undefined` removes the cap
    pub fn set_max_particles(&mut self, max: Option<u32>) {
        self.core.set_max_particles(max.map(|m| m as usize));
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.core.resize(width, height);
    }

    /// Spawn one random glyph now (ignores the spawn roll, evicts at the cap)
    pub fn spawn(&mut self) -> bool {
        self.core.spawn_random()
    }

    /// Clear all glyphs
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Advance one frame without drawing
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Advance one frame, drawing into `ctx`
    pub fn render(&mut self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let mut surface = CanvasSurface::from_context(ctx.clone())?;
        self.core.tick(&mut surface);
        Ok(())
    }

    /// Live glyphs as a JSON array
    pub fn particles_json(&self) -> String {
        self.core.particles_json()
    }

    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
