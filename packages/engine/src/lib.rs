//! Glyphfall Engine - falling, bouncing, colliding glyphs in WASM
//!
//! Architecture:
//! - core/       - errors, logging, random source
//! - domain/     - alphabet, constants, colour, settings
//! - systems/    - particle physics and collision responses
//! - simulation/ - session state, tick, frame loop, JS facade
//! - platform/   - canvas surface, requestAnimationFrame, bootstrap

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod platform;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logging(log::LevelFilter::Info);
    log::info!("Glyphfall WASM engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Id of the canvas the stock page renders into
#[wasm_bindgen]
pub fn default_canvas_id() -> String {
    domain::glyphs::DEFAULT_CANVAS_ID.to_string()
}

// Re-export main types
pub use crate::core::EngineError;
pub use domain::Settings;
pub use platform::{start, start_with_settings, CanvasSurface, RafScheduler};
pub use simulation::{FallingGlyphs, FrameLoop, ManualScheduler, SessionCore, Surface};
pub use systems::{CollisionPolicy, Particle, Vec2, Viewport};
