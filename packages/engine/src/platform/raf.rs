use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::core::EngineError;
use crate::simulation::{FrameCallback, FrameScheduler};

/// `window.requestAnimationFrame`
pub struct RafScheduler {
    window: Window,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<(), EngineError> {
        let js_callback = Closure::once_into_js(move || callback());
        self.window
            .request_animation_frame(js_callback.unchecked_ref())
            .map_err(EngineError::from_js)?;
        Ok(())
    }
}
