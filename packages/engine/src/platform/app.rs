use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::core::EngineError;
use crate::domain::Settings;
use crate::simulation::{FrameLoop, SessionCore};

use super::canvas::CanvasSurface;
use super::raf::RafScheduler;

pub type BrowserLoop = FrameLoop<CanvasSurface, RafScheduler>;

/// Run the animation on canvas `canvas_id` with stock settings
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    launch(canvas_id, Settings::default())?;
    Ok(())
}

/// Run the animation on canvas `canvas_id` with a JSON settings document
#[wasm_bindgen]
pub fn start_with_settings(canvas_id: &str, settings_json: &str) -> Result<(), JsValue> {
    let settings = Settings::from_json(settings_json)?;
    launch(canvas_id, settings)?;
    Ok(())
}

/// Wire canvas, resize listener and frame loop together and start it.
///
/// The returned loop stays alive through its own scheduled callbacks; holding
/// the handle is optional.
pub fn launch(canvas_id: &str, settings: Settings) -> Result<Rc<BrowserLoop>, EngineError> {
    let window = web_sys::window().ok_or(EngineError::NoWindow)?;
    let document = window.document().ok_or(EngineError::NoWindow)?;
    let surface = CanvasSurface::from_canvas_id(&document, canvas_id)?;

    let (width, height) = window_size(&window)?;
    let session = SessionCore::with_settings(width, height, settings)?;
    let frame_loop = FrameLoop::new(session, surface, RafScheduler::new(window.clone()));

    // Size the canvas before the first frame.
    frame_loop.resize(width, height);
    watch_resize(&window, &frame_loop)?;
    frame_loop.start()?;

    log::info!("glyphfall running on #{} ({}x{})", canvas_id, width, height);
    Ok(frame_loop)
}

fn window_size(window: &Window) -> Result<(f64, f64), EngineError> {
    let width = window.inner_width().map_err(EngineError::from_js)?;
    let height = window.inner_height().map_err(EngineError::from_js)?;
    Ok((width.as_f64().unwrap_or(0.0), height.as_f64().unwrap_or(0.0)))
}

fn watch_resize(window: &Window, frame_loop: &Rc<BrowserLoop>) -> Result<(), EngineError> {
    let target = Rc::clone(frame_loop);
    let win = window.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || match window_size(&win) {
        Ok((width, height)) => target.resize(width, height),
        Err(err) => log::warn!("resize ignored: {}", err),
    });

    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(EngineError::from_js)?;
    // The listener lives as long as the page.
    on_resize.forget();
    Ok(())
}
