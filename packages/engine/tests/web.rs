//! Browser tests: `wasm-pack test --headless --firefox packages/engine`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use glyphfall_engine::{start, FallingGlyphs, Surface};
use glyphfall_engine::platform::{launch, CanvasSurface};
use glyphfall_engine::Settings;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn launch_sizes_canvas_to_window() {
    let canvas = mount_canvas("glyphfall-launch");
    let frame_loop = launch("glyphfall-launch", Settings::default()).unwrap();

    let viewport = frame_loop.session().viewport();
    assert_eq!(canvas.width(), viewport.width as u32);
    assert_eq!(canvas.height(), viewport.height as u32);
}

#[wasm_bindgen_test]
fn start_reports_missing_canvas() {
    assert!(start("no-such-canvas").is_err());
}

#[wasm_bindgen_test]
fn facade_renders_into_context() {
    let canvas = mount_canvas("glyphfall-render");
    let mut surface = CanvasSurface::from_canvas(canvas).unwrap();
    surface.resize(200.0, 100.0);

    let mut glyphs = FallingGlyphs::new(200.0, 100.0);
    glyphs.spawn();
    glyphs.render(surface.context()).unwrap();
    assert_eq!(glyphs.frame(), 1);
}
