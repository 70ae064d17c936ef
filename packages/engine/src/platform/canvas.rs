use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::core::EngineError;
use crate::systems::Surface;

/// Canvas 2D drawing target
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(EngineError::from_js)?
            .ok_or(EngineError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::ContextUnavailable)?;
        Ok(Self::new(canvas, ctx))
    }

    pub fn from_canvas_id(document: &Document, canvas_id: &str) -> Result<Self, EngineError> {
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| EngineError::CanvasNotFound(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| EngineError::CanvasNotFound(canvas_id.to_string()))?;
        Self::from_canvas(canvas)
    }

    /// Wrap a context handed over from JS
    pub fn from_context(ctx: CanvasRenderingContext2d) -> Result<Self, EngineError> {
        let canvas = ctx.canvas().ok_or(EngineError::ContextUnavailable)?;
        Ok(Self::new(canvas, ctx))
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, font_px: f64, font_family: &str, color: &str) {
        let mut buf = [0u8; 4];
        self.ctx.set_font(&format!("{}px {}", font_px, font_family));
        self.ctx.set_fill_style_str(color);
        if let Err(err) = self.ctx.fill_text(glyph.encode_utf8(&mut buf), x, y) {
            log::warn!("fill_text failed: {:?}", err);
        }
    }
}
