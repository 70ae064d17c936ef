//! Platform - browser bindings
//!
//! - canvas.rs - `Surface` over a 2D canvas context
//! - raf.rs    - `FrameScheduler` over `requestAnimationFrame`
//! - app.rs    - bootstrap: canvas lookup, resize wiring, loop start
//!
//! These compile on every target but only work inside a browser.

mod app;
mod canvas;
mod raf;

pub use app::{launch, start, start_with_settings};
pub use canvas::CanvasSurface;
pub use raf::RafScheduler;
