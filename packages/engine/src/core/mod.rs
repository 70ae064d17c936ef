//! Core - plumbing shared by every layer
//!
//! - error.rs   - `EngineError`, the only fallible surface of the crate
//! - logging.rs - `log` facade bridged to the browser console
//! - rng.rs     - xorshift32 random source owned by the session

pub mod error;
pub mod logging;
pub mod rng;

pub use error::EngineError;
pub use rng::Xorshift32;
