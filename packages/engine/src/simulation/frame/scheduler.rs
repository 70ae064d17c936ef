use std::cell::RefCell;
use std::collections::VecDeque;

use crate::core::EngineError;

/// Work to run once, before the next repaint
pub type FrameCallback = Box<dyn FnOnce()>;

/// "Call me back before the next repaint".
///
/// The browser implementation is `requestAnimationFrame`; tests use
/// `ManualScheduler` to drive frames one at a time.
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<(), EngineError>;
}

/// Queue of pending frames, released explicitly by the caller
#[derive(Default)]
pub struct ManualScheduler {
    pending: RefCell<VecDeque<FrameCallback>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Run the oldest pending frame. Returns false if nothing was queued.
    pub fn run_next(&self) -> bool {
        // Borrow ends before the callback runs: callbacks reschedule themselves.
        let next = self.pending.borrow_mut().pop_front();
        match next {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Run up to `frames` frames, returning how many actually ran
    pub fn run_frames(&self, frames: usize) -> usize {
        let mut ran = 0;
        while ran < frames && self.run_next() {
            ran += 1;
        }
        ran
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<(), EngineError> {
        self.pending.borrow_mut().push_back(callback);
        Ok(())
    }
}
