use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::core::EngineError;
use crate::systems::Surface;

use super::scheduler::FrameScheduler;
use super::SessionCore;

/// Loop lifecycle. There is no stop: once running, every frame reschedules
/// the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

/// Self-rescheduling animation loop over an injectable scheduler
pub struct FrameLoop<S, F>
where
    S: Surface + 'static,
    F: FrameScheduler + 'static,
{
    session: RefCell<SessionCore>,
    surface: RefCell<S>,
    scheduler: F,
    state: Cell<LoopState>,
}

impl<S, F> FrameLoop<S, F>
where
    S: Surface + 'static,
    F: FrameScheduler + 'static,
{
    pub fn new(session: SessionCore, surface: S, scheduler: F) -> Rc<Self> {
        Rc::new(Self {
            session: RefCell::new(session),
            surface: RefCell::new(surface),
            scheduler,
            state: Cell::new(LoopState::Idle),
        })
    }

    pub fn state(&self) -> LoopState {
        self.state.get()
    }

    pub fn session(&self) -> Ref<'_, SessionCore> {
        self.session.borrow()
    }

    /// Mutable access between frames (settings changes from JS, tests)
    pub fn session_mut(&self) -> RefMut<'_, SessionCore> {
        self.session.borrow_mut()
    }

    pub fn surface(&self) -> Ref<'_, S> {
        self.surface.borrow()
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    /// Idle -> Running and request the first frame. Starting a running loop is
    /// a no-op.
    pub fn start(self: &Rc<Self>) -> Result<(), EngineError> {
        if self.state.get() == LoopState::Running {
            return Ok(());
        }
        self.schedule()?;
        self.state.set(LoopState::Running);
        log::info!("frame loop running");
        Ok(())
    }

    /// Resize both the session viewport and the drawing surface
    pub fn resize(&self, width: f64, height: f64) {
        self.session.borrow_mut().resize(width, height);
        self.surface.borrow_mut().resize(width, height);
    }

    fn schedule(self: &Rc<Self>) -> Result<(), EngineError> {
        let this = Rc::clone(self);
        self.scheduler.request_frame(Box::new(move || this.run_frame()))
    }

    fn run_frame(self: Rc<Self>) {
        {
            let mut session = self.session.borrow_mut();
            let mut surface = self.surface.borrow_mut();
            session.tick(&mut *surface);
        }
        if let Err(err) = self.schedule() {
            log::error!("failed to schedule next frame: {}", err);
        }
    }
}
