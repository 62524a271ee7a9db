//! Animation-frame plumbing shared by the scroll-driven effects.
//!
//! Each subscriber owns its own gate, so two effects bound to `scroll` are
//! throttled independently of each other. Dropping a subscription removes
//! its listener and cancels whatever frame is still pending.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};

use crate::dom::{self, DomResult, Viewport};

pub struct FrameScroll {
    _listener: EventListener,
    _frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameScroll {
    /// Runs `on_frame` at most once per animation frame while the page scrolls.
    pub fn subscribe<F>(on_frame: F) -> DomResult<Self>
    where
        F: Fn(&Viewport) + 'static,
    {
        let window = dom::window()?;
        let on_frame = Rc::new(on_frame);
        let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();
        let ticking = Rc::new(Cell::new(false));

        let listener = {
            let frame = frame.clone();
            EventListener::new(&window, "scroll", move |_| {
                if ticking.replace(true) {
                    return;
                }
                let on_frame = on_frame.clone();
                let ticking = ticking.clone();
                let handle = request_animation_frame(move |_| {
                    ticking.set(false);
                    match Viewport::read() {
                        Ok(viewport) => on_frame(&viewport),
                        Err(err) => log::debug!("skipped scroll frame: {}", err),
                    }
                });
                *frame.borrow_mut() = Some(handle);
            })
        };

        Ok(Self {
            _listener: listener,
            _frame: frame,
        })
    }

    /// Like [`FrameScroll::subscribe`], but also paints the current position right away.
    pub fn subscribe_primed<F>(on_frame: F) -> DomResult<Self>
    where
        F: Fn(&Viewport) + 'static,
    {
        let on_frame = Rc::new(on_frame);
        let initial = Viewport::read()?;
        on_frame(&initial);
        Self::subscribe(move |viewport| on_frame(viewport))
    }
}

struct LoopState {
    on_frame: RefCell<Box<dyn FnMut(f64) -> bool>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl LoopState {
    fn schedule(self: &Rc<Self>) {
        let state = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| state.tick(timestamp));
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(self: &Rc<Self>, timestamp: f64) {
        // Stopped loops have no frame slot left.
        if self.frame.borrow_mut().take().is_none() {
            return;
        }
        if (self.on_frame.borrow_mut())(timestamp) {
            self.schedule();
        }
    }
}

/// Calls its callback on every animation frame until dropped.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        Self::start_until(move |timestamp| {
            on_frame(timestamp);
            true
        })
    }

    /// Like [`FrameLoop::start`], but stops for good once `on_frame` returns false.
    pub fn start_until<F>(on_frame: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let state = Rc::new(LoopState {
            on_frame: RefCell::new(Box::new(on_frame)),
            frame: RefCell::new(None),
        });
        state.schedule();
        Self { state }
    }

    pub fn is_running(&self) -> bool {
        self.state.frame.borrow().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.state.frame.borrow_mut().take();
    }
}

/// Timing handed to [`FrameOnDemand`] callbacks. `elapsed` is 0 on the first
/// frame after a wake-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    pub timestamp: f64,
    pub elapsed: f64,
}

/// A frame loop that sleeps while nothing moves. It starts awake, goes to
/// sleep when `on_frame` returns false and is woken by the next scroll.
pub struct FrameOnDemand {
    _listener: EventListener,
    _running: Rc<RefCell<Option<FrameLoop>>>,
}

impl FrameOnDemand {
    pub fn start<F>(on_frame: F) -> DomResult<Self>
    where
        F: FnMut(FrameTick) -> bool + 'static,
    {
        let window = dom::window()?;
        let on_frame: Rc<RefCell<dyn FnMut(FrameTick) -> bool>> = Rc::new(RefCell::new(on_frame));
        let running: Rc<RefCell<Option<FrameLoop>>> = Rc::default();

        let wake = {
            let running = running.clone();
            move || {
                let mut running = running.borrow_mut();
                if running.as_ref().is_some_and(FrameLoop::is_running) {
                    return;
                }
                let on_frame = on_frame.clone();
                let mut last: Option<f64> = None;
                *running = Some(FrameLoop::start_until(move |timestamp| {
                    let elapsed = last.replace(timestamp).map_or(0.0, |prev| timestamp - prev);
                    (on_frame.borrow_mut())(FrameTick { timestamp, elapsed })
                }));
            }
        };
        wake();
        let listener = EventListener::new(&window, "scroll", move |_| wake());

        Ok(Self {
            _listener: listener,
            _running: running,
        })
    }
}
