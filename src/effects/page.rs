use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::ErrorEvent;
use yew::prelude::*;

use crate::config::SCROLLING_IDLE_MS;
use crate::dom::{self, DomError, DomResult};

/// Page-wide body markers: loaded, touch, hidden-tab pause, scrolling and the
/// error fallback.
struct PageLifecycle {
    _listeners: Vec<EventListener>,
    _idle: Rc<RefCell<Option<Timeout>>>,
}

impl PageLifecycle {
    fn attach() -> DomResult<Self> {
        let window = dom::window()?;
        let document = window.document().ok_or(DomError::NoWindow)?;

        if let Some(body) = document.body() {
            dom::toggle_class(&body, "loading", false);
            dom::toggle_class(&body, "loaded", true);
            if js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false) {
                dom::toggle_class(&body, "touch-device", true);
            }
        }

        let visibility = {
            let doc = document.clone();
            EventListener::new(&document, "visibilitychange", move |_| {
                let state = if doc.hidden() { "paused" } else { "running" };
                if let Some(body) = doc.body() {
                    dom::set_style(&body, "animation-play-state", state);
                }
            })
        };

        let idle: Rc<RefCell<Option<Timeout>>> = Rc::default();
        let scrolling = {
            let idle = idle.clone();
            EventListener::new(&window, "scroll", move |_| {
                let Some(body) = dom::body() else {
                    return;
                };
                dom::toggle_class(&body, "scrolling", true);
                // Replacing the timeout cancels the previous one.
                *idle.borrow_mut() = Some(Timeout::new(SCROLLING_IDLE_MS, move || {
                    dom::toggle_class(&body, "scrolling", false);
                }));
            })
        };

        let errors = EventListener::new(&window, "error", |event| {
            let message = event
                .dyn_ref::<ErrorEvent>()
                .map(|e| e.message())
                .unwrap_or_else(|| "unknown error".to_string());
            log::error!("Application error: {}", message);
            if let Some(body) = dom::body() {
                dom::toggle_class(&body, "fallback-mode", true);
            }
        });

        Ok(Self {
            _listeners: vec![visibility, scrolling, errors],
            _idle: idle,
        })
    }
}

#[hook]
pub fn use_page_lifecycle() {
    use_effect_with_deps(
        |_| {
            let lifecycle = dom::log_failure("page lifecycle", PageLifecycle::attach());
            move || drop(lifecycle)
        },
        (),
    );
}
