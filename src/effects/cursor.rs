use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::dom::{self, DomResult};
use crate::effects::frame::FrameLoop;
use crate::motion::cursor::CursorTrail;

const INTERACTIVE: &str = "button, a, .floating-shape, .feature-item, .service-card";

/// Pointer tracking plus the per-frame follower loop. Dropping it stops both.
struct RunningCursor {
    _pointer: EventListener,
    _frames: FrameLoop,
}

fn place(el: &HtmlElement, x: f64, y: f64) {
    dom::set_style(el, "left", &format!("{:.1}px", x));
    dom::set_style(el, "top", &format!("{:.1}px", y));
}

impl RunningCursor {
    fn start(trail: Rc<RefCell<CursorTrail>>, cursor: HtmlElement, follower: HtmlElement) -> DomResult<Self> {
        let document = dom::document().ok_or(dom::DomError::NoWindow)?;
        let pointer = {
            let trail = trail.clone();
            EventListener::new(&document, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    trail
                        .borrow_mut()
                        .move_to(f64::from(event.client_x()), f64::from(event.client_y()));
                }
            })
        };
        let frames = FrameLoop::start(move |_| {
            let mut trail = trail.borrow_mut();
            let target = trail.pointer();
            let eased = trail.step();
            place(&cursor, target.x, target.y);
            place(&follower, eased.x, eased.y);
        });
        Ok(Self {
            _pointer: pointer,
            _frames: frames,
        })
    }
}

/// Shows the cursor dots and runs the follower while `enabled`; hides them and
/// stops the loop otherwise. Positions survive a disable/enable cycle.
#[hook]
pub fn use_cursor_trail(cursor: NodeRef, follower: NodeRef, enabled: bool, smoothing: f64) {
    let trail = use_mut_ref(|| CursorTrail::new(smoothing));
    use_effect_with_deps(
        move |enabled| {
            let dots = (cursor.cast::<HtmlElement>(), follower.cast::<HtmlElement>());
            let display = if *enabled { "block" } else { "none" };
            for dot in [&dots.0, &dots.1].into_iter().flatten() {
                dom::set_style(dot, "display", display);
            }
            let running = match dots {
                (Some(cursor), Some(follower)) if *enabled => {
                    dom::log_failure("custom cursor", RunningCursor::start(trail, cursor, follower))
                }
                _ => None,
            };
            move || drop(running)
        },
        enabled,
    );
}

fn over_interactive(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE).ok().flatten())
        .is_some()
}

/// Marks `body.cursor-hover` while the pointer is over something clickable.
#[hook]
pub fn use_cursor_hover() {
    use_effect_with_deps(
        |_| {
            let listeners = dom::document().map(|document| {
                let over = EventListener::new(&document, "mouseover", |event| {
                    if let Some(body) = dom::body() {
                        dom::toggle_class(&body, "cursor-hover", over_interactive(event));
                    }
                });
                let out = EventListener::new(&document, "mouseout", |event| {
                    let left_page = event
                        .dyn_ref::<MouseEvent>()
                        .map(|e| e.related_target().is_none())
                        .unwrap_or(false);
                    if left_page {
                        if let Some(body) = dom::body() {
                            dom::toggle_class(&body, "cursor-hover", false);
                        }
                    }
                });
                [over, out]
            });
            move || drop(listeners)
        },
        (),
    );
}
