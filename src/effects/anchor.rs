use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config::HEADER_OFFSET;
use crate::dom::{self, Viewport};
use crate::motion::anchor::{fragment_selector, scroll_target};

/// Menu links schedule their own scroll once the overlay has closed.
const SKIP_CLASS: &str = "nav-menu-link";

/// Smoothly scrolls so the element matching `selector` sits below the header.
/// Returns false when there is nothing to scroll to.
pub fn scroll_to_fragment(selector: &str) -> bool {
    let Some(target) = dom::document().and_then(|doc| doc.query_selector(selector).ok().flatten()) else {
        return false;
    };
    let Ok(viewport) = Viewport::read() else {
        return false;
    };
    let top = scroll_target(target.get_bounding_client_rect().top(), viewport.scroll_y, HEADER_OFFSET);
    match dom::smooth_scroll_to(top) {
        Ok(()) => {
            log::debug!("scrolling to {} at {:.0}px", selector, top);
            true
        }
        Err(err) => {
            log::warn!("anchor scroll to {} failed: {}", selector, err);
            false
        }
    }
}

fn clicked_link(event: &Event) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest("a[href^='#']")
        .ok()
        .flatten()
}

/// One delegated click handler for every in-page link on the page.
#[hook]
pub fn use_anchor_scroll() {
    use_effect_with_deps(
        |_| {
            let listener = dom::document().map(|document| {
                EventListener::new_with_options(
                    &document,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    |event| {
                        let Some(link) = clicked_link(event) else {
                            return;
                        };
                        if link.class_list().contains(SKIP_CLASS) {
                            return;
                        }
                        let Some(href) = link.get_attribute("href") else {
                            return;
                        };
                        if let Some(selector) = fragment_selector(&href) {
                            if scroll_to_fragment(selector) {
                                event.prevent_default();
                            }
                        }
                    },
                )
            });
            move || drop(listener)
        },
        (),
    );
}
