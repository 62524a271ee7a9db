use std::cell::RefCell;

use yew::prelude::*;

use crate::dom;
use crate::effects::frame::FrameScroll;
use crate::motion::progress::{scroll_progress, ProgressTracker};

/// Drives the `.progress-line` fill, the `.progress-counter` and the active
/// `.challenge-viewport` section from the scroll position.
#[hook]
pub fn use_scroll_progress() {
    use_effect_with_deps(
        |_| {
            let sections = dom::query_all(".challenge-viewport");
            let contents: Vec<_> = sections
                .iter()
                .map(|section| dom::query_in(section, ".challenge-content"))
                .collect();
            if let Some(Some(first)) = contents.first() {
                dom::toggle_class(first, "active", true);
            }

            let line = dom::query(".progress-line");
            // Horizontal bars opt in with data-axis="x".
            let fill_property = match line.as_ref().and_then(|l| l.get_attribute("data-axis")) {
                Some(axis) if axis == "x" => "width",
                _ => "height",
            };
            let counter = dom::query(".progress-counter");
            let tracker = RefCell::new(ProgressTracker::new());

            let subscription = FrameScroll::subscribe(move |viewport| {
                if let Some(line) = &line {
                    let progress = scroll_progress(viewport.scroll_y, viewport.document_height, viewport.height);
                    dom::set_style(line, fill_property, &format!("{:.2}%", progress));
                }

                let spans: Vec<_> = sections.iter().map(dom::page_span).collect();
                let update = tracker.borrow_mut().update(&spans, viewport.scroll_y, viewport.height);
                for (index, content) in contents.iter().enumerate() {
                    if let Some(content) = content {
                        dom::toggle_class(content, "active", update.active == Some(index));
                    }
                }
                if let (Some(counter), Some(text)) = (&counter, update.counter) {
                    counter.set_text_content(Some(&text));
                }
            });
            let subscription = dom::log_failure("scroll progress", subscription);
            move || drop(subscription)
        },
        (),
    );
}
