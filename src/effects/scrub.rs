use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::{SCRUB_LAG_MS, SNAP_DELAY_MS};
use crate::dom::{self, DomResult, Viewport};
use crate::effects::frame::{FrameOnDemand, FrameTick};
use crate::motion::scrub::{accent_frame, heading_frame, section_drift, SNAP_LABELS};
use crate::motion::timeline::{Edge, ScrollTimeline, Scrub};

const REVEAL_START: Edge = Edge::new(0.0, 0.5).shifted(100.0);

// offsetTop ignores the drift transform applied below
fn reveal_timeline(section: &HtmlElement, viewport_height: f64) -> ScrollTimeline {
    ScrollTimeline::between(
        REVEAL_START,
        Edge::CENTER_CENTER,
        dom::page_top(section),
        f64::from(section.offset_height()),
        viewport_height,
    )
}

struct ScrubSection {
    section: HtmlElement,
    heading: Option<HtmlElement>,
    accents: Vec<HtmlElement>,
    reveal: Scrub,
}

impl ScrubSection {
    /// Paints one frame; true once the lagged reveal has caught up.
    fn apply(&mut self, index: usize, viewport: &Viewport, elapsed_ms: f64) -> bool {
        let target = reveal_timeline(&self.section, viewport.height).progress(viewport.scroll_y);
        let reveal = self.reveal.follow(target, elapsed_ms);

        let count = self.accents.len();
        if let Some(heading) = &self.heading {
            let frame = heading_frame(reveal, count);
            dom::set_style(heading, "opacity", &format!("{:.3}", frame.opacity));
            dom::set_style(heading, "transform", &frame.css_transform());
        }
        for (i, accent) in self.accents.iter().enumerate() {
            let frame = accent_frame(reveal, i, count);
            dom::set_style(accent, "opacity", &format!("{:.3}", frame.opacity));
            dom::set_style(accent, "transform", &frame.css_transform());
        }

        let drift = ScrollTimeline::between(
            Edge::TOP_BOTTOM,
            Edge::BOTTOM_TOP,
            dom::page_top(&self.section),
            f64::from(self.section.offset_height()),
            viewport.height,
        )
        .progress(viewport.scroll_y);
        dom::set_style(
            &self.section,
            "transform",
            &format!("translateY({:.2}px)", section_drift(index, drift)),
        );

        self.reveal.is_settled(target)
    }
}

/// Settles the page onto the nearest label of whichever section the scroll
/// came to rest in.
fn snap_to_label(sections: &[HtmlElement]) {
    let Ok(viewport) = Viewport::read() else {
        return;
    };
    let target = sections
        .iter()
        .find_map(|section| reveal_timeline(section, viewport.height).snap(viewport.scroll_y, &SNAP_LABELS));
    if let Some(top) = target {
        log::debug!("snapping scrubbed section to {:.0}px", top);
        if let Err(err) = dom::smooth_scroll_to(top) {
            log::debug!("snap failed: {}", err);
        }
    }
}

struct ScrollScrub {
    _frames: FrameOnDemand,
    _snap_listener: EventListener,
    _snap: Rc<RefCell<Option<Timeout>>>,
}

impl ScrollScrub {
    fn attach() -> DomResult<Self> {
        let elements = dom::query_all(".scroll-anim-section");
        let mut sections: Vec<ScrubSection> = elements
            .iter()
            .map(|section| ScrubSection {
                heading: dom::query_in(section, ".scroll-anim-heading"),
                accents: dom::query_all_in(section, ".scroll-anim-accent"),
                section: section.clone(),
                reveal: Scrub::new(SCRUB_LAG_MS),
            })
            .collect();

        let frames = FrameOnDemand::start(move |tick: FrameTick| {
            let Ok(viewport) = Viewport::read() else {
                return false;
            };
            let mut settled = true;
            for (index, section) in sections.iter_mut().enumerate() {
                settled &= section.apply(index, &viewport, tick.elapsed);
            }
            !settled
        })?;

        let snap: Rc<RefCell<Option<Timeout>>> = Rc::default();
        let snap_listener = {
            let snap = snap.clone();
            let window = dom::window()?;
            EventListener::new(&window, "scroll", move |_| {
                let elements = elements.clone();
                // Replacing the timeout restarts the quiet period.
                *snap.borrow_mut() = Some(Timeout::new(SNAP_DELAY_MS, move || snap_to_label(&elements)));
            })
        };

        Ok(Self {
            _frames: frames,
            _snap_listener: snap_listener,
            _snap: snap,
        })
    }
}

/// Scroll-scrubbed heading reveals, label snapping and drift for
/// `.scroll-anim-section` blocks.
#[hook]
pub fn use_scroll_scrub() {
    use_effect_with_deps(
        |_| {
            let scrub = dom::log_failure("scroll scrub", ScrollScrub::attach());
            move || drop(scrub)
        },
        (),
    );
}
