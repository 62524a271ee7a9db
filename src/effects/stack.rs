use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom::{self, DomResult, Viewport};
use crate::effects::frame::{FrameOnDemand, FrameTick};
use crate::motion::stack::{CenterTracker, ImageStack, StackMode};
use crate::motion::timeline::{ScrollTimeline, SkewEase, VelocityTracker};

struct PinnedStack {
    section: HtmlElement,
    track: HtmlElement,
    _frames: FrameOnDemand,
}

fn item_extent(items: &[HtmlElement], mode: StackMode) -> Option<f64> {
    items.first().map(|item| match mode {
        StackMode::Vertical => f64::from(item.offset_height()),
        StackMode::Horizontal => f64::from(item.offset_width()),
    })
}

fn mark_active(entries: &[HtmlElement], items: &[HtmlElement], active: usize) {
    for (i, entry) in entries.iter().enumerate() {
        dom::toggle_class(entry, "active", i == active);
    }
    for (i, item) in items.iter().enumerate() {
        dom::toggle_class(item, "is-active", i == active);
    }
}

impl PinnedStack {
    fn start(section: HtmlElement, track: HtmlElement, mode: StackMode) -> DomResult<Self> {
        let items = dom::query_all_in(&track, ".stack-item");
        let entries = dom::query_all_in(&section, ".stack-index li");
        let geometry = ImageStack::measured(mode, items.len(), item_extent(&items, mode));
        // The section is the pin spacer; its sticky frame does the pinning.
        dom::set_style(
            &section,
            "height",
            &format!("calc(100vh + {:.0}px)", geometry.pin_distance()),
        );
        log::debug!(
            "pinned stack: {} items, {:?}, {:.0}px pin",
            geometry.count,
            mode,
            geometry.pin_distance()
        );

        let mut velocity = VelocityTracker::default();
        let mut skew = SkewEase::default();
        let mut centers = CenterTracker::default();
        let mut last_scroll: Option<f64> = None;

        let frames = {
            let section = section.clone();
            let track = track.clone();
            // Keeps running while the page scrolls or the skew is still easing out.
            FrameOnDemand::start(move |tick: FrameTick| {
                let Ok(viewport) = Viewport::read() else {
                    return false;
                };
                let moved = last_scroll.replace(viewport.scroll_y) != Some(viewport.scroll_y);

                let timeline = ScrollTimeline::pinned(dom::page_top(&section), geometry.pin_distance());
                let speed = velocity.sample(viewport.scroll_y, tick.timestamp);
                if timeline.is_active(viewport.scroll_y) {
                    skew.kick(speed);
                }
                let skew_deg = skew.settle(tick.elapsed);

                let offset = geometry.offset(timeline.progress(viewport.scroll_y));
                dom::set_style(&track, "transform", &geometry.transform(offset, skew_deg));

                let changed = match geometry.mode {
                    StackMode::Vertical => {
                        let spans: Vec<_> = items.iter().map(|item| dom::viewport_span(item)).collect();
                        centers.observe(&spans, viewport.height)
                    }
                    StackMode::Horizontal => geometry
                        .closest_to_origin(offset)
                        .filter(|&index| centers.set(index)),
                };
                if let Some(active) = changed {
                    mark_active(&entries, &items, active);
                }

                moved || !skew.is_settled()
            })?
        };

        Ok(Self {
            section,
            track,
            _frames: frames,
        })
    }
}

impl Drop for PinnedStack {
    fn drop(&mut self) {
        dom::remove_style(&self.section, "height");
        dom::remove_style(&self.track, "transform");
    }
}

/// Pins `section` while its `.stack-item`s scroll past. Rebuilds when the
/// layout mode or the window size changes, since item extents follow the
/// viewport.
#[hook]
pub fn use_pinned_stack(section: NodeRef, track: NodeRef, mode: StackMode) {
    let (width, height) = use_window_size();
    use_effect_with_deps(
        move |(mode, _, _)| {
            let pinned = match (section.cast::<HtmlElement>(), track.cast::<HtmlElement>()) {
                (Some(section), Some(track)) => {
                    dom::log_failure("pinned stack", PinnedStack::start(section, track, *mode))
                }
                _ => {
                    log::warn!("pinned stack markup missing");
                    None
                }
            };
            move || drop(pinned)
        },
        (mode, width, height),
    );
}
