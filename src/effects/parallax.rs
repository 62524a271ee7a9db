use yew::prelude::*;

use crate::dom;
use crate::effects::frame::FrameScroll;
use crate::motion::parallax::{hero_visual_offset, indicator_opacity, orb_offset, shape_transform};

#[hook]
pub fn use_hero_parallax() {
    use_effect_with_deps(
        |_| {
            let shapes = dom::query_all(".floating-shape");
            let orbs = dom::query_all(".orb");
            let indicator = dom::query(".scroll-indicator");
            let visual = dom::query(".hero-visual");

            let subscription = FrameScroll::subscribe_primed(move |viewport| {
                let scroll_y = viewport.scroll_y;
                for (index, shape) in shapes.iter().enumerate() {
                    dom::set_style(shape, "transform", &shape_transform(index, scroll_y));
                }
                for (index, orb) in orbs.iter().enumerate() {
                    dom::set_style(orb, "transform", &format!("translateY({:.2}px)", orb_offset(index, scroll_y)));
                }
                if let Some(indicator) = &indicator {
                    dom::set_style(indicator, "opacity", &format!("{:.3}", indicator_opacity(scroll_y)));
                }
                if let Some(visual) = &visual {
                    dom::set_style(visual, "transform", &format!("translateY({:.2}px)", hero_visual_offset(scroll_y)));
                }
            });
            let subscription = dom::log_failure("hero parallax", subscription);
            move || drop(subscription)
        },
        (),
    );
}
