use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_STAGGER_MS;
use crate::dom::{self, DomResult};
use crate::motion::reveal::{entrance_delays, plan, RevealPlan};

const CARD_TARGETS: &str = "[data-reveal]";
const CARD_CHILDREN: &str = ".service-card, .testimonial, .pricing-card, .feature-item, .contact-item";
const CARD_THRESHOLD: f64 = 0.1;
const CARD_ROOT_MARGIN: &str = "0px 0px -50px 0px";

const SECTION_TARGETS: &str = ".section";
const SECTION_CHILDREN: &str =
    ".section-number, .section-title, .section-description, .feature-item, .service-card, .contact-item";
const SECTION_THRESHOLD: f64 = 0.3;
const SECTION_ROOT_MARGIN: &str = "0px 0px -20% 0px";

const DIVIDER: &str = ".section-transition";
const DIVIDER_THRESHOLD: f64 = 0.1;
const DIVIDER_ANIMATION: &str = "scaleInX 1s ease-out forwards";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An `IntersectionObserver` over a fixed list of targets that reports each
/// entering target by its index. Disconnects on drop.
struct EntryWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl EntryWatch {
    fn new<F>(targets: &[HtmlElement], threshold: f64, root_margin: &str, mut on_enter: F) -> DomResult<Self>
    where
        F: FnMut(usize) + 'static,
    {
        let observed = targets.to_vec();
        let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let hit = entry.target();
                let index = observed.iter().position(|t| {
                    let el: &Element = t;
                    *el == hit
                });
                if let Some(index) = index {
                    on_enter(index);
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for target in targets {
            observer.observe(target);
        }
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for EntryWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn show(el: &HtmlElement) {
    dom::set_style(el, "opacity", "1");
    dom::set_style(el, "transform", "translateY(0)");
}

fn reveal_cards(target: &HtmlElement, timers: &mut Vec<Timeout>) {
    // Dropping the previous timers cancels a stagger still in flight.
    timers.clear();
    dom::toggle_class(target, "visible", true);

    let children = dom::query_all_in(target, CARD_CHILDREN);
    match plan(children.len(), REVEAL_STAGGER_MS) {
        RevealPlan::Itself => show(target),
        RevealPlan::Children(delays) => {
            for (child, delay) in children.into_iter().zip(delays) {
                timers.push(Timeout::new(delay, move || show(&child)));
            }
        }
    }
}

fn enter_section(section: &HtmlElement) {
    dom::toggle_class(section, "visible", true);
    let parts = dom::query_all_in(section, SECTION_CHILDREN);
    for (part, delay) in parts.iter().zip(entrance_delays(parts.len())) {
        dom::set_style(part, "animation-delay", &delay);
        dom::toggle_class(part, "animate-in", true);
    }
}

/// Entrance animations for the page, alive for the page's lifetime:
///
/// * `[data-reveal]` blocks stagger their cards in;
/// * `.section`s fade their heading parts in with `animate-in`;
/// * `.section-transition` dividers draw when their section enters.
///
/// Targets are not unobserved, so re-entering the viewport replays the card
/// stagger.
pub struct RevealObserver {
    _cards: EntryWatch,
    _sections: EntryWatch,
    _dividers: EntryWatch,
    _pending: Rc<RefCell<Vec<Vec<Timeout>>>>,
}

impl RevealObserver {
    pub fn observe_page() -> DomResult<Self> {
        let cards = dom::query_all(CARD_TARGETS);
        let pending: Rc<RefCell<Vec<Vec<Timeout>>>> =
            Rc::new(RefCell::new(cards.iter().map(|_| Vec::new()).collect()));
        let card_watch = {
            let targets = cards.clone();
            let pending = pending.clone();
            EntryWatch::new(&cards, CARD_THRESHOLD, CARD_ROOT_MARGIN, move |index| {
                if let Some(timers) = pending.borrow_mut().get_mut(index) {
                    reveal_cards(&targets[index], timers);
                }
            })?
        };

        let sections = dom::query_all(SECTION_TARGETS);
        let section_watch = {
            let targets = sections.clone();
            EntryWatch::new(&sections, SECTION_THRESHOLD, SECTION_ROOT_MARGIN, move |index| {
                enter_section(&targets[index]);
            })?
        };

        let (with_divider, dividers): (Vec<_>, Vec<_>) = sections
            .iter()
            .filter_map(|section| dom::query_in(section, DIVIDER).map(|divider| (section.clone(), divider)))
            .unzip();
        let divider_watch = EntryWatch::new(&with_divider, DIVIDER_THRESHOLD, "0px", move |index| {
            dom::set_style(&dividers[index], "animation", DIVIDER_ANIMATION);
        })?;

        log::debug!(
            "observing {} reveal blocks, {} sections, {} dividers",
            cards.len(),
            sections.len(),
            with_divider.len()
        );

        Ok(Self {
            _cards: card_watch,
            _sections: section_watch,
            _dividers: divider_watch,
            _pending: pending,
        })
    }
}

#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        |_| {
            let observer = dom::log_failure("reveal observer", RevealObserver::observe_page());
            move || drop(observer)
        },
        (),
    );
}
