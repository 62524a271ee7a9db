//! Thin helpers over `web_sys` for the effects.
//!
//! Missing elements come back as `None`/empty lists and callers treat them as
//! no-ops. Failing DOM calls are turned into [`DomError`] and logged rather
//! than unwrapped.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

use crate::motion::progress::SectionSpan;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window available")]
    NoWindow,
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type DomResult<T> = Result<T, DomError>;

pub fn window() -> DomResult<Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

fn collect(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(collect)
        .unwrap_or_default()
}

pub fn query_in(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .ok()
        .map(collect)
        .unwrap_or_default()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::debug!("{}: {}", property, DomError::from(err));
    }
}

pub fn remove_style(el: &HtmlElement, property: &str) {
    if let Err(err) = el.style().remove_property(property) {
        log::debug!("{}: {}", property, DomError::from(err));
    }
}

pub fn toggle_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        log::debug!("class {}: {}", class, DomError::from(err));
    }
}

pub fn smooth_scroll_to(top: f64) -> DomResult<()> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Blocking browser alert.
pub fn alert(message: &str) -> DomResult<()> {
    window()?.alert_with_message(message)?;
    Ok(())
}

/// Top of `el` in page coordinates, ignoring transforms.
pub fn page_top(el: &HtmlElement) -> f64 {
    let mut top = f64::from(el.offset_top());
    let mut parent = el.offset_parent();
    while let Some(node) = parent {
        let Ok(html) = node.dyn_into::<HtmlElement>() else {
            break;
        };
        top += f64::from(html.offset_top());
        parent = html.offset_parent();
    }
    top
}

pub fn page_span(el: &HtmlElement) -> SectionSpan {
    SectionSpan {
        top: page_top(el),
        height: f64::from(el.offset_height()),
    }
}

/// Span of `el` in viewport coordinates, transforms included.
pub fn viewport_span(el: &Element) -> SectionSpan {
    let rect = el.get_bounding_client_rect();
    SectionSpan {
        top: rect.top(),
        height: rect.height(),
    }
}

/// Scroll and size readings taken once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
    pub document_height: f64,
}

impl Viewport {
    pub fn read() -> DomResult<Self> {
        let window = window()?;
        let number = |value: JsValue| value.as_f64().unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|doc| doc.document_element())
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0);
        Ok(Self {
            scroll_y: window.scroll_y()?,
            width: number(window.inner_width()?),
            height: number(window.inner_height()?),
            document_height,
        })
    }
}

/// Logs a failed setup step and yields the value when there is one.
pub fn log_failure<T>(context: &str, result: DomResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{} unavailable: {}", context, err);
            None
        }
    }
}
