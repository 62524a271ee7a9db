use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::COMPACT_BREAKPOINT;
use crate::motion::stack::StackMode;

/// Layout decisions derived from the window width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportMode {
    /// Narrow screens: no custom cursor, particles reduced.
    pub compact: bool,
    pub stack: StackMode,
}

impl ViewportMode {
    pub fn for_width(width: f64) -> Self {
        Self {
            compact: width <= COMPACT_BREAKPOINT,
            stack: StackMode::for_width(width),
        }
    }
}

#[hook]
pub fn use_viewport_mode() -> ViewportMode {
    let (width, _) = use_window_size();
    ViewportMode::for_width(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints() {
        assert_eq!(
            ViewportMode::for_width(1280.0),
            ViewportMode { compact: false, stack: StackMode::Vertical }
        );
        assert_eq!(
            ViewportMode::for_width(900.0),
            ViewportMode { compact: true, stack: StackMode::Vertical }
        );
        assert_eq!(
            ViewportMode::for_width(390.0),
            ViewportMode { compact: true, stack: StackMode::Horizontal }
        );
    }
}
