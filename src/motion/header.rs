use crate::config::{HEADER_ELEVATE_AFTER, HEADER_HIDE_AFTER};

/// How the header should currently look.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderLook {
    pub elevated: bool,
    pub hidden: bool,
}

#[derive(Debug, Default)]
pub struct HeaderState {
    last_offset: f64,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, offset: f64) -> HeaderLook {
        let look = HeaderLook {
            elevated: offset > HEADER_ELEVATE_AFTER,
            hidden: offset > self.last_offset && offset > HEADER_HIDE_AFTER,
        };
        self.last_offset = offset;
        look
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevates_past_threshold() {
        let mut header = HeaderState::new();
        assert!(!header.on_scroll(20.0).elevated);
        assert!(header.on_scroll(21.0).elevated);
    }

    #[test]
    fn hides_only_when_scrolling_down_past_minimum() {
        let mut header = HeaderState::new();
        assert!(!header.on_scroll(80.0).hidden);
        assert!(header.on_scroll(150.0).hidden);
        assert!(header.on_scroll(400.0).hidden);
        assert!(!header.on_scroll(390.0).hidden);
        assert!(!header.on_scroll(390.0).hidden);
    }

    #[test]
    fn returning_to_top_shows_flat_header() {
        let mut header = HeaderState::new();
        header.on_scroll(500.0);
        assert_eq!(header.on_scroll(0.0), HeaderLook::default());
    }
}
