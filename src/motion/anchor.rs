/// Selector for an in-page link target, or `None` when the href is not a
/// usable fragment (`#`, empty, or a different page).
pub fn fragment_selector(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() || fragment.contains(char::is_whitespace) {
        return None;
    }
    Some(href)
}

/// Scroll offset that leaves `header_offset` pixels above the target.
pub fn scroll_target(rect_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (rect_top + scroll_y - header_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_fragments() {
        assert_eq!(fragment_selector("#services"), Some("#services"));
    }

    #[test]
    fn rejects_bare_hash_and_other_pages() {
        assert_eq!(fragment_selector("#"), None);
        assert_eq!(fragment_selector(""), None);
        assert_eq!(fragment_selector("/faq#try"), None);
        assert_eq!(fragment_selector("#a b"), None);
    }

    #[test]
    fn target_leaves_room_for_header() {
        assert_eq!(scroll_target(400.0, 1200.0, 80.0), 1520.0);
        assert_eq!(scroll_target(20.0, 0.0, 80.0), 0.0);
    }
}
