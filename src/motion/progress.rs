/// Vertical extent of a section in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Percentage of the page scrolled, always within `[0, 100]`.
///
/// A page that cannot scroll (content no taller than the viewport) counts as
/// fully read.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = document_height - viewport_height;
    if !(max_scroll > 0.0) {
        return 100.0;
    }
    if !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / max_scroll * 100.0).clamp(0.0, 100.0)
}

pub fn active_section(spans: &[SectionSpan], probe: f64) -> Option<usize> {
    spans.iter().position(|span| span.contains(probe))
}

pub fn format_counter(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionUpdate {
    pub active: Option<usize>,
    /// New counter text, only when the active section changed.
    pub counter: Option<String>,
}

/// Remembers which viewport section is current so the counter only changes
/// on transitions.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    current: usize,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn update(&mut self, spans: &[SectionSpan], scroll_y: f64, viewport_height: f64) -> SectionUpdate {
        let active = active_section(spans, scroll_y + viewport_height * 0.5);
        let counter = match active {
            Some(index) if index != self.current => {
                self.current = index;
                Some(format_counter(index))
            }
            _ => None,
        };
        SectionUpdate { active, counter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        (0..4)
            .map(|i| SectionSpan { top: 1000.0 + f64::from(i) * 800.0, height: 800.0 })
            .collect()
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(-50.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn unscrollable_page_reports_full_progress() {
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(0.0, 600.0, 1000.0), 100.0);
        assert!(scroll_progress(0.0, 1000.0, 1000.0).is_finite());
    }

    #[test]
    fn non_finite_scroll_reports_zero() {
        assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn probe_uses_viewport_midpoint() {
        let mut tracker = ProgressTracker::new();
        // midpoint = 1500 + 500 = 2000 -> second section
        let update = tracker.update(&spans(), 1500.0, 1000.0);
        assert_eq!(update.active, Some(1));
        assert_eq!(update.counter.as_deref(), Some("02"));
        assert_eq!(tracker.current(), 1);
    }

    #[test]
    fn counter_only_changes_on_transition() {
        let mut tracker = ProgressTracker::new();
        let update = tracker.update(&spans(), 600.0, 1000.0);
        assert_eq!(update.active, Some(0));
        assert_eq!(update.counter, None);

        tracker.update(&spans(), 2200.0, 1000.0);
        let again = tracker.update(&spans(), 2250.0, 1000.0);
        assert_eq!(again.active, Some(2));
        assert_eq!(again.counter, None);
    }

    #[test]
    fn no_section_outside_all_spans() {
        let mut tracker = ProgressTracker::new();
        let update = tracker.update(&spans(), 0.0, 1000.0);
        assert_eq!(update.active, None);
        assert_eq!(tracker.current(), 0);
    }

    #[test]
    fn counter_is_zero_padded() {
        assert_eq!(format_counter(0), "01");
        assert_eq!(format_counter(11), "12");
    }
}
