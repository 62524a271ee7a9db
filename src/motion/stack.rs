use crate::config::{STACK_FALLBACK_SPACING, STACK_NARROW_BREAKPOINT};
use crate::motion::progress::{active_section, SectionSpan};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackMode {
    /// Desktop: images travel upward past the frame.
    Vertical,
    /// Narrow viewports: images travel sideways.
    Horizontal,
}

impl StackMode {
    pub fn for_width(width: f64) -> Self {
        if width <= STACK_NARROW_BREAKPOINT {
            StackMode::Horizontal
        } else {
            StackMode::Vertical
        }
    }
}

/// Geometry of the pinned image sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageStack {
    pub mode: StackMode,
    pub count: usize,
    /// Distance between consecutive images along the stacking axis.
    pub spacing: f64,
}

impl ImageStack {
    /// Geometry from the measured extent of one item along the stacking
    /// axis. Unmeasurable items (`None` or zero) fall back to a fixed spacing.
    pub fn measured(mode: StackMode, count: usize, extent: Option<f64>) -> Self {
        let spacing = match extent {
            Some(px) if px > 0.0 => px,
            _ => STACK_FALLBACK_SPACING,
        };
        Self { mode, count, spacing }
    }

    pub fn pin_distance(&self) -> f64 {
        self.spacing * self.count.saturating_sub(1) as f64
    }

    pub fn offset(&self, progress: f64) -> f64 {
        -progress.clamp(0.0, 1.0) * self.pin_distance()
    }

    pub fn transform(&self, offset: f64, skew: f64) -> String {
        match self.mode {
            StackMode::Vertical => format!("translate3d(0, {:.2}px, 0) skewY({:.3}deg)", offset, skew),
            StackMode::Horizontal => format!("translate3d({:.2}px, 0, 0) skewX({:.3}deg)", offset, skew),
        }
    }

    /// Item whose resting slot sits nearest the frame origin for a track offset.
    pub fn closest_to_origin(&self, offset: f64) -> Option<usize> {
        (0..self.count).min_by(|&a, &b| {
            let da = (a as f64 * self.spacing + offset).abs();
            let db = (b as f64 * self.spacing + offset).abs();
            da.total_cmp(&db)
        })
    }
}

/// Tracks the item that last crossed the viewport center. Changes only when
/// some item actually contains the center line, the way enter / enter-back
/// triggers behave; in the gaps between items the previous choice holds.
#[derive(Debug, Default)]
pub struct CenterTracker {
    active: Option<usize>,
}

impl CenterTracker {
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// `spans` are in viewport coordinates. Returns the new index on change.
    pub fn observe(&mut self, spans: &[SectionSpan], viewport_height: f64) -> Option<usize> {
        let hit = active_section(spans, viewport_height * 0.5)?;
        if self.active == Some(hit) {
            return None;
        }
        self.active = Some(hit);
        Some(hit)
    }

    pub fn set(&mut self, index: usize) -> bool {
        let changed = self.active != Some(index);
        self.active = Some(index);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(mode: StackMode, count: usize) -> ImageStack {
        ImageStack { mode, count, spacing: 500.0 }
    }

    #[test]
    fn mode_follows_breakpoint() {
        assert_eq!(StackMode::for_width(375.0), StackMode::Horizontal);
        assert_eq!(StackMode::for_width(768.0), StackMode::Horizontal);
        assert_eq!(StackMode::for_width(1440.0), StackMode::Vertical);
    }

    #[test]
    fn pin_distance_spans_all_but_one_spacing() {
        assert_eq!(stack(StackMode::Vertical, 5).pin_distance(), 2000.0);
        assert_eq!(stack(StackMode::Vertical, 1).pin_distance(), 0.0);
        assert_eq!(stack(StackMode::Vertical, 0).pin_distance(), 0.0);
    }

    #[test]
    fn offset_tracks_progress() {
        let geometry = stack(StackMode::Horizontal, 5);
        assert_eq!(geometry.offset(0.0), 0.0);
        assert_eq!(geometry.offset(0.5), -1000.0);
        assert_eq!(geometry.offset(2.0), -2000.0);
        assert_eq!(geometry.transform(-1000.0, 0.0), "translate3d(-1000.00px, 0, 0) skewX(0.000deg)");
    }

    #[test]
    fn closest_item_to_origin() {
        let geometry = stack(StackMode::Horizontal, 4);
        assert_eq!(geometry.closest_to_origin(0.0), Some(0));
        assert_eq!(geometry.closest_to_origin(-240.0), Some(0));
        assert_eq!(geometry.closest_to_origin(-260.0), Some(1));
        assert_eq!(geometry.closest_to_origin(-1500.0), Some(3));
        assert_eq!(geometry.closest_to_origin(-9000.0), Some(3));
        assert_eq!(stack(StackMode::Horizontal, 0).closest_to_origin(0.0), None);
    }

    #[test]
    fn remeasured_items_stretch_the_pin() {
        // a phone rotating from 390px to 700px keeps the horizontal mode
        let portrait = ImageStack::measured(StackMode::Horizontal, 5, Some(312.0));
        let landscape = ImageStack::measured(StackMode::Horizontal, 5, Some(560.0));
        assert_eq!(portrait.pin_distance(), 1248.0);
        assert_eq!(landscape.pin_distance(), 2240.0);
        assert_eq!(landscape.offset(1.0), -2240.0);
        assert_eq!(landscape.closest_to_origin(-1680.0), Some(3));
    }

    #[test]
    fn unmeasurable_items_use_fallback_spacing() {
        assert_eq!(ImageStack::measured(StackMode::Vertical, 3, None).spacing, STACK_FALLBACK_SPACING);
        assert_eq!(ImageStack::measured(StackMode::Vertical, 3, Some(0.0)).spacing, STACK_FALLBACK_SPACING);
    }

    #[test]
    fn center_tracker_holds_through_gaps() {
        let mut tracker = CenterTracker::default();
        let first = [
            SectionSpan { top: 300.0, height: 400.0 },
            SectionSpan { top: 800.0, height: 400.0 },
        ];
        assert_eq!(tracker.observe(&first, 1000.0), Some(0));
        assert_eq!(tracker.observe(&first, 1000.0), None);

        let gap = [
            SectionSpan { top: -200.0, height: 400.0 },
            SectionSpan { top: 600.0, height: 400.0 },
        ];
        assert_eq!(tracker.observe(&gap, 1000.0), None);
        assert_eq!(tracker.active(), Some(0));

        let second = [
            SectionSpan { top: -450.0, height: 400.0 },
            SectionSpan { top: 150.0, height: 400.0 },
        ];
        assert_eq!(tracker.observe(&second, 1000.0), Some(1));
        // scrolling back up re-enters the first item
        assert_eq!(tracker.observe(&first, 1000.0), Some(0));
    }
}
