//! Scroll-linked timelines.
//!
//! A timeline is a pair of scroll offsets; its progress is where the current
//! scroll position falls between them, clamped to `[0, 1]`. The offsets are
//! resolved from trigger edges written the usual way, e.g. "element top meets
//! viewport center plus 100px".

/// A point on the trigger element meeting a point on the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// 0.0 = element top, 0.5 = center, 1.0 = bottom.
    pub element: f64,
    /// 0.0 = viewport top, 0.5 = center, 1.0 = bottom.
    pub viewport: f64,
    /// Extra pixels added to the viewport point.
    pub offset: f64,
}

impl Edge {
    pub const TOP_TOP: Edge = Edge::new(0.0, 0.0);
    pub const TOP_BOTTOM: Edge = Edge::new(0.0, 1.0);
    pub const CENTER_CENTER: Edge = Edge::new(0.5, 0.5);
    pub const BOTTOM_TOP: Edge = Edge::new(1.0, 0.0);

    pub const fn new(element: f64, viewport: f64) -> Self {
        Self {
            element,
            viewport,
            offset: 0.0,
        }
    }

    pub const fn shifted(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    /// Scroll offset at which the two points line up.
    pub fn resolve(&self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        element_top + self.element * element_height - (self.viewport * viewport_height + self.offset)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTimeline {
    start: f64,
    end: f64,
}

impl ScrollTimeline {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn between(
        start: Edge,
        end: Edge,
        element_top: f64,
        element_height: f64,
        viewport_height: f64,
    ) -> Self {
        Self::new(
            start.resolve(element_top, element_height, viewport_height),
            end.resolve(element_top, element_height, viewport_height),
        )
    }

    /// Pins from the moment the trigger reaches the viewport top for `distance` pixels.
    pub fn pinned(trigger_top: f64, distance: f64) -> Self {
        Self::new(trigger_top, trigger_top + distance.max(0.0))
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        if !(self.end > self.start) {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    pub fn is_active(&self, scroll_y: f64) -> bool {
        scroll_y >= self.start && scroll_y <= self.end
    }

    /// Scroll offset of the label nearest to the current progress, when the
    /// position rests strictly inside the timeline and is not already on it.
    /// `labels` are progress values in `[0, 1]`.
    pub fn snap(&self, scroll_y: f64, labels: &[f64]) -> Option<f64> {
        if !(scroll_y > self.start && scroll_y < self.end) {
            return None;
        }
        let progress = self.progress(scroll_y);
        let label = labels
            .iter()
            .copied()
            .min_by(|a, b| (a - progress).abs().total_cmp(&(b - progress).abs()))?;
        let target = self.start + label.clamp(0.0, 1.0) * (self.end - self.start);
        ((target - scroll_y).abs() >= SNAP_TOLERANCE_PX).then_some(target)
    }
}

const SNAP_TOLERANCE_PX: f64 = 1.0;
const SCRUB_REST: f64 = 1e-4;

/// Progress that trails the scroll position, reaching it roughly `lag_ms`
/// after the scroll stops. The first reading is taken as is.
#[derive(Debug)]
pub struct Scrub {
    lag_ms: f64,
    current: Option<f64>,
}

impl Scrub {
    pub fn new(lag_ms: f64) -> Self {
        Self { lag_ms, current: None }
    }

    pub fn follow(&mut self, target: f64, elapsed_ms: f64) -> f64 {
        let next = match self.current {
            Some(current) if self.lag_ms > 0.0 => {
                // four time constants per lag leaves under 2% behind
                let keep = (-4.0 * elapsed_ms.max(0.0) / self.lag_ms).exp();
                let eased = target + (current - target) * keep;
                if (eased - target).abs() < SCRUB_REST {
                    target
                } else {
                    eased
                }
            }
            _ => target,
        };
        self.current = Some(next);
        next
    }

    pub fn is_settled(&self, target: f64) -> bool {
        self.current == Some(target)
    }
}

/// Scroll velocity in px/s from consecutive samples.
#[derive(Debug, Default)]
pub struct VelocityTracker {
    last: Option<(f64, f64)>,
    velocity: f64,
}

impl VelocityTracker {
    pub fn sample(&mut self, scroll_y: f64, now_ms: f64) -> f64 {
        if let Some((last_y, last_ms)) = self.last {
            let elapsed = now_ms - last_ms;
            if elapsed > 0.0 {
                self.velocity = (scroll_y - last_y) / elapsed * 1000.0;
            }
        }
        self.last = Some((scroll_y, now_ms));
        self.velocity
    }
}

const SKEW_LIMIT: f64 = 20.0;
const SKEW_VELOCITY_DIVISOR: f64 = -300.0;
const SKEW_HALF_LIFE_MS: f64 = 160.0;
const SKEW_REST: f64 = 0.01;

/// Transient skew kicked by scroll velocity that eases back to zero.
#[derive(Debug, Default)]
pub struct SkewEase {
    current: f64,
}

impl SkewEase {
    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.current == 0.0
    }

    pub fn kick(&mut self, velocity: f64) {
        let target = (velocity / SKEW_VELOCITY_DIVISOR).clamp(-SKEW_LIMIT, SKEW_LIMIT);
        if target.abs() > self.current.abs() {
            self.current = target;
        }
    }

    pub fn settle(&mut self, elapsed_ms: f64) -> f64 {
        self.current *= 0.5_f64.powf(elapsed_ms.max(0.0) / SKEW_HALF_LIFE_MS);
        if self.current.abs() < SKEW_REST {
            self.current = 0.0;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_resolve_against_viewport() {
        // element at 2000px, 600px tall, viewport 1000px
        let start = Edge::new(0.0, 0.5).shifted(100.0);
        assert_eq!(start.resolve(2000.0, 600.0, 1000.0), 1400.0);
        assert_eq!(Edge::CENTER_CENTER.resolve(2000.0, 600.0, 1000.0), 1800.0);
        assert_eq!(Edge::TOP_BOTTOM.resolve(2000.0, 600.0, 1000.0), 1000.0);
        assert_eq!(Edge::BOTTOM_TOP.resolve(2000.0, 600.0, 1000.0), 2600.0);
        assert_eq!(Edge::TOP_TOP.resolve(2000.0, 600.0, 1000.0), 2000.0);
    }

    #[test]
    fn progress_is_clamped() {
        let timeline = ScrollTimeline::new(1000.0, 2000.0);
        assert_eq!(timeline.progress(0.0), 0.0);
        assert_eq!(timeline.progress(1500.0), 0.5);
        assert_eq!(timeline.progress(9000.0), 1.0);
        assert!(timeline.is_active(1000.0) && !timeline.is_active(2000.5));
    }

    #[test]
    fn zero_length_timeline_is_a_step() {
        let timeline = ScrollTimeline::pinned(500.0, 0.0);
        assert_eq!(timeline.progress(499.0), 0.0);
        assert_eq!(timeline.progress(500.0), 1.0);
    }

    #[test]
    fn velocity_from_samples() {
        let mut tracker = VelocityTracker::default();
        assert_eq!(tracker.sample(0.0, 0.0), 0.0);
        assert_eq!(tracker.sample(100.0, 100.0), 1000.0);
        // same timestamp keeps the previous reading
        assert_eq!(tracker.sample(150.0, 100.0), 1000.0);
    }

    #[test]
    fn skew_is_limited_and_settles() {
        let mut skew = SkewEase::default();
        skew.kick(-30_000.0);
        assert_eq!(skew.current(), SKEW_LIMIT);
        skew.kick(-600.0);
        assert_eq!(skew.current(), SKEW_LIMIT);
        assert!((skew.settle(SKEW_HALF_LIFE_MS) - SKEW_LIMIT / 2.0).abs() < 1e-9);
        for _ in 0..200 {
            skew.settle(16.0);
        }
        assert_eq!(skew.current(), 0.0);
    }

    #[test]
    fn scrolling_down_skews_negative() {
        let mut skew = SkewEase::default();
        skew.kick(1500.0);
        assert_eq!(skew.current(), -5.0);
    }

    #[test]
    fn skew_reports_settled_only_at_rest() {
        let mut skew = SkewEase::default();
        assert!(skew.is_settled());
        skew.kick(3000.0);
        assert!(!skew.is_settled());
        skew.settle(10_000.0);
        assert!(skew.is_settled());
    }

    #[test]
    fn snap_goes_to_nearest_label() {
        let timeline = ScrollTimeline::new(1000.0, 1400.0);
        let labels = [0.0, 1.0];
        assert_eq!(timeline.snap(1100.0, &labels), Some(1000.0));
        assert_eq!(timeline.snap(1300.0, &labels), Some(1400.0));
    }

    #[test]
    fn snap_ignores_positions_outside_or_on_a_label() {
        let timeline = ScrollTimeline::new(1000.0, 1400.0);
        let labels = [0.0, 1.0];
        assert_eq!(timeline.snap(900.0, &labels), None);
        assert_eq!(timeline.snap(1000.0, &labels), None);
        assert_eq!(timeline.snap(1400.0, &labels), None);
        assert_eq!(timeline.snap(1000.5, &labels), None);
        assert_eq!(timeline.snap(1200.0, &[]), None);
    }

    #[test]
    fn scrub_trails_then_catches_up() {
        let mut scrub = Scrub::new(1000.0);
        assert_eq!(scrub.follow(0.0, 0.0), 0.0);

        let after_one_frame = scrub.follow(1.0, 16.0);
        assert!(after_one_frame > 0.0 && after_one_frame < 0.1);

        let mut value = after_one_frame;
        for _ in 0..62 {
            value = scrub.follow(1.0, 16.0);
        }
        // about one lag later the gap is below 2%
        assert!(value > 0.98 && value < 1.0);
        assert!(!scrub.is_settled(1.0));

        for _ in 0..200 {
            scrub.follow(1.0, 16.0);
        }
        assert!(scrub.is_settled(1.0));
    }

    #[test]
    fn scrub_without_lag_tracks_directly() {
        let mut scrub = Scrub::new(0.0);
        scrub.follow(0.2, 16.0);
        assert_eq!(scrub.follow(0.7, 16.0), 0.7);
        assert!(scrub.is_settled(0.7));
    }

    #[test]
    fn scrub_holds_still_without_elapsed_time() {
        let mut scrub = Scrub::new(1000.0);
        scrub.follow(0.0, 0.0);
        assert_eq!(scrub.follow(1.0, 0.0), 0.0);
    }
}
