//! Heading and accent tweens scrubbed by a section's scroll timeline.

const HEADING_DURATION: f64 = 1.5;
const ACCENT_START: f64 = 0.5;
const ACCENT_STAGGER: f64 = 0.1;
const ACCENT_DURATION: f64 = 1.0;
const BACK_OVERSHOOT: f64 = 1.7;
const DRIFT_STEP_PX: f64 = -50.0;

/// Timeline progress of the `start` and `end` labels the page snaps to.
pub const SNAP_LABELS: [f64; 2] = [0.0, 1.0];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    pub y: f64,
    pub rotate_x: f64,
    pub scale: f64,
}

impl Frame {
    pub fn css_transform(&self) -> String {
        format!(
            "translateY({:.2}px) rotateX({:.2}deg) scale({:.4})",
            self.y, self.rotate_x, self.scale
        )
    }
}

fn expo_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

fn back_out(t: f64) -> f64 {
    let c1 = BACK_OVERSHOOT;
    let c3 = c1 + 1.0;
    let u = t - 1.0;
    1.0 + c3 * u.powi(3) + c1 * u.powi(2)
}

fn local(time: f64, start: f64, duration: f64) -> f64 {
    ((time - start) / duration).clamp(0.0, 1.0)
}

/// Length of the whole timeline for a section with `accents` accent elements.
pub fn total_duration(accents: usize) -> f64 {
    let last_accent_end =
        ACCENT_START + ACCENT_STAGGER * accents.saturating_sub(1) as f64 + ACCENT_DURATION;
    HEADING_DURATION.max(last_accent_end)
}

pub fn heading_frame(progress: f64, accents: usize) -> Frame {
    let time = progress.clamp(0.0, 1.0) * total_duration(accents);
    let e = expo_out(local(time, 0.0, HEADING_DURATION));
    Frame {
        opacity: e,
        y: 100.0 * (1.0 - e),
        rotate_x: 30.0 * (1.0 - e),
        scale: 0.9 + 0.1 * e,
    }
}

pub fn accent_frame(progress: f64, index: usize, accents: usize) -> Frame {
    let time = progress.clamp(0.0, 1.0) * total_duration(accents);
    let start = ACCENT_START + ACCENT_STAGGER * index as f64;
    let t = local(time, start, ACCENT_DURATION);
    let e = back_out(t);
    Frame {
        opacity: e.clamp(0.0, 1.0),
        y: 20.0 * (1.0 - e),
        rotate_x: 0.0,
        scale: 0.8 + 0.2 * e,
    }
}

/// Upward drift of the `index`-th section while it crosses the viewport.
pub fn section_drift(index: usize, progress: f64) -> f64 {
    DRIFT_STEP_PX * (index + 1) as f64 * progress.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_starts_hidden_and_lands_in_place() {
        let start = heading_frame(0.0, 3);
        assert_eq!(start, Frame { opacity: 0.0, y: 100.0, rotate_x: 30.0, scale: 0.9 });
        let end = heading_frame(1.0, 3);
        assert_eq!(end, Frame { opacity: 1.0, y: 0.0, rotate_x: 0.0, scale: 1.0 });
    }

    #[test]
    fn accents_are_staggered() {
        let total = total_duration(3);
        assert!((total - 1.7).abs() < 1e-9);
        let probe = 0.9 / total;
        let first = accent_frame(probe, 0, 3);
        let third = accent_frame(probe, 2, 3);
        assert!(first.opacity > third.opacity);
        assert_eq!(accent_frame(1.0, 2, 3).y, 0.0);
        assert_eq!(accent_frame(0.0, 0, 3).opacity, 0.0);
    }

    #[test]
    fn accent_opacity_follows_the_back_ease() {
        let total = total_duration(3);
        // 0.4 into the first accent's tween, past the overshoot point
        let frame = accent_frame(0.9 / total, 0, 3);
        assert_eq!(frame.opacity, 1.0);
        assert!(frame.y < 0.0);
        // a tenth of the way in, the eased opacity is well ahead of linear
        let early = accent_frame(0.6 / total, 0, 3);
        assert!(early.opacity > 0.35 && early.opacity < 0.45);
    }

    #[test]
    fn single_accent_keeps_heading_length() {
        assert_eq!(total_duration(0), 1.5);
        assert_eq!(total_duration(1), 1.5);
    }

    #[test]
    fn drift_scales_with_section_index() {
        assert_eq!(section_drift(0, 1.0), -50.0);
        assert_eq!(section_drift(2, 0.5), -75.0);
    }
}
