const SCROLL_SPEED: f64 = 0.3;
const SHAPE_SPEED_STEP: f64 = 0.2;
const SHAPE_ROTATION: f64 = 0.1;
const INDICATOR_FADE_PX: f64 = 400.0;
const HERO_VISUAL_SPEED: f64 = 0.5;
const ORB_SPEED_STEP: f64 = 0.3;

pub fn shape_transform(index: usize, scroll_y: f64) -> String {
    let speed = (index + 1) as f64 * SHAPE_SPEED_STEP;
    format!(
        "translateY({:.2}px) rotate({:.2}deg)",
        scroll_y * SCROLL_SPEED * speed,
        scroll_y * SHAPE_ROTATION
    )
}

pub fn indicator_opacity(scroll_y: f64) -> f64 {
    (1.0 - scroll_y / INDICATOR_FADE_PX).clamp(0.0, 1.0)
}

pub fn hero_visual_offset(scroll_y: f64) -> f64 {
    scroll_y * HERO_VISUAL_SPEED
}

pub fn orb_offset(index: usize, scroll_y: f64) -> f64 {
    scroll_y * (index + 1) as f64 * ORB_SPEED_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_drift_faster_further_down_the_list() {
        assert_eq!(shape_transform(0, 100.0), "translateY(6.00px) rotate(10.00deg)");
        assert_eq!(shape_transform(2, 100.0), "translateY(18.00px) rotate(10.00deg)");
    }

    #[test]
    fn indicator_fades_over_first_400px() {
        assert_eq!(indicator_opacity(0.0), 1.0);
        assert_eq!(indicator_opacity(200.0), 0.5);
        assert_eq!(indicator_opacity(800.0), 0.0);
        assert_eq!(indicator_opacity(-40.0), 1.0);
    }

    #[test]
    fn layers_move_at_fixed_speeds() {
        assert_eq!(hero_visual_offset(300.0), 150.0);
        assert!((orb_offset(1, 100.0) - 60.0).abs() < 1e-9);
    }
}
