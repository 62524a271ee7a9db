/// What to reveal once an observed element enters the viewport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealPlan {
    /// Reveal child `i` after the delay at position `i` (milliseconds).
    Children(Vec<u32>),
    /// No matching children: reveal the element itself right away.
    Itself,
}

pub fn plan(child_count: usize, step_ms: u32) -> RevealPlan {
    if child_count == 0 {
        return RevealPlan::Itself;
    }
    RevealPlan::Children(
        (0..child_count)
            .map(|i| u32::try_from(i).unwrap_or(u32::MAX).saturating_mul(step_ms))
            .collect(),
    )
}

const ENTRANCE_BASE_S: f64 = 0.2;
const ENTRANCE_STEP_S: f64 = 0.1;

/// CSS `animation-delay` for each of `count` parts of an entering section.
pub fn entrance_delays(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{:.1}s", i as f64 * ENTRANCE_STEP_S + ENTRANCE_BASE_S))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_are_staggered_in_order() {
        let RevealPlan::Children(delays) = plan(4, 100) else {
            panic!("expected staggered children");
        };
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn element_without_children_reveals_itself() {
        assert_eq!(plan(0, 100), RevealPlan::Itself);
    }

    #[test]
    fn section_parts_enter_after_a_short_pause() {
        assert_eq!(entrance_delays(4), vec!["0.2s", "0.3s", "0.4s", "0.5s"]);
        assert!(entrance_delays(0).is_empty());
    }
}
