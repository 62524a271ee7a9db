use std::rc::Rc;
use yew::Reducible;

/// Slide position for a fixed set of panels. `current` always stays in `[0, count)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    count: usize,
}

pub enum CarouselAction {
    Next,
    Prev,
    JumpTo(usize),
}

impl Carousel {
    /// A carousel without slides behaves like a single-slide one.
    pub fn new(count: usize) -> Self {
        Self {
            current: 0,
            count: count.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn advance(&mut self, step: isize) {
        let count = self.count as isize;
        self.current = (self.current as isize + step).rem_euclid(count) as usize;
    }

    /// Returns false and leaves the position alone for out-of-range indices.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        self.current = index;
        true
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn strip_transform(&self) -> String {
        format!("translateX(-{}%)", self.current * 100)
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.advance(1),
            CarouselAction::Prev => next.advance(-1),
            CarouselAction::JumpTo(index) => {
                if !next.jump_to(index) {
                    return self;
                }
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_forward_from_last_slide() {
        let mut carousel = Carousel::new(6);
        assert!(carousel.jump_to(5));
        carousel.advance(1);
        assert_eq!(carousel.current(), 0);
        assert!(carousel.is_active(0));
        assert!((1..6).all(|i| !carousel.is_active(i)));
        assert_eq!(carousel.strip_transform(), "translateX(-0%)");
    }

    #[test]
    fn wraps_backward_from_first_slide() {
        let mut carousel = Carousel::new(6);
        carousel.advance(-1);
        assert_eq!(carousel.current(), 5);
        assert_eq!(carousel.strip_transform(), "translateX(-500%)");
    }

    #[test]
    fn index_stays_in_range_for_any_sequence() {
        let mut carousel = Carousel::new(4);
        let steps = [1, 1, -1, -1, -1, -1, -1, 3, 7, -9, 1, 1, 1, 1, 1];
        for step in steps {
            carousel.advance(step);
            assert!(carousel.current() < carousel.count());
        }
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(3);
        carousel.advance(1);
        assert!(!carousel.jump_to(3));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn empty_carousel_acts_as_single_slide() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.count(), 1);
        carousel.advance(1);
        carousel.advance(-1);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn reducer_applies_actions() {
        let state = Rc::new(Carousel::new(6));
        let state = state.reduce(CarouselAction::Prev);
        assert_eq!(state.current(), 5);
        let state = state.reduce(CarouselAction::Next);
        assert_eq!(state.current(), 0);
        let state = state.reduce(CarouselAction::JumpTo(3));
        assert_eq!(state.current(), 3);
        let same = state.clone().reduce(CarouselAction::JumpTo(42));
        assert!(Rc::ptr_eq(&state, &same));
    }
}
