#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Raw pointer position plus a follower that eases toward it every frame.
#[derive(Debug)]
pub struct CursorTrail {
    pointer: Point,
    follower: Point,
    smoothing: f64,
}

impl CursorTrail {
    pub fn new(smoothing: f64) -> Self {
        Self {
            pointer: Point::default(),
            follower: Point::default(),
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn follower(&self) -> Point {
        self.follower
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pointer = Point { x, y };
    }

    pub fn step(&mut self) -> Point {
        self.follower.x += (self.pointer.x - self.follower.x) * self.smoothing;
        self.follower.y += (self.pointer.y - self.follower.y) * self.smoothing;
        self.follower
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_step_moves_by_smoothing_fraction() {
        let mut trail = CursorTrail::new(0.15);
        trail.move_to(100.0, 200.0);
        let follower = trail.step();
        assert!((follower.x - 15.0).abs() < 1e-9);
        assert!((follower.y - 30.0).abs() < 1e-9);
        assert_eq!(trail.pointer(), Point { x: 100.0, y: 200.0 });
    }

    #[test]
    fn follower_converges_on_pointer() {
        let mut trail = CursorTrail::new(0.15);
        trail.move_to(640.0, 360.0);
        for _ in 0..200 {
            trail.step();
        }
        let follower = trail.follower();
        assert!((follower.x - 640.0).abs() < 0.01);
        assert!((follower.y - 360.0).abs() < 0.01);
    }
}
