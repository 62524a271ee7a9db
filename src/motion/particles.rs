use std::rc::Rc;
use yew::Reducible;

const DRIFT_X: f64 = 0.05;
const DRIFT_Y: f64 = 0.02;
const WAVE_RATE: f64 = 0.0005;

// rem_euclid can round tiny negatives up to exactly 100.0
fn wrap(percent: f64) -> f64 {
    let wrapped = percent.rem_euclid(100.0);
    if wrapped >= 100.0 {
        0.0
    } else {
        wrapped
    }
}

/// One decorative dot. Positions are percentages of the field.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub opacity: f64,
}

impl Particle {
    /// `random` yields uniform samples in `[0, 1)`.
    pub fn spawn(random: &mut impl FnMut() -> f64) -> Self {
        Self {
            x: random() * 100.0,
            y: random() * 100.0,
            delay_s: random() * 25.0,
            duration_s: 20.0 + random() * 15.0,
            opacity: 0.3 + random() * 0.4,
        }
    }

    pub fn nudge(&mut self, now_ms: f64) {
        self.x = wrap(self.x + DRIFT_X);
        self.y = wrap(self.y + (now_ms * WAVE_RATE).sin() * DRIFT_Y);
    }

    pub fn style(&self, hidden: bool) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; animation-delay: {:.2}s; animation-duration: {:.2}s; opacity: {:.2}; display: {};",
            self.x,
            self.y,
            self.delay_s,
            self.duration_s,
            self.opacity,
            if hidden { "none" } else { "block" },
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
    reduced: bool,
}

pub enum FieldAction {
    Nudge(f64),
    Reduce,
    Restore,
}

impl ParticleField {
    pub fn new(count: usize, mut random: impl FnMut() -> f64) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::spawn(&mut random)).collect(),
            reduced: false,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_reduced(&self) -> bool {
        self.reduced
    }

    /// Reduced fields stay still.
    pub fn nudge(&mut self, now_ms: f64) {
        if self.reduced {
            return;
        }
        for particle in &mut self.particles {
            particle.nudge(now_ms);
        }
    }

    pub fn reduce_motion(&mut self) {
        self.reduced = true;
    }

    pub fn restore(&mut self) {
        self.reduced = false;
    }
}

impl Reducible for ParticleField {
    type Action = FieldAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FieldAction::Nudge(_) if self.reduced => self,
            FieldAction::Reduce if self.reduced => self,
            FieldAction::Restore if !self.reduced => self,
            action => {
                let mut next = (*self).clone();
                match action {
                    FieldAction::Nudge(now_ms) => next.nudge(now_ms),
                    FieldAction::Reduce => next.reduce_motion(),
                    FieldAction::Restore => next.restore(),
                }
                next.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn spawn_maps_samples_into_ranges() {
        let particle = Particle::spawn(&mut sequence(&[0.5, 0.25, 0.0, 0.999, 0.5]));
        assert_eq!(particle.x, 50.0);
        assert_eq!(particle.y, 25.0);
        assert_eq!(particle.delay_s, 0.0);
        assert!(particle.duration_s < 35.0 && particle.duration_s > 34.9);
        assert!((particle.opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn nudge_wraps_horizontally() {
        let mut particle = Particle::spawn(&mut sequence(&[0.9999, 0.5, 0.0, 0.0, 0.0]));
        particle.nudge(0.0);
        assert!(particle.x < 0.1);
        assert_eq!(particle.y, 50.0);
    }

    #[test]
    fn coordinates_stay_in_range() {
        let mut field = ParticleField::new(60, sequence(&[0.0, 0.999, 0.3, 0.7, 0.1, 0.9]));
        for tick in 0..5_000 {
            field.nudge(f64::from(tick) * 100.0);
        }
        for particle in field.particles() {
            assert!((0.0..100.0).contains(&particle.x));
            assert!((0.0..100.0).contains(&particle.y));
        }
    }

    #[test]
    fn reduced_field_does_not_move() {
        let mut field = ParticleField::new(3, sequence(&[0.2, 0.4, 0.6]));
        let before = field.particles().to_vec();
        field.reduce_motion();
        field.nudge(1234.0);
        assert_eq!(field.particles(), before.as_slice());

        field.restore();
        field.nudge(1234.0);
        assert_ne!(field.particles(), before.as_slice());
    }

    #[test]
    fn hidden_style_sets_display_none() {
        let field = ParticleField::new(1, sequence(&[0.5]));
        assert!(field.particles()[0].style(true).contains("display: none"));
        assert!(field.particles()[0].style(false).contains("display: block"));
    }
}
