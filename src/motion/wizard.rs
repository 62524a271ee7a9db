//! State machine behind the contact modal.
//!
//! The wizard moves linearly through three steps. Only the first step gates
//! the transition (a purpose must be chosen); the contact fields on the last
//! step rely on the browser's own `required` handling.

use serde::Serialize;
use std::rc::Rc;
use thiserror::Error;
use yew::Reducible;

pub const PURPOSE_CHOICES: &[(&str, &str)] = &[
    ("web", "A new website"),
    ("brand", "Brand identity"),
    ("app", "A product or app"),
    ("other", "Something else"),
];

pub const SERVICE_CHOICES: &[(&str, &str)] = &[
    ("strategy", "Strategy"),
    ("design", "Design"),
    ("development", "Development"),
    ("motion", "Motion & 3D"),
    ("content", "Content"),
];

pub const BUDGET_CHOICES: &[&str] = &["< 10k", "10k – 25k", "25k – 50k", "50k+"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Purpose,
    Scope,
    Contact,
}

impl Step {
    pub const COUNT: u8 = 3;

    /// 1-indexed position.
    pub fn number(self) -> u8 {
        match self {
            Step::Purpose => 1,
            Step::Scope => 2,
            Step::Contact => 3,
        }
    }

    fn next(self) -> Self {
        match self {
            Step::Purpose => Step::Scope,
            Step::Scope | Step::Contact => Step::Contact,
        }
    }

    fn prev(self) -> Self {
        match self {
            Step::Purpose | Step::Scope => Step::Purpose,
            Step::Contact => Step::Scope,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Please tell us what you need help with before continuing.")]
    MissingPurpose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Budget,
    Name,
    Email,
    Company,
    Message,
}

/// Everything the visitor typed or picked, in the shape it is logged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub purpose: Option<String>,
    pub services: Vec<String>,
    pub budget: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Budget => &mut self.budget,
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Message => &mut self.message,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Budget => &self.budget,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    pub fn has_service(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wizard {
    step: Step,
    phase: Phase,
    form: ContactForm,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            step: Step::Purpose,
            phase: Phase::Editing,
            form: ContactForm::default(),
        }
    }
}

pub enum WizardAction {
    Advance,
    Retreat,
    SelectPurpose(String),
    ToggleService(String),
    Edit(Field, String),
    Submit,
    Reset,
}

impl Wizard {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn validate_step(&self) -> Result<(), WizardError> {
        match self.step {
            Step::Purpose if self.form.purpose.is_none() => Err(WizardError::MissingPurpose),
            _ => Ok(()),
        }
    }

    /// Moves to the next step if the current one validates.
    pub fn advance(&mut self) -> Result<Step, WizardError> {
        self.validate_step()?;
        self.step = self.step.next();
        Ok(self.step)
    }

    pub fn retreat(&mut self) -> Step {
        self.step = self.step.prev();
        self.step
    }

    pub fn select_purpose(&mut self, purpose: impl Into<String>) {
        self.form.purpose = Some(purpose.into());
    }

    pub fn toggle_service(&mut self, service: &str) {
        if let Some(pos) = self.form.services.iter().position(|s| s == service) {
            self.form.services.remove(pos);
        } else {
            self.form.services.push(service.to_string());
        }
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        *self.form.field_mut(field) = value.into();
    }

    /// Captures the collected values and flips to the success phase.
    pub fn submit(&mut self) -> ContactForm {
        self.phase = Phase::Submitted;
        self.form.clone()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn progress_percent(&self) -> f64 {
        f64::from(self.step.number()) / f64::from(Step::COUNT) * 100.0
    }

    pub fn show_back(&self) -> bool {
        self.step != Step::Purpose
    }

    pub fn show_next(&self) -> bool {
        self.step != Step::Contact
    }

    pub fn show_submit(&self) -> bool {
        self.step == Step::Contact
    }
}

impl Reducible for Wizard {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WizardAction::Advance => {
                if next.advance().is_err() {
                    return self;
                }
            }
            WizardAction::Retreat => {
                next.retreat();
            }
            WizardAction::SelectPurpose(purpose) => next.select_purpose(purpose),
            WizardAction::ToggleService(service) => next.toggle_service(&service),
            WizardAction::Edit(field, value) => next.edit(field, value),
            WizardAction::Submit => {
                next.submit();
            }
            WizardAction::Reset => next.reset(),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_requires_a_purpose() {
        let mut wizard = Wizard::default();
        assert_eq!(wizard.advance(), Err(WizardError::MissingPurpose));
        assert_eq!(wizard.step(), Step::Purpose);

        wizard.select_purpose("web");
        assert_eq!(wizard.advance(), Ok(Step::Scope));
    }

    #[test]
    fn retreat_from_first_step_is_a_no_op() {
        let mut wizard = Wizard::default();
        assert_eq!(wizard.retreat(), Step::Purpose);
        assert!(!wizard.show_back());
    }

    #[test]
    fn step_is_clamped_at_the_end() {
        let mut wizard = Wizard::default();
        wizard.select_purpose("app");
        for _ in 0..5 {
            let _ = wizard.advance();
        }
        assert_eq!(wizard.step(), Step::Contact);
        assert_eq!(wizard.step().number(), 3);
    }

    #[test]
    fn buttons_and_progress_follow_the_step() {
        let mut wizard = Wizard::default();
        assert!(wizard.show_next() && !wizard.show_submit());
        assert!((wizard.progress_percent() - 100.0 / 3.0).abs() < 1e-9);

        wizard.select_purpose("brand");
        wizard.advance().unwrap();
        assert!(wizard.show_back() && wizard.show_next() && !wizard.show_submit());

        wizard.advance().unwrap();
        assert!(wizard.show_back() && !wizard.show_next() && wizard.show_submit());
        assert_eq!(wizard.progress_percent(), 100.0);
    }

    #[test]
    fn services_toggle_in_and_out() {
        let mut wizard = Wizard::default();
        wizard.toggle_service("design");
        wizard.toggle_service("motion");
        wizard.toggle_service("design");
        assert_eq!(wizard.form().services, vec!["motion".to_string()]);
        assert!(wizard.form().has_service("motion"));
    }

    #[test]
    fn full_walkthrough_resets_after_submit() {
        let mut wizard = Wizard::default();
        wizard.select_purpose("web");
        assert_eq!(wizard.advance(), Ok(Step::Scope));
        assert_eq!(wizard.retreat(), Step::Purpose);
        assert_eq!(wizard.form().purpose.as_deref(), Some("web"));

        wizard.advance().unwrap();
        wizard.toggle_service("development");
        wizard.edit(Field::Budget, "25k – 50k");
        wizard.advance().unwrap();
        wizard.edit(Field::Name, "Ada");
        wizard.edit(Field::Email, "ada@example.com");
        wizard.edit(Field::Message, "Hello");

        let submitted = wizard.submit();
        assert_eq!(wizard.phase(), Phase::Submitted);
        assert_eq!(submitted.purpose.as_deref(), Some("web"));
        assert_eq!(submitted.services, vec!["development".to_string()]);
        assert_eq!(submitted.name, "Ada");

        wizard.reset();
        assert_eq!(wizard.step(), Step::Purpose);
        assert_eq!(wizard.phase(), Phase::Editing);
        assert_eq!(wizard.form(), &ContactForm::default());
    }

    #[test]
    fn submitted_payload_serializes_as_json() {
        let mut wizard = Wizard::default();
        wizard.select_purpose("other");
        wizard.toggle_service("content");
        let payload = serde_json::to_value(wizard.submit()).unwrap();
        assert_eq!(payload["purpose"], "other");
        assert_eq!(payload["services"][0], "content");
        assert_eq!(payload["name"], "");
    }

    #[test]
    fn reducer_ignores_blocked_advance() {
        let state = Rc::new(Wizard::default());
        let same = state.clone().reduce(WizardAction::Advance);
        assert!(Rc::ptr_eq(&state, &same));

        let state = state.reduce(WizardAction::SelectPurpose("web".into()));
        let state = state.reduce(WizardAction::Advance);
        assert_eq!(state.step(), Step::Scope);
        let state = state.reduce(WizardAction::Reset);
        assert_eq!(*state, Wizard::default());
    }
}
