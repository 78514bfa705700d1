//! Password form model
//!
//! Tracks the password and confirmation fields of a sign-up form and turns
//! input events into meter and confirmation updates. A field that is not
//! present on the page makes its handler a no-op.

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::assess_password_strength;
use crate::types::StrengthAssessment;

const METER_CLASS: &str = "password-strength-meter";
const TEXT_PREFIX: &str = "Password strength: ";

/// Rendered state of the strength meter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterView {
    /// Full class attribute for the meter container.
    pub class_name: String,
    /// Text shown below the meter.
    pub text: String,
}

impl From<&StrengthAssessment> for MeterView {
    fn from(assessment: &StrengthAssessment) -> Self {
        Self {
            class_name: format!("{} strength-{}", METER_CLASS, assessment.level.css_modifier()),
            text: format!("{}{}", TEXT_PREFIX, assessment.label),
        }
    }
}

/// Visual state of the confirmation field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationState {
    Valid,
    Invalid,
}

impl ConfirmationState {
    pub fn compare(password: &SecretString, confirmation: &SecretString) -> Self {
        if password.expose_secret() == confirmation.expose_secret() {
            ConfirmationState::Valid
        } else {
            ConfirmationState::Invalid
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ConfirmationState::Valid => "is-valid",
            ConfirmationState::Invalid => "is-invalid",
        }
    }
}

/// Password and confirmation fields of a single form.
#[derive(Debug)]
pub struct PasswordForm {
    password: Option<SecretString>,
    has_confirmation: bool,
}

impl PasswordForm {
    /// Creates a form model. Each flag says whether that field exists on
    /// the page.
    pub fn new(has_password: bool, has_confirmation: bool) -> Self {
        Self {
            password: has_password.then(|| SecretString::new(String::new().into())),
            has_confirmation,
        }
    }

    pub fn has_password_field(&self) -> bool {
        self.password.is_some()
    }

    pub fn has_confirmation_field(&self) -> bool {
        self.has_confirmation
    }

    /// Handles a change to the password field.
    ///
    /// Returns `None` when the form has no password field.
    pub fn on_password_input(&mut self, value: SecretString) -> Option<MeterView> {
        let slot = self.password.as_mut()?;
        let assessment = assess_password_strength(&value);
        *slot = value;
        Some(MeterView::from(&assessment))
    }

    /// Handles a change to the confirmation field.
    ///
    /// Returns `None` unless both fields are present.
    pub fn on_confirmation_input(&self, value: &SecretString) -> Option<ConfirmationState> {
        if !self.has_confirmation {
            return None;
        }
        let password = self.password.as_ref()?;
        Some(ConfirmationState::compare(password, value))
    }
}
