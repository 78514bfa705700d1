//! Password strength meter library
//!
//! This library scores candidate passwords against a fixed six-point
//! heuristic and models the strength meter and confirmation check of a
//! password form.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `STRENGTH_METER_DEBOUNCE_MS`: Debounce delay for async evaluation
//!   (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use strength_meter::{assess_password_strength, StrengthLevel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefghij12!".to_string().into());
//! let assessment = assess_password_strength(&password);
//!
//! assert_eq!(assessment.score.value(), 6);
//! assert_eq!(assessment.level, StrengthLevel::VeryStrong);
//! assert_eq!(assessment.label, "Very Strong");
//! ```

// Internal modules
mod config;
mod evaluator;
mod form;
mod sections;
mod types;

// Public API
pub use config::{ConfigError, MeterConfig, DEBOUNCE_ENV};
pub use evaluator::assess_password_strength;
pub use form::{ConfirmationState, MeterView, PasswordForm};
pub use sections::{character_variety_section, length_section, SectionResult};
pub use types::{Criterion, StrengthAssessment, StrengthLevel, StrengthScore};

#[cfg(feature = "async")]
pub use evaluator::assess_password_strength_tx;
