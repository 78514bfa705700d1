//! Length section - awards points for minimum and extended length.

use secrecy::{ExposeSecret, SecretString};
use super::{tally, SectionResult};
use crate::types::Criterion;

const MIN_LENGTH: usize = 8;
const EXTENDED_LENGTH: usize = 12;

/// Scores the password length.
///
/// Length is counted in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice.
///
/// # Returns
/// One point per threshold reached, plus the thresholds that were missed.
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = password.expose_secret().encode_utf16().count();
    tally(&[
        (Criterion::MinLength, len >= MIN_LENGTH),
        (Criterion::ExtendedLength, len >= EXTENDED_LENGTH),
    ])
}
