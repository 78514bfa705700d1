//! Character variety section - checks for uppercase, lowercase, digits, symbols.

use secrecy::{ExposeSecret, SecretString};
use super::{tally, SectionResult};
use crate::types::Criterion;

/// Scores the character classes present in the password.
///
/// Classes are fixed ASCII ranges. Any character outside `[A-Za-z0-9]`,
/// including non-Latin letters, counts as a symbol.
///
/// # Returns
/// One point per class present, plus the classes that are missing.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_symbol = pwd.chars().any(|c| !c.is_ascii_alphanumeric());

    tally(&[
        (Criterion::Uppercase, has_upper),
        (Criterion::Lowercase, has_lower),
        (Criterion::Digit, has_digit),
        (Criterion::Symbol, has_symbol),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_missing_uppercase() {
        let pwd = SecretString::new("lowercase123!".to_string().into());
        let (points, unmet) = character_variety_section(&pwd);
        assert_eq!(points, 3);
        assert_eq!(unmet, vec![Criterion::Uppercase]);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let pwd = SecretString::new("UPPERCASE123!".to_string().into());
        let (_, unmet) = character_variety_section(&pwd);
        assert_eq!(unmet, vec![Criterion::Lowercase]);
    }

    #[test]
    fn test_variety_section_missing_digits() {
        let pwd = SecretString::new("NoNumbers!".to_string().into());
        let (_, unmet) = character_variety_section(&pwd);
        assert_eq!(unmet, vec![Criterion::Digit]);
    }

    #[test]
    fn test_variety_section_missing_symbol() {
        let pwd = SecretString::new("NoSpecial123".to_string().into());
        let (_, unmet) = character_variety_section(&pwd);
        assert_eq!(unmet, vec![Criterion::Symbol]);
    }

    #[test]
    fn test_variety_section_all_classes() {
        let pwd = SecretString::new("HasAll123!@#".to_string().into());
        assert_eq!(character_variety_section(&pwd), (4, vec![]));
    }

    #[test]
    fn test_variety_section_non_ascii_letters_are_symbols() {
        // 'É' and 'é' are letters, but not in the ASCII ranges
        let pwd = SecretString::new("Éé".to_string().into());
        let (points, unmet) = character_variety_section(&pwd);
        assert_eq!(points, 1);
        assert_eq!(
            unmet,
            vec![Criterion::Uppercase, Criterion::Lowercase, Criterion::Digit]
        );
    }

    #[test]
    fn test_variety_section_whitespace_is_symbol() {
        let pwd = SecretString::new(" ".to_string().into());
        let (points, unmet) = character_variety_section(&pwd);
        assert_eq!(points, 1);
        assert!(!unmet.contains(&Criterion::Symbol));
    }
}
