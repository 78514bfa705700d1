//! Value types produced by the evaluator.

use std::fmt;

/// Number of heuristic criteria a password can satisfy.
pub(crate) const CRITERIA_COUNT: u8 = 6;

/// Accumulated heuristic score, always within `0..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MAX: u8 = CRITERIA_COUNT;

    /// Builds a score, clamping anything above [`StrengthScore::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn level(&self) -> StrengthLevel {
        match self.0 {
            0..=2 => StrengthLevel::Weak,
            3..=4 => StrengthLevel::Medium,
            5 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Ordinal strength category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Class modifier appended to `strength-` on the meter element.
    pub fn css_modifier(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
            StrengthLevel::VeryStrong => "very-strong",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single heuristic check. Declaration order is the order in which
/// unmet criteria are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Criterion {
    MinLength,
    ExtendedLength,
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl Criterion {
    pub fn description(&self) -> &'static str {
        match self {
            Criterion::MinLength => "at least 8 characters",
            Criterion::ExtendedLength => "at least 12 characters",
            Criterion::Uppercase => "an uppercase letter",
            Criterion::Lowercase => "a lowercase letter",
            Criterion::Digit => "a digit",
            Criterion::Symbol => "a symbol",
        }
    }
}

/// Result of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthAssessment {
    pub score: StrengthScore,
    pub level: StrengthLevel,
    pub label: &'static str,
    /// Criteria the password did not satisfy.
    pub unmet: Vec<Criterion>,
}

impl StrengthAssessment {
    pub(crate) fn new(score: StrengthScore, unmet: Vec<Criterion>) -> Self {
        let level = score.level();
        Self {
            score,
            level,
            label: level.label(),
            unmet,
        }
    }
}
