//! Password scoring sections
//!
//! Each section scores one aspect of the password independently.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

use crate::types::Criterion;

/// Result type for section scoring functions.
/// - `.0` - Points earned by the section
/// - `.1` - Criteria the section left unmet
pub type SectionResult = (u8, Vec<Criterion>);

/// Tallies a list of checks into a [`SectionResult`].
pub(crate) fn tally(checks: &[(Criterion, bool)]) -> SectionResult {
    let mut points = 0;
    let mut unmet = Vec::new();
    for &(criterion, met) in checks {
        if met {
            points += 1;
        } else {
            unmet.push(criterion);
        }
    }
    (points, unmet)
}
