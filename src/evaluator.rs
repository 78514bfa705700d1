//! Password strength evaluator - main scoring logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
use crate::config::MeterConfig;
use crate::sections::{character_variety_section, length_section, SectionResult};
use crate::types::{StrengthAssessment, StrengthScore};

/// Evaluates password strength.
///
/// Every input is accepted. The result depends only on `password`.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthAssessment` with score, level, label and unmet criteria.
pub fn assess_password_strength(password: &SecretString) -> StrengthAssessment {
    let sections: [(&str, fn(&SecretString) -> SectionResult); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    let mut points = 0u8;
    let mut unmet = Vec::new();
    for (_section_name, section_fn) in sections {
        let (earned, missed) = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!("section {} earned {} point(s)", _section_name, earned);

        points += earned;
        unmet.extend(missed);
    }

    StrengthAssessment::new(StrengthScore::new(points), unmet)
}

/// Async version that waits for the debounce delay, then sends the
/// assessment via channel.
///
/// Returns without sending if `token` is cancelled before the delay
/// elapses, which is how a newer keystroke supersedes this one.
#[cfg(feature = "async")]
pub async fn assess_password_strength_tx(
    password: &SecretString,
    config: &MeterConfig,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthAssessment>,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(config.debounce) => {}
    }

    let assessment = assess_password_strength(password);

    #[cfg(feature = "tracing")]
    tracing::debug!("password assessed as {} ({})", assessment.level, assessment.score);

    if let Err(_e) = tx.send(assessment).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength assessment: {}", _e);
    }
}
