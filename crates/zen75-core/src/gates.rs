//! Enforcement gate decision logic.
//!
//! The gates decide whether a day's entry may be recorded. All terminal
//! conversation lives in the CLI; this module only evaluates answers:
//!
//! - **Gate 1** (state coherence): a 1-10 clarity rating below the
//!   threshold locks the entry.
//! - **Gate 2** (causality chain): attention -> action -> result, each
//!   layer non-empty and concretely worded.
//! - **Gate 3** (backward debug): an edge score below the threshold forces
//!   the result -> action -> words -> attention -> state questionnaire.
//! - **Gate 4** (daily coherence): a once-per-day yes/no check that inner
//!   state still matches the recorded actions.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Clarity ratings below this lock the entry until the state is reset.
pub const STATE_COHERENCE_THRESHOLD: u8 = 5;

/// Edge scores below this trigger the backward-debug questionnaire.
pub const BACKWARD_DEBUG_THRESHOLD: u8 = 5;

/// Phrases that mark a short answer as unanchored.
const VAGUE_PHRASES: [&str; 12] = [
    "worked on",
    "made progress",
    "did stuff",
    "tried things",
    "looked at",
    "thought about",
    "kind of",
    "sort of",
    "basically",
    "mostly",
    "some",
    "a bit",
];

/// Outcome of the state coherence gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Clarity is at or above the threshold; the entry may proceed.
    Passed,
    /// Clarity is below the threshold; reset state before acting.
    Locked,
}

/// The enforced attention -> action -> result chain (gate 2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CausalityChain {
    /// What the day's attention was on; must relate to the intention.
    pub attention: String,
    /// Concrete actions taken; must trace to the attention.
    pub action: String,
    /// The result that emerged; must trace to the actions.
    pub result: String,
}

/// Answers from the backward-debug questionnaire (gate 3).
///
/// Debug direction: result -> action -> words -> attention -> state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugTrace {
    pub bad_result: String,
    pub wrong_action: String,
    pub wrong_words: String,
    pub wrong_attention: String,
    pub root_cause_state: String,
}

/// A concrete, actionable tiny change distilled from the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub tiny_change: String,
}

/// Why a free-text answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageIssue {
    /// Fewer than three words.
    TooShort,
    /// A vague phrase with too little surrounding detail.
    Vague(&'static str),
}

/// Validate a 1-10 rating for the named field.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidValue`] when the rating is outside 1-10.
pub fn validate_rating(field: &str, rating: u8) -> Result<u8, ValidationError> {
    if (1..=10).contains(&rating) {
        Ok(rating)
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: format!("must be 1-10, got {rating}"),
        })
    }
}

/// Gate 1: evaluate a validated state clarity rating.
pub fn check_state_coherence(clarity: u8) -> GateOutcome {
    if clarity >= STATE_COHERENCE_THRESHOLD {
        GateOutcome::Passed
    } else {
        GateOutcome::Locked
    }
}

/// Gate 3 trigger: whether a validated edge score forces backward debugging.
pub fn needs_backward_debug(edge: u8) -> bool {
    edge < BACKWARD_DEBUG_THRESHOLD
}

/// Ban unanchored language.
///
/// An answer is rejected when it is under ten words and contains one of the
/// vague phrases, or when it has fewer than three words. The phrase scan runs
/// first, so a short vague answer names the offending phrase.
pub fn validate_concrete_language(text: &str) -> Result<(), LanguageIssue> {
    let word_count = text.split_whitespace().count();
    if word_count < 10 {
        let lower = text.to_lowercase();
        for phrase in VAGUE_PHRASES {
            if lower.contains(phrase) {
                return Err(LanguageIssue::Vague(phrase));
            }
        }
    }

    if word_count < 3 {
        return Err(LanguageIssue::TooShort);
    }

    Ok(())
}

impl CausalityChain {
    /// Whether every layer of the chain is present.
    pub fn is_complete(&self) -> bool {
        !self.attention.trim().is_empty()
            && !self.action.trim().is_empty()
            && !self.result.trim().is_empty()
    }
}

/// Gate 4: whether the daily coherence check applies at all.
///
/// There is nothing to check before an intention is set or any work is
/// recorded.
pub fn daily_coherence_applies(intention: Option<&str>, completed: &[String]) -> bool {
    intention.map(str::trim).is_some_and(|i| !i.is_empty()) && !completed.is_empty()
}
