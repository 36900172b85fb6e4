//! Candidate matching for unreconciled training sessions.
//!
//! Pure functions; no database access. A local session lacking a VATUSA
//! cross-reference is matched against the in-scope record set by identity
//! fields plus notes similarity. Ambiguity is never auto-resolved: anything
//! other than exactly one candidate leaves the session unreconciled.

use crate::model::{training_session::TrainingSession, vatusa::VatusaTrainingRecord};

/// Notes similarity at or above this value counts as the same session.
///
/// Shared by the matcher and the update resolver so "same notes" means one
/// thing everywhere.
pub const NOTES_SIMILARITY_THRESHOLD: f64 = 0.90;

/// Similarity of two notes texts in `[0.0, 1.0]`.
///
/// Normalized Levenshtein over trimmed inputs, so leading and trailing
/// whitespace never affects the score.
///
/// # Arguments
/// - `external` - Notes text from the VATUSA record
/// - `local` - Notes text from the local session
///
/// # Returns
/// - `f64` - 1.0 for identical trimmed texts, 0.0 for completely different
pub fn notes_similarity(external: &str, local: &str) -> f64 {
    strsim::normalized_levenshtein(external.trim(), local.trim())
}

/// Whether a record is a match candidate for a session.
///
/// All identity fields must hold: CIDs field-for-field (student and
/// instructor are not interchangeable), position, location, and the session
/// date equal to the local start time at whole-second precision. On top of
/// that the local notes must be present, non-empty, and similar to the
/// record's notes at or above the threshold.
///
/// # Arguments
/// - `session` - Local session lacking a cross-reference
/// - `record` - In-scope VATUSA record
///
/// # Returns
/// - `bool` - Whether the record is a candidate for this session
pub fn is_candidate(session: &TrainingSession, record: &VatusaTrainingRecord) -> bool {
    let notes = match session.notes.as_deref() {
        Some(notes) if !notes.trim().is_empty() => notes,
        _ => return false,
    };

    session.student_cid == record.student_cid
        && session.instructor_cid == record.instructor_cid
        && session.position == record.position
        && session.location == record.location
        && session.start_time.timestamp() == record.session_date.timestamp()
        && notes_similarity(&record.notes, notes) >= NOTES_SIMILARITY_THRESHOLD
}

/// Finds the unique record matching a session, if any.
///
/// # Arguments
/// - `session` - Local session lacking a cross-reference
/// - `records` - The in-scope record set
///
/// # Returns
/// - `Some(&VatusaTrainingRecord)` - Exactly one candidate exists
/// - `None` - Zero candidates, or two or more (ambiguous; deferred)
pub fn find_unique_match<'a>(
    session: &TrainingSession,
    records: &'a [VatusaTrainingRecord],
) -> Option<&'a VatusaTrainingRecord> {
    let mut candidates = records.iter().filter(|record| is_candidate(session, record));

    let candidate = candidates.next()?;
    if candidates.next().is_some() {
        return None;
    }

    Some(candidate)
}
