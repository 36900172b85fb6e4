//! Training session domain models and parameters.
//!
//! Provides the domain model for locally-owned training sessions plus the
//! parameter types used when the sync run imports or overwrites sessions from
//! VATUSA training records.

use chrono::{DateTime, Utc};

/// A training session held at this facility.
///
/// Sessions are created by local staff or imported during a sync run.
/// `vatusa_id` is the cross-reference to the authoritative VATUSA record and
/// stays `None` until the session has been reconciled.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct TrainingSession {
    /// Local session id.
    pub id: i32,
    /// CID of the student who received training.
    pub student_cid: i32,
    /// CID of the instructor who held the session.
    pub instructor_cid: i32,
    /// Position worked, e.g. `"ORD_TWR"`.
    pub position: String,
    /// Location code: 0 classroom, 1 live network, 2 sweatbox.
    pub location: i32,
    /// When the session started.
    pub start_time: DateTime<Utc>,
    /// When the session ended.
    pub end_time: DateTime<Utc>,
    /// Stored duration display, always `HH:MM`.
    pub duration: String,
    /// Number of aircraft movements handled, if recorded.
    pub movements: Option<i32>,
    /// Instructor-assigned score, if recorded.
    pub score: Option<i32>,
    /// Instructor notes.
    pub notes: Option<String>,
    /// Local milestone classification; `"UNK"` for imported sessions.
    pub milestone: String,
    /// Id of the VATUSA record this session is bound to, once reconciled.
    pub vatusa_id: Option<i64>,
    /// Whether the session exists upstream at VATUSA.
    pub submitted: bool,
    /// When the local row was created.
    pub created_at: DateTime<Utc>,
}

impl TrainingSession {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `TrainingSession` - The converted domain model
    pub fn from_entity(entity: entity::training_session::Model) -> Self {
        Self {
            id: entity.id,
            student_cid: entity.student_cid,
            instructor_cid: entity.instructor_cid,
            position: entity.position,
            location: entity.location,
            start_time: entity.start_time,
            end_time: entity.end_time,
            duration: entity.duration,
            movements: entity.movements,
            score: entity.score,
            notes: entity.notes,
            milestone: entity.milestone,
            vatusa_id: entity.vatusa_id,
            submitted: entity.submitted,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a training session.
///
/// Used by the sync run when importing a VATUSA record that has no local
/// counterpart; imported sessions arrive already bound and submitted.
#[derive(Debug, Clone)]
pub struct NewTrainingSessionParam {
    /// CID of the student.
    pub student_cid: i32,
    /// CID of the instructor.
    pub instructor_cid: i32,
    /// Position worked.
    pub position: String,
    /// Location code.
    pub location: i32,
    /// When the session started.
    pub start_time: DateTime<Utc>,
    /// When the session ended.
    pub end_time: DateTime<Utc>,
    /// Duration display text, `HH:MM`.
    pub duration: String,
    /// Movement count, if recorded.
    pub movements: Option<i32>,
    /// Session score, if recorded.
    pub score: Option<i32>,
    /// Instructor notes.
    pub notes: Option<String>,
    /// Milestone classification.
    pub milestone: String,
    /// VATUSA record id to bind the new session to.
    pub vatusa_id: Option<i64>,
    /// Whether the session exists upstream.
    pub submitted: bool,
}

/// Parameters for overwriting a session's fields from its VATUSA record.
///
/// Applied when the external notes differ materially from the local copy.
/// Only the fields VATUSA is authoritative for are overwritten; the local
/// milestone and created_at are untouched.
#[derive(Debug, Clone)]
pub struct UpdateFromVatusaParam {
    /// Id of the local session to update.
    pub id: i32,
    /// Replacement position.
    pub position: String,
    /// Replacement location code.
    pub location: i32,
    /// Replacement start time.
    pub start_time: DateTime<Utc>,
    /// Replacement end time, recomputed from the record's duration.
    pub end_time: DateTime<Utc>,
    /// Replacement duration display text, `HH:MM`.
    pub duration: String,
    /// Replacement movement count.
    pub movements: Option<i32>,
    /// Replacement score.
    pub score: Option<i32>,
    /// Replacement notes.
    pub notes: Option<String>,
}
