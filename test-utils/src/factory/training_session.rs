//! Training session factory for creating test session entities.
//!
//! This module provides factory methods for creating training session entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test training sessions with customizable fields.
///
/// Provides a builder pattern for creating session entities with default
/// values that can be overridden as needed for specific test scenarios.
/// Sessions default to the unreconciled state (`vatusa_id` unset).
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::training_session::TrainingSessionFactory;
///
/// let session = TrainingSessionFactory::new(&db)
///     .student_cid(1234567)
///     .notes(Some("Solid pattern work".to_string()))
///     .vatusa_id(Some(998877))
///     .build()
///     .await?;
/// ```
pub struct TrainingSessionFactory<'a> {
    db: &'a DatabaseConnection,
    student_cid: i32,
    instructor_cid: i32,
    position: String,
    location: i32,
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
    duration: String,
    movements: Option<i32>,
    score: Option<i32>,
    notes: Option<String>,
    milestone: String,
    vatusa_id: Option<i64>,
    submitted: bool,
}

impl<'a> TrainingSessionFactory<'a> {
    /// Creates a new TrainingSessionFactory with default values.
    ///
    /// Defaults:
    /// - student_cid: unique value derived from the test ID counter
    /// - instructor_cid: `999999`
    /// - position: `"ORD_TWR"`
    /// - location: `1` (live network)
    /// - start_time: 2 hours ago
    /// - end_time: 1 hour after start_time
    /// - duration: `"01:00"`
    /// - movements: `Some(12)`
    /// - score: `Some(3)`
    /// - notes: `Some("Session {id} notes")` where id is auto-incremented
    /// - milestone: `"T1"`
    /// - vatusa_id: `None` (not yet reconciled)
    /// - submitted: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TrainingSessionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let start_time = Utc::now() - chrono::Duration::hours(2);
        Self {
            db,
            student_cid: 1_000_000 + id as i32,
            instructor_cid: 999_999,
            position: "ORD_TWR".to_string(),
            location: 1,
            start_time,
            end_time: start_time + chrono::Duration::hours(1),
            duration: "01:00".to_string(),
            movements: Some(12),
            score: Some(3),
            notes: Some(format!("Session {} notes", id)),
            milestone: "T1".to_string(),
            vatusa_id: None,
            submitted: false,
        }
    }

    /// Sets the student CID.
    ///
    /// # Arguments
    /// - `student_cid` - Certificate ID of the student
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn student_cid(mut self, student_cid: i32) -> Self {
        self.student_cid = student_cid;
        self
    }

    /// Sets the instructor CID.
    ///
    /// # Arguments
    /// - `instructor_cid` - Certificate ID of the instructor
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn instructor_cid(mut self, instructor_cid: i32) -> Self {
        self.instructor_cid = instructor_cid;
        self
    }

    /// Sets the position worked during the session.
    ///
    /// # Arguments
    /// - `position` - Position callsign, e.g. `"ORD_TWR"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    /// Sets the session location code.
    ///
    /// # Arguments
    /// - `location` - Location code (0 classroom, 1 live network, 2 sweatbox)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn location(mut self, location: i32) -> Self {
        self.location = location;
        self
    }

    /// Sets the session start time.
    ///
    /// # Arguments
    /// - `start_time` - UTC timestamp the session started at
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn start_time(mut self, start_time: chrono::DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the session end time.
    ///
    /// # Arguments
    /// - `end_time` - UTC timestamp the session ended at
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn end_time(mut self, end_time: chrono::DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    /// Sets the stored duration display text.
    ///
    /// # Arguments
    /// - `duration` - Duration text in `HH:MM` form
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Sets the movement count.
    ///
    /// # Arguments
    /// - `movements` - Optional number of aircraft movements handled
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn movements(mut self, movements: Option<i32>) -> Self {
        self.movements = movements;
        self
    }

    /// Sets the session score.
    ///
    /// # Arguments
    /// - `score` - Optional instructor-assigned score
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn score(mut self, score: Option<i32>) -> Self {
        self.score = score;
        self
    }

    /// Sets the session notes.
    ///
    /// # Arguments
    /// - `notes` - Optional instructor notes
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Sets the milestone classification.
    ///
    /// # Arguments
    /// - `milestone` - Local milestone code
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn milestone(mut self, milestone: impl Into<String>) -> Self {
        self.milestone = milestone.into();
        self
    }

    /// Sets the bound VATUSA record id.
    ///
    /// # Arguments
    /// - `vatusa_id` - Optional VATUSA training record id this session is bound to
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn vatusa_id(mut self, vatusa_id: Option<i64>) -> Self {
        self.vatusa_id = vatusa_id;
        self
    }

    /// Sets whether the session has been submitted upstream.
    ///
    /// # Arguments
    /// - `submitted` - Whether the session was pushed to VATUSA
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn submitted(mut self, submitted: bool) -> Self {
        self.submitted = submitted;
        self
    }

    /// Builds and inserts the training session entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::training_session::Model)` - Created session entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::training_session::Model, DbErr> {
        entity::training_session::ActiveModel {
            id: ActiveValue::NotSet,
            student_cid: ActiveValue::Set(self.student_cid),
            instructor_cid: ActiveValue::Set(self.instructor_cid),
            position: ActiveValue::Set(self.position),
            location: ActiveValue::Set(self.location),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            duration: ActiveValue::Set(self.duration),
            movements: ActiveValue::Set(self.movements),
            score: ActiveValue::Set(self.score),
            notes: ActiveValue::Set(self.notes),
            milestone: ActiveValue::Set(self.milestone),
            vatusa_id: ActiveValue::Set(self.vatusa_id),
            submitted: ActiveValue::Set(self.submitted),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a training session with default values.
///
/// Shorthand for `TrainingSessionFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::training_session::Model)` - Created session entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let session = create_training_session(&db).await?;
/// ```
pub async fn create_training_session(
    db: &DatabaseConnection,
) -> Result<entity::training_session::Model, DbErr> {
    TrainingSessionFactory::new(db).build().await
}
