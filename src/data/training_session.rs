//! Training session data repository for database operations.
//!
//! This module provides the `TrainingSessionRepository` for managing training session
//! records in the database. It handles session creation, cross-reference binding, and
//! the field overwrites applied during a sync run, with proper conversion between
//! entity models and domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::training_session::{
    NewTrainingSessionParam, TrainingSession, UpdateFromVatusaParam,
};

/// Repository providing database operations for training session management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, and updating training session records.
pub struct TrainingSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainingSessionRepository<'a> {
    /// Creates a new TrainingSessionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TrainingSessionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all training sessions.
    ///
    /// Returns every session in the local store, ordered by id. The sync run
    /// loads the full set once at the start of a pass.
    ///
    /// # Returns
    /// - `Ok(Vec<TrainingSession>)` - All sessions (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<TrainingSession>, DbErr> {
        let entities = entity::prelude::TrainingSession::find()
            .order_by_asc(entity::training_session::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(TrainingSession::from_entity)
            .collect())
    }

    /// Finds the session bound to a VATUSA record.
    ///
    /// The `vatusa_id` column carries a unique index, so at most one session
    /// can be bound to any given record.
    ///
    /// # Arguments
    /// - `vatusa_id` - VATUSA training record id
    ///
    /// # Returns
    /// - `Ok(Some(TrainingSession))` - The bound session
    /// - `Ok(None)` - No session is bound to that record
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_vatusa_id(
        &self,
        vatusa_id: i64,
    ) -> Result<Option<TrainingSession>, DbErr> {
        let entity = entity::prelude::TrainingSession::find()
            .filter(entity::training_session::Column::VatusaId.eq(vatusa_id))
            .one(self.db)
            .await?;

        Ok(entity.map(TrainingSession::from_entity))
    }

    /// Binds a session to its VATUSA record.
    ///
    /// Sets the cross-reference id and marks the session submitted. Callers
    /// are responsible for verifying the session is not already bound to a
    /// different record before persisting.
    ///
    /// # Arguments
    /// - `session_id` - Id of the local session
    /// - `vatusa_id` - VATUSA record id to bind
    ///
    /// # Returns
    /// - `Ok(())` - Binding persisted (or no matching session found)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn bind_vatusa_id(&self, session_id: i32, vatusa_id: i64) -> Result<(), DbErr> {
        entity::prelude::TrainingSession::update_many()
            .filter(entity::training_session::Column::Id.eq(session_id))
            .col_expr(
                entity::training_session::Column::VatusaId,
                sea_orm::sea_query::Expr::value(vatusa_id),
            )
            .col_expr(
                entity::training_session::Column::Submitted,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Creates a new training session.
    ///
    /// Inserts a session with the provided fields. Used by the sync run to
    /// import VATUSA records that have no local counterpart.
    ///
    /// # Arguments
    /// - `param` - Create parameters for the new session
    ///
    /// # Returns
    /// - `Ok(TrainingSession)` - The created session with generated id
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: NewTrainingSessionParam) -> Result<TrainingSession, DbErr> {
        let entity = entity::training_session::ActiveModel {
            student_cid: ActiveValue::Set(param.student_cid),
            instructor_cid: ActiveValue::Set(param.instructor_cid),
            position: ActiveValue::Set(param.position),
            location: ActiveValue::Set(param.location),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            duration: ActiveValue::Set(param.duration),
            movements: ActiveValue::Set(param.movements),
            score: ActiveValue::Set(param.score),
            notes: ActiveValue::Set(param.notes),
            milestone: ActiveValue::Set(param.milestone),
            vatusa_id: ActiveValue::Set(param.vatusa_id),
            submitted: ActiveValue::Set(param.submitted),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TrainingSession::from_entity(entity))
    }

    /// Overwrites a session's fields from its VATUSA record.
    ///
    /// Applies the replacement values for the fields VATUSA is authoritative
    /// for. The session's milestone, cross-reference, and submitted flag are
    /// left untouched.
    ///
    /// # Arguments
    /// - `param` - Update parameters containing the session id and replacement values
    ///
    /// # Returns
    /// - `Ok(TrainingSession)` - The updated session
    /// - `Err(DbErr::RecordNotFound)` - No session exists with the specified id
    /// - `Err(DbErr)` - Other database error during update operation
    pub async fn update_from_vatusa(
        &self,
        param: UpdateFromVatusaParam,
    ) -> Result<TrainingSession, DbErr> {
        let session = entity::prelude::TrainingSession::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Training session with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::training_session::ActiveModel = session.into();
        active_model.position = ActiveValue::Set(param.position);
        active_model.location = ActiveValue::Set(param.location);
        active_model.start_time = ActiveValue::Set(param.start_time);
        active_model.end_time = ActiveValue::Set(param.end_time);
        active_model.duration = ActiveValue::Set(param.duration);
        active_model.movements = ActiveValue::Set(param.movements);
        active_model.score = ActiveValue::Set(param.score);
        active_model.notes = ActiveValue::Set(param.notes);

        let entity = active_model.update(self.db).await?;

        Ok(TrainingSession::from_entity(entity))
    }
}
