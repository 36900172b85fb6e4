//! Two-way reconciliation of local training sessions against VATUSA.
//!
//! A sync run merges the locally-owned session set with the records VATUSA
//! holds for this facility: unreconciled local sessions are bound to their
//! unique match, unmatched records are imported, and stale local content is
//! overwritten when the upstream notes differ materially. Sessions are never
//! deleted by a run.

pub mod matcher;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::{
    data::training_session::TrainingSessionRepository,
    error::{sync::SyncError, AppError},
    model::{
        training_session::{NewTrainingSessionParam, TrainingSession, UpdateFromVatusaParam},
        vatusa::VatusaTrainingRecord,
    },
    util::duration::parse_duration,
    vatusa::VatusaClient,
};

/// Milestone given to imported sessions until staff classify them.
const IMPORTED_MILESTONE: &str = "UNK";

/// Work performed by one sync run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    /// Local sessions newly bound to their VATUSA record.
    pub synced: usize,
    /// Local sessions created from unmatched VATUSA records.
    pub added: usize,
    /// Local sessions overwritten with changed VATUSA content.
    pub updated: usize,
}

/// Outcome of resolving one in-scope record against the local store.
enum Resolution {
    Added,
    Updated,
    Unchanged,
}

/// Service reconciling the local session store with VATUSA training records.
///
/// The API client is injected so tests can substitute stubs; production wires
/// in `HttpVatusaClient` from `main`.
pub struct VatusaSyncService<'a, C: VatusaClient> {
    db: &'a DatabaseConnection,
    client: &'a C,
    facility_code: String,
}

impl<'a, C: VatusaClient> VatusaSyncService<'a, C> {
    /// Creates a new VatusaSyncService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `client` - VATUSA API client
    /// - `facility_code` - This facility's code; records from other
    ///   facilities are ignored
    ///
    /// # Returns
    /// - `VatusaSyncService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        client: &'a C,
        facility_code: impl Into<String>,
    ) -> Self {
        Self {
            db,
            client,
            facility_code: facility_code.into(),
        }
    }

    /// Runs one reconciliation pass.
    ///
    /// Loads the full local session set, fetches the upstream records, and
    /// filters them to this facility. If either side is empty the run stops
    /// with a zero-work summary. Otherwise unreconciled sessions are matched
    /// and bound first, then every in-scope record is resolved against the
    /// store (re-queried per record so bindings from this pass are observed):
    /// unknown records are imported, known ones are overwritten when their
    /// notes differ materially.
    ///
    /// A fetch failure aborts the run before any local mutation. Failures on
    /// individual records are logged with the record identity and skipped;
    /// the run continues.
    ///
    /// # Returns
    /// - `Ok(SyncSummary)` - Counts of sessions bound, imported, and updated
    /// - `Err(AppError)` - Database load or API fetch failure
    pub async fn run(&self) -> Result<SyncSummary, AppError> {
        let session_repo = TrainingSessionRepository::new(self.db);

        let sessions = session_repo.get_all().await?;
        let records = self.client.fetch_training_records().await?;

        let in_scope: Vec<VatusaTrainingRecord> = records
            .into_iter()
            .filter(|record| record.facility == self.facility_code)
            .collect();

        let mut summary = SyncSummary::default();

        if sessions.is_empty() || in_scope.is_empty() {
            tracing::info!(
                "Nothing to reconcile for {}: {} local sessions, {} in-scope records",
                self.facility_code,
                sessions.len(),
                in_scope.len()
            );
            return Ok(summary);
        }

        // Bind unreconciled sessions before importing, so the resolver sees
        // the cross-references established in this pass.
        for session in sessions.iter().filter(|s| s.vatusa_id.is_none()) {
            let record = match matcher::find_unique_match(session, &in_scope) {
                Some(record) => record,
                None => continue,
            };

            match self.bind_record(session, record).await {
                Ok(true) => summary.synced += 1,
                Ok(false) => {}
                Err(e) => {
                    tracing::error!(
                        "Failed to bind session {} to VATUSA record {}: {}",
                        session.id,
                        record.id,
                        e
                    );
                }
            }
        }

        for record in &in_scope {
            match self.resolve_record(record).await {
                Ok(Resolution::Added) => summary.added += 1,
                Ok(Resolution::Updated) => summary.updated += 1,
                Ok(Resolution::Unchanged) => {}
                Err(e) => {
                    tracing::error!("Failed to resolve VATUSA record {}: {}", record.id, e);
                }
            }
        }

        tracing::info!(
            "Training record sync for {} complete: {} synced, {} added, {} updated",
            self.facility_code,
            summary.synced,
            summary.added,
            summary.updated
        );

        Ok(summary)
    }

    /// Binds a session to its matched VATUSA record.
    ///
    /// Sets the cross-reference and marks the session submitted. Idempotent:
    /// a session already bound to the same record is a no-op. A session bound
    /// to a *different* record is a consistency violation; the existing
    /// binding is never overwritten.
    ///
    /// # Arguments
    /// - `session` - The local session to bind
    /// - `record` - The matched VATUSA record
    ///
    /// # Returns
    /// - `Ok(true)` - Binding persisted
    /// - `Ok(false)` - Already bound to this record; nothing written
    /// - `Err(AppError::SyncErr(VatusaIdMismatch))` - Bound to a different record
    /// - `Err(AppError::DbErr)` - Persistence failure; the session stays
    ///   unbound for the next run
    pub async fn bind_record(
        &self,
        session: &TrainingSession,
        record: &VatusaTrainingRecord,
    ) -> Result<bool, AppError> {
        let session_repo = TrainingSessionRepository::new(self.db);

        match session.vatusa_id {
            Some(bound) if bound == record.id => Ok(false),
            Some(bound) => Err(SyncError::VatusaIdMismatch {
                session_id: session.id,
                bound,
                attempted: record.id,
            }
            .into()),
            None => {
                session_repo.bind_vatusa_id(session.id, record.id).await?;

                tracing::debug!("Bound session {} to VATUSA record {}", session.id, record.id);

                Ok(true)
            }
        }
    }

    /// Resolves one in-scope record against the local store.
    ///
    /// Re-queries by cross-reference so bindings written earlier in the pass
    /// are observed. Unknown records are imported as submitted sessions with
    /// the placeholder milestone; known records overwrite the local copy only
    /// when their notes fall below the similarity threshold.
    async fn resolve_record(&self, record: &VatusaTrainingRecord) -> Result<Resolution, AppError> {
        let session_repo = TrainingSessionRepository::new(self.db);

        let session = match session_repo.find_by_vatusa_id(record.id).await? {
            Some(session) => session,
            None => {
                let duration = parse_duration(&record.duration)?;

                session_repo
                    .create(NewTrainingSessionParam {
                        student_cid: record.student_cid,
                        instructor_cid: record.instructor_cid,
                        position: record.position.clone(),
                        location: record.location,
                        start_time: record.session_date,
                        end_time: record.session_date + duration.offset(),
                        duration: duration.to_string(),
                        movements: record.movements,
                        score: Some(record.score),
                        notes: Some(record.notes.clone()),
                        milestone: IMPORTED_MILESTONE.to_string(),
                        vatusa_id: Some(record.id),
                        submitted: true,
                    })
                    .await?;

                return Ok(Resolution::Added);
            }
        };

        let local_notes = session.notes.as_deref().unwrap_or("");
        if matcher::notes_similarity(&record.notes, local_notes)
            >= matcher::NOTES_SIMILARITY_THRESHOLD
        {
            return Ok(Resolution::Unchanged);
        }

        let duration = parse_duration(&record.duration)?;

        session_repo
            .update_from_vatusa(UpdateFromVatusaParam {
                id: session.id,
                position: record.position.clone(),
                location: record.location,
                start_time: record.session_date,
                end_time: record.session_date + duration.offset(),
                duration: duration.to_string(),
                movements: record.movements,
                score: Some(record.score),
                notes: Some(record.notes.clone()),
            })
            .await?;

        tracing::debug!(
            "Overwrote session {} from VATUSA record {}",
            session.id,
            record.id
        );

        Ok(Resolution::Updated)
    }
}
