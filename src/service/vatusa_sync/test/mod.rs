use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory::training_session::TrainingSessionFactory};

use crate::{
    data::training_session::TrainingSessionRepository,
    error::{sync::SyncError, vatusa::VatusaError, AppError},
    model::{training_session::TrainingSession, vatusa::VatusaTrainingRecord},
    service::vatusa_sync::{SyncSummary, VatusaSyncService},
    vatusa::VatusaClient,
};


const FACILITY: &str = "ZAU";

const STUDENT_CID: i32 = 1300042;
const INSTRUCTOR_CID: i32 = 999_999;

/// Stub VATUSA client serving a fixed record set, or failing outright.
struct StubVatusaClient {
    records: Vec<VatusaTrainingRecord>,
    fail: bool,
}

impl StubVatusaClient {
    fn returning(records: Vec<VatusaTrainingRecord>) -> Self {
        Self {
            records,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            records: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl VatusaClient for StubVatusaClient {
    async fn fetch_training_records(&self) -> Result<Vec<VatusaTrainingRecord>, VatusaError> {
        if self.fail {
            return Err(VatusaError::Api {
                status: 500,
                message: "internal server error".to_string(),
            });
        }

        Ok(self.records.clone())
    }
}

/// Start time shared by the record fixtures and their matching sessions.
fn session_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 18, 0, 0).unwrap()
}

/// An in-scope record for this facility with fixed identity fields.
///
/// Tests that need a divergent field (foreign facility, other duration, ...)
/// mutate the returned struct.
fn record(id: i64, notes: &str) -> VatusaTrainingRecord {
    VatusaTrainingRecord {
        id,
        student_cid: STUDENT_CID,
        instructor_cid: INSTRUCTOR_CID,
        position: "ORD_TWR".to_string(),
        location: 1,
        session_date: session_start(),
        duration: "01:00:00".to_string(),
        movements: Some(12),
        score: 4,
        notes: notes.to_string(),
        facility: FACILITY.to_string(),
    }
}

/// Inserts an unreconciled session whose identity fields line up with the
/// record fixtures.
async fn seed_matching_session(
    db: &DatabaseConnection,
    notes: &str,
) -> Result<entity::training_session::Model, DbErr> {
    TrainingSessionFactory::new(db)
        .student_cid(STUDENT_CID)
        .instructor_cid(INSTRUCTOR_CID)
        .position("ORD_TWR")
        .location(1)
        .start_time(session_start())
        .end_time(session_start() + chrono::Duration::hours(1))
        .notes(Some(notes.to_string()))
        .build()
        .await
}
