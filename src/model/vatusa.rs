//! VATUSA training record wire model.
//!
//! Records are fetched from the VATUSA training record API and never
//! persisted as-is; the sync run maps them onto local training sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A training record as returned by the VATUSA API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatusaTrainingRecord {
    /// Stable VATUSA record id; the reconciliation key.
    pub id: i64,
    /// CID of the student.
    pub student_cid: i32,
    /// CID of the instructor.
    pub instructor_cid: i32,
    /// Position worked.
    pub position: String,
    /// Location code: 0 classroom, 1 live network, 2 sweatbox.
    pub location: i32,
    /// When the session took place. The API sends `YYYY-MM-DD HH:MM:SS`
    /// without a zone; the value is defined to be UTC.
    #[serde(with = "vatusa_date")]
    pub session_date: DateTime<Utc>,
    /// Duration text, `HH:MM:SS`.
    pub duration: String,
    /// Movement count, if recorded.
    pub movements: Option<i32>,
    /// Session score.
    pub score: i32,
    /// Instructor notes.
    pub notes: String,
    /// Facility code the record belongs to.
    pub facility: String,
}

/// Serde codec for the API's zone-less UTC timestamps.
mod vatusa_date {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)?;
        Ok(naive.and_utc())
    }
}
