use thiserror::Error;

/// Consistency violations detected while reconciling training records.
#[derive(Error, Debug)]
pub enum SyncError {
    /// A session already cross-referenced to one VATUSA record was matched
    /// against a different one.
    ///
    /// An established cross-reference is never silently overwritten. The
    /// conflicting record is reported and the session keeps its existing
    /// binding.
    #[error(
        "Training session {session_id} is already bound to VATUSA record {bound}, refusing rebind to {attempted}"
    )]
    VatusaIdMismatch {
        /// Local session id holding the existing binding
        session_id: i32,
        /// VATUSA record id the session is currently bound to
        bound: i64,
        /// VATUSA record id the rebind was attempted with
        attempted: i64,
    },
}
