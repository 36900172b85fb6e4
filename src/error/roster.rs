use thiserror::Error;

/// Errors from facility roster operations.
#[derive(Error, Debug)]
pub enum RosterError {
    /// No unused two-letter operating initials could be found.
    ///
    /// Raised after the name-derived candidates and the bounded random probes
    /// are all taken. The controller is not added to the roster.
    #[error("No unused operating initials available for controller {cid}")]
    InitialsExhausted {
        /// CID of the controller that could not be assigned initials
        cid: i32,
    },
}
