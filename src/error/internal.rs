use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a duration string from the training record API.
    ///
    /// Occurs when a record's duration text is not in `HH:MM:SS` form or one of
    /// its components is not a valid number. The offending record is skipped and
    /// the sync run continues.
    #[error("Invalid duration text '{value}': expected HH:MM:SS")]
    InvalidDuration {
        /// The duration string that failed to parse
        value: String,
    },
}
