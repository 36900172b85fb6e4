use std::fmt;

use crate::error::{internal::InternalError, AppError};

/// Session duration parsed from the API's `HH:MM:SS` text.
///
/// Only hours and minutes carry into the end-time offset and the stored
/// display text; the seconds field is validated during parsing and then
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDuration {
    /// Whole hours of the session
    pub hours: i64,
    /// Minutes past the hour, 0-59
    pub minutes: i64,
}

impl SessionDuration {
    /// Offset to add to a session's start time to obtain its end time.
    ///
    /// Computed as hours × 3,600,000 ms + minutes × 60,000 ms.
    ///
    /// # Returns
    /// - `chrono::Duration` - The end-time offset
    pub fn offset(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.hours * 3_600_000 + self.minutes * 60_000)
    }
}

/// Stored display form is `HH:MM`, seconds trimmed.
impl fmt::Display for SessionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Parses duration text in `HH:MM:SS` form.
///
/// All three components must be present and numeric; minutes and seconds must
/// be below 60. The seconds component is discarded after validation.
///
/// # Arguments
/// - `value` - The duration string to parse, e.g. `"01:30:45"`
///
/// # Returns
/// - `Ok(SessionDuration)` - Parsed hours and minutes
/// - `Err(AppError::InternalErr(InvalidDuration))` - Malformed or out-of-range
///   duration text
pub fn parse_duration(value: &str) -> Result<SessionDuration, AppError> {
    let invalid = || InternalError::InvalidDuration {
        value: value.to_string(),
    };

    let mut parts = value.split(':');
    let hours = parts.next().ok_or_else(invalid)?;
    let minutes = parts.next().ok_or_else(invalid)?;
    let seconds = parts.next().ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid().into());
    }

    let hours: i64 = hours.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
    let seconds: i64 = seconds.parse().map_err(|_| invalid())?;

    if hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
        return Err(invalid().into());
    }

    Ok(SessionDuration { hours, minutes })
}
