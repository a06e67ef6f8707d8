//! Submission status

/// Shown while the request is in flight.
pub const LOADING_MESSAGE: &str = "Sending...";
/// Shown after a 2xx answer without a `message`.
pub const GENERIC_SUCCESS_MESSAGE: &str = "Appointment submitted successfully.";
/// Shown after a rejection without `detail`/`message`.
pub const GENERIC_REJECTION_MESSAGE: &str = "Submission failed.";
/// Shown when the request never completed.
pub const NETWORK_ERROR_MESSAGE: &str = "Network or server error. Please try again.";

/// What the form currently reports to the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing to show
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Booking accepted
    Success(String),
    /// Validation failed, or the request was rejected / never completed
    Error(String),
}

impl SubmissionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Text to display, `None` when idle
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Loading => Some(LOADING_MESSAGE),
            Self::Success(msg) | Self::Error(msg) => Some(msg.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_has_no_message() {
        assert_eq!(SubmissionStatus::Idle.message(), None);
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }

    #[test]
    fn loading_reports_sending() {
        let status = SubmissionStatus::Loading;
        assert!(status.is_loading());
        assert_eq!(status.message(), Some(LOADING_MESSAGE));
    }

    #[test]
    fn terminal_states_carry_their_text() {
        assert_eq!(SubmissionStatus::Success("OK".into()).message(), Some("OK"));
        assert_eq!(
            SubmissionStatus::Error("Slot taken".into()).message(),
            Some("Slot taken")
        );
    }
}
