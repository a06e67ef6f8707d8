//! 预约表单控制器
//!
//! A submission is split in two synchronous halves around the network call:
//! [`BookingForm::prepare_submission`] validates and yields the payload,
//! [`BookingForm::apply_outcome`] interprets the backend's answer. Front ends
//! with their own event loop run the call in between on a runtime; headless
//! callers use [`SubmissionService`](super::SubmissionService).

use chrono::{DateTime, TimeZone};
use rand::Rng;

use crate::error::{BookingError, BookingResult};
use crate::types::{
    Ack, AppointmentPayload, Field, FormState, SubmissionStatus, GENERIC_REJECTION_MESSAGE,
    GENERIC_SUCCESS_MESSAGE, NETWORK_ERROR_MESSAGE,
};
use crate::validation::{join_messages, validate_at};

/// Form state plus the status shown to the user
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    state: FormState,
    status: SubmissionStatus,
}

impl BookingForm {
    /// Fresh form with a new captcha
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FormState) -> Self {
        Self {
            state,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// While `true` the submit control is disabled.
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.state.set_field(field, value);
    }

    pub fn regenerate_captcha(&mut self) {
        self.state.regenerate_captcha();
    }

    /// [`prepare_submission_at`](Self::prepare_submission_at) with the local clock.
    pub fn prepare_submission(&mut self) -> Option<AppointmentPayload> {
        self.prepare_submission_at(&chrono::Local::now())
    }

    /// First half of a submit.
    ///
    /// Resets the status, validates, and either reports the joined validation
    /// messages (returning `None`; the captcha is left alone) or switches to
    /// `Loading` and returns the payload to send.
    pub fn prepare_submission_at<Tz: TimeZone>(
        &mut self,
        now: &DateTime<Tz>,
    ) -> Option<AppointmentPayload> {
        self.status = SubmissionStatus::Idle;

        let errors = validate_at(&self.state, now);
        if !errors.is_empty() {
            log::debug!("Booking form has {} validation error(s)", errors.len());
            self.status = SubmissionStatus::Error(join_messages(&errors));
            return None;
        }

        self.status = SubmissionStatus::Loading;
        Some(AppointmentPayload::from(&self.state))
    }

    /// Second half of a submit: applies the backend's answer.
    ///
    /// The captcha is regenerated on every outcome.
    pub fn apply_outcome(&mut self, outcome: BookingResult<Ack>) {
        self.apply_outcome_with(outcome, &mut rand::rng());
    }

    /// [`apply_outcome`](Self::apply_outcome) drawing the new captcha from `rng`.
    pub fn apply_outcome_with<R: Rng + ?Sized>(
        &mut self,
        outcome: BookingResult<Ack>,
        rng: &mut R,
    ) {
        match outcome {
            Ok(ack) => {
                log::info!("Appointment accepted");
                let message = ack
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| GENERIC_SUCCESS_MESSAGE.to_string());
                self.status = SubmissionStatus::Success(message);
                self.state.clear_after_success_with(rng);
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Appointment rejected: {e}");
                } else {
                    log::error!("Appointment request failed: {e}");
                }
                self.status = SubmissionStatus::Error(error_message(e));
                self.state.regenerate_captcha_with(rng);
            }
        }
    }
}

/// Text shown for a failed request
fn error_message(error: BookingError) -> String {
    match error {
        BookingError::Rejected { message, .. } => message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_REJECTION_MESSAGE.to_string()),
        BookingError::Network(_) | BookingError::InvalidUrl(_) => {
            NETWORK_ERROR_MESSAGE.to_string()
        }
    }
}
