//! 预约提交服务

use std::sync::Arc;

use chrono::{DateTime, TimeZone};

use crate::services::BookingForm;
use crate::traits::BookingClient;

/// Runs a whole submit (validate, send, apply) against a [`BookingClient`].
pub struct SubmissionService {
    client: Arc<dyn BookingClient>,
}

impl SubmissionService {
    #[must_use]
    pub fn new(client: Arc<dyn BookingClient>) -> Self {
        Self { client }
    }

    /// Submits using the local clock for the date check.
    pub async fn submit(&self, form: &mut BookingForm) {
        self.submit_at(form, &chrono::Local::now()).await;
    }

    /// Submits the form. At most one request is made; nothing is sent when
    /// validation fails.
    pub async fn submit_at<Tz: TimeZone>(&self, form: &mut BookingForm, now: &DateTime<Tz>) {
        let Some(payload) = form.prepare_submission_at(now) else {
            return;
        };
        let outcome = self.client.submit(&payload).await;
        form.apply_outcome(outcome);
    }
}
