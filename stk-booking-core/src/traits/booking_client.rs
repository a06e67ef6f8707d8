//! 预约提交抽象 Trait

use async_trait::async_trait;

use crate::error::BookingResult;
use crate::types::{Ack, AppointmentPayload};

/// Booking backend capability
///
/// Implementations:
/// - `HttpBookingClient`: reqwest, `POST {base}/api/appointment`
/// - `MockBookingClient` (tests): canned outcomes, records payloads
#[async_trait]
pub trait BookingClient: Send + Sync {
    /// Sends one appointment request.
    ///
    /// # Returns
    /// * `Ok(ack)` - the backend accepted the booking (2xx)
    /// * `Err(BookingError::Rejected { .. })` - non-success HTTP status
    /// * `Err(_)` otherwise - the request never completed
    async fn submit(&self, payload: &AppointmentPayload) -> BookingResult<Ack>;
}
