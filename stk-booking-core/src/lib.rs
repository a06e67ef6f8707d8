//! STK Barbershop booking core library
//!
//! Provides the UI-independent part of the appointment form:
//! - Form state with the arithmetic captcha (`types`)
//! - Client-side validation (`validation`)
//! - Submission controller (`services`)
//! - The `BookingClient` capability and its HTTP implementation (`traits`, `client`)
//!
//! Front ends (the TUI, tests) own a [`BookingForm`] and drive it; the backend
//! address is injected through [`BookingConfig`].

pub mod client;
pub mod config;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use client::HttpBookingClient;
pub use config::BookingConfig;
pub use error::{BookingError, BookingResult};
pub use services::{BookingForm, SubmissionService};
pub use traits::BookingClient;
pub use types::{
    Ack, AppointmentPayload, Captcha, Field, FormState, Service, SubmissionStatus,
};
pub use validation::{join_messages, validate, validate_at, ValidationError};
