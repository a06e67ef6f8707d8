//! Submission controller

mod booking_form;
mod submission_service;

pub use booking_form::BookingForm;
pub use submission_service::SubmissionService;
