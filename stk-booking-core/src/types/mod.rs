//! Type definitions

mod captcha;
mod form;
mod payload;
mod service;
mod status;

pub use captcha::{parse_captcha_answer, Captcha, CAPTCHA_MAX, CAPTCHA_MIN};
pub use form::{Field, FormState, UnknownField};
pub use payload::{Ack, AppointmentPayload};
pub use service::Service;
pub use status::{
    SubmissionStatus, GENERIC_REJECTION_MESSAGE, GENERIC_SUCCESS_MESSAGE, LOADING_MESSAGE,
    NETWORK_ERROR_MESSAGE,
};
