//! Form state holder

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use super::{Captcha, Service};

/// User-editable form fields, addressable by key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Phone,
    Email,
    Service,
    Date,
    Time,
    Message,
    CaptchaResult,
}

impl Field {
    /// All fields, in form order
    pub const ALL: [Self; 8] = [
        Self::FullName,
        Self::Phone,
        Self::Email,
        Self::Service,
        Self::Date,
        Self::Time,
        Self::Message,
        Self::CaptchaResult,
    ];

    /// Key name, identical to the JSON payload key
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Service => "service",
            Self::Date => "date",
            Self::Time => "time",
            Self::Message => "message",
            Self::CaptchaResult => "captcha_result",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a field key does not name an editable field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Every value the booking form holds
///
/// The captcha pair is not a [`Field`]: it only changes through
/// [`regenerate_captcha`](Self::regenerate_captcha), which also clears the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    full_name: String,
    phone: String,
    email: String,
    service: Option<Service>,
    date: String,
    time: String,
    message: String,
    captcha: Captcha,
    captcha_result: String,
}

impl FormState {
    /// Empty form with the default service and a fresh captcha
    pub fn new() -> Self {
        Self::with_captcha(Captcha::generate())
    }

    /// Empty form with a given challenge
    pub fn with_captcha(captcha: Captcha) -> Self {
        Self {
            full_name: String::new(),
            phone: String::new(),
            email: String::new(),
            service: Some(Service::default()),
            date: String::new(),
            time: String::new(),
            message: String::new(),
            captcha,
            captcha_result: String::new(),
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn service(&self) -> Option<Service> {
        self.service
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn captcha(&self) -> Captcha {
        self.captcha
    }

    pub fn captcha_result(&self) -> &str {
        &self.captcha_result
    }

    /// Replaces one field, leaving every other value untouched.
    ///
    /// For [`Field::Service`] the value is a wire value (`"tuns"`, ...); an
    /// unknown value clears the selection.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FullName => self.full_name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Service => self.service = Service::from_value(&value),
            Field::Date => self.date = value,
            Field::Time => self.time = value,
            Field::Message => self.message = value,
            Field::CaptchaResult => self.captcha_result = value,
        }
    }

    /// Current value of a field as text (service as its wire value, empty if unset)
    pub fn field_value(&self, field: Field) -> String {
        match field {
            Field::FullName => self.full_name.clone(),
            Field::Phone => self.phone.clone(),
            Field::Email => self.email.clone(),
            Field::Service => self.service.map(Service::value).unwrap_or_default().to_string(),
            Field::Date => self.date.clone(),
            Field::Time => self.time.clone(),
            Field::Message => self.message.clone(),
            Field::CaptchaResult => self.captcha_result.clone(),
        }
    }

    /// Mutable access to a free-text field, `None` for the service selector.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FullName => Some(&mut self.full_name),
            Field::Phone => Some(&mut self.phone),
            Field::Email => Some(&mut self.email),
            Field::Service => None,
            Field::Date => Some(&mut self.date),
            Field::Time => Some(&mut self.time),
            Field::Message => Some(&mut self.message),
            Field::CaptchaResult => Some(&mut self.captcha_result),
        }
    }

    /// Selects a service directly.
    pub fn select_service(&mut self, service: Service) {
        self.service = Some(service);
    }

    /// Draws a new captcha pair and clears the answer.
    pub fn regenerate_captcha(&mut self) {
        self.regenerate_captcha_with(&mut rand::rng());
    }

    pub fn regenerate_captcha_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.captcha = Captcha::generate_with(rng);
        self.captcha_result.clear();
    }

    /// Resets the form after an accepted booking: everything but the service
    /// is cleared and a new captcha is drawn.
    pub fn clear_after_success(&mut self) {
        self.clear_after_success_with(&mut rand::rng());
    }

    pub fn clear_after_success_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.full_name.clear();
        self.phone.clear();
        self.email.clear();
        self.date.clear();
        self.time.clear();
        self.message.clear();
        self.regenerate_captcha_with(rng);
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
