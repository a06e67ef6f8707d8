//! Wire types for the appointment endpoint

use serde::{Deserialize, Serialize};

use super::{parse_captcha_answer, FormState, Service};

/// JSON body of `POST /api/appointment`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentPayload {
    pub full_name: String,
    pub phone: String,
    /// `null` when the field was left empty
    pub email: Option<String>,
    pub service: Option<Service>,
    pub date: String,
    pub time: String,
    /// `null` when the field was left empty
    pub message: Option<String>,
    pub captcha_a: u8,
    pub captcha_b: u8,
    /// Parsed answer, `null` if it is not a number
    pub captcha_result: Option<u32>,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl From<&FormState> for AppointmentPayload {
    fn from(state: &FormState) -> Self {
        let captcha = state.captcha();
        Self {
            full_name: state.full_name().to_string(),
            phone: state.phone().to_string(),
            email: non_empty(state.email()),
            service: state.service(),
            date: state.date().to_string(),
            time: state.time().to_string(),
            message: non_empty(state.message()),
            captcha_a: captcha.a(),
            captcha_b: captcha.b(),
            captcha_result: parse_captcha_answer(state.captcha_result()),
        }
    }
}

/// Successful answer from the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    /// Confirmation text, if the backend sent one
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Captcha, Field};
    use serde_json::json;

    fn filled_form() -> FormState {
        let captcha = Captcha::new(2, 5).unwrap_or_else(|| unreachable!());
        let mut form = FormState::with_captcha(captcha);
        form.set_field(Field::FullName, "Ion Popescu");
        form.set_field(Field::Phone, "+40712345678");
        form.set_field(Field::Date, "2030-05-10");
        form.set_field(Field::Time, "14:30");
        form.set_field(Field::CaptchaResult, "07");
        form
    }

    #[test]
    fn empty_optionals_serialize_as_null() {
        let payload = AppointmentPayload::from(&filled_form());
        let value = serde_json::to_value(&payload).unwrap_or_default();
        assert_eq!(
            value,
            json!({
                "full_name": "Ion Popescu",
                "phone": "+40712345678",
                "email": null,
                "service": "tuns",
                "date": "2030-05-10",
                "time": "14:30",
                "message": null,
                "captcha_a": 2,
                "captcha_b": 5,
                "captcha_result": 7
            })
        );
    }

    #[test]
    fn optionals_are_sent_when_filled() {
        let mut form = filled_form();
        form.set_field(Field::Email, "ion@example.ro");
        form.set_field(Field::Message, "Doar maşina 3");
        let payload = AppointmentPayload::from(&form);
        assert_eq!(payload.email.as_deref(), Some("ion@example.ro"));
        assert_eq!(payload.message.as_deref(), Some("Doar maşina 3"));
    }

    #[test]
    fn non_numeric_answer_becomes_null() {
        let mut form = filled_form();
        form.set_field(Field::CaptchaResult, "abc");
        let payload = AppointmentPayload::from(&form);
        assert_eq!(payload.captcha_result, None);
    }

    #[test]
    fn ack_tolerates_missing_message() {
        let ack: Ack = serde_json::from_str("{}").unwrap_or_default();
        assert_eq!(ack.message, None);
    }
}
