//! HTTP booking client
//!
//! One `POST {base}/api/appointment` per submission. The response body is
//! read leniently: a body that cannot be read or is not a JSON object is
//! treated as `{}`, so the HTTP status alone decides between success and
//! rejection.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use url::Url;

use crate::config::BookingConfig;
use crate::error::{BookingError, BookingResult};
use crate::traits::BookingClient;
use crate::types::{Ack, AppointmentPayload};
use crate::utils::log_sanitizer::truncate_for_log;

/// Log tag
const CLIENT_NAME: &str = "booking";

/// reqwest-backed [`BookingClient`]
#[derive(Debug, Clone)]
pub struct HttpBookingClient {
    client: Client,
    config: BookingConfig,
}

impl HttpBookingClient {
    pub fn new(config: BookingConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Absolute endpoint URL; fails for an empty or malformed base URL.
    fn endpoint(&self) -> BookingResult<Url> {
        let raw = self.config.appointment_url();
        Url::parse(&raw).map_err(|e| BookingError::InvalidUrl(format!("{raw}: {e}")))
    }
}

#[async_trait]
impl BookingClient for HttpBookingClient {
    async fn submit(&self, payload: &AppointmentPayload) -> BookingResult<Ack> {
        let url = self.endpoint()?;
        log::debug!("[{CLIENT_NAME}] POST {url}");

        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| BookingError::Network(e.to_string()))?;

        let status = response.status();
        log::debug!("[{CLIENT_NAME}] Response Status: {}", status.as_u16());

        let text = response.text().await.unwrap_or_default();
        log::debug!("[{CLIENT_NAME}] Response Body: {}", truncate_for_log(&text));

        let body = parse_body(&text);

        if status.is_success() {
            Ok(Ack {
                message: message_field(&body, "message"),
            })
        } else {
            Err(BookingError::Rejected {
                status: status.as_u16(),
                message: message_field(&body, "detail")
                    .or_else(|| message_field(&body, "message")),
            })
        }
    }
}

/// Parses the body as a JSON object, falling back to `{}`.
fn parse_body(text: &str) -> Value {
    serde_json::from_str::<Value>(text)
        .ok()
        .filter(Value::is_object)
        .unwrap_or_else(|| Value::Object(Map::new()))
}

/// Extracts a displayable message from `body[key]`.
///
/// Accepts a non-empty string, or a list of strings / `{ "msg": ... }` objects
/// (the shape of framework validation errors), joined with a space.
fn message_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.as_str()),
                    Value::Object(_) => item.get("msg").and_then(Value::as_str),
                    _ => None,
                })
                .filter(|s| !s.is_empty())
                .collect();
            (!parts.is_empty()).then(|| parts.join(" "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Captcha, Field, FormState};
    use mockito::Matcher;
    use serde_json::json;

    fn payload() -> AppointmentPayload {
        let captcha = Captcha::new(3, 4).unwrap_or_else(|| unreachable!());
        let mut form = FormState::with_captcha(captcha);
        form.set_field(Field::FullName, "Ion Popescu");
        form.set_field(Field::Phone, "+40712345678");
        form.set_field(Field::Date, "2030-06-16");
        form.set_field(Field::Time, "10:00");
        form.set_field(Field::CaptchaResult, "7");
        AppointmentPayload::from(&form)
    }

    // ---- message_field / parse_body ----

    #[test]
    fn non_object_body_becomes_empty() {
        assert_eq!(parse_body("not json"), json!({}));
        assert_eq!(parse_body(r#""just a string""#), json!({}));
        assert_eq!(parse_body(""), json!({}));
    }

    #[test]
    fn empty_string_message_is_ignored() {
        assert_eq!(message_field(&json!({ "message": "" }), "message"), None);
    }

    #[test]
    fn non_string_message_is_ignored() {
        assert_eq!(message_field(&json!({ "message": 42 }), "message"), None);
    }

    #[test]
    fn detail_list_is_flattened() {
        let body = json!({
            "detail": [
                { "loc": ["body", "phone"], "msg": "Telefon invalid" },
                { "loc": ["body", "date"], "msg": "Data lipsă" }
            ]
        });
        assert_eq!(
            message_field(&body, "detail").as_deref(),
            Some("Telefon invalid Data lipsă")
        );
    }

    // ---- HTTP round trips ----

    #[tokio::test]
    async fn success_returns_backend_message() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/appointment")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "full_name": "Ion Popescu",
                "service": "tuns",
                "email": null,
                "captcha_a": 3,
                "captcha_b": 4,
                "captcha_result": 7
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"OK"}"#)
            .create_async()
            .await;

        let client = HttpBookingClient::new(BookingConfig::new(format!("{}/", server.url())));
        let result = client.submit(&payload()).await;

        mock.assert_async().await;
        assert_eq!(
            result,
            Ok(Ack {
                message: Some("OK".to_string())
            })
        );
    }

    #[tokio::test]
    async fn success_without_json_body_has_no_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/appointment")
            .with_status(200)
            .with_body("accepted")
            .create_async()
            .await;

        let client = HttpBookingClient::new(BookingConfig::new(server.url()));
        assert_eq!(client.submit(&payload()).await, Ok(Ack::default()));
    }

    #[tokio::test]
    async fn rejection_prefers_detail() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/appointment")
            .with_status(409)
            .with_body(r#"{"detail":"Slot taken","message":"ignored"}"#)
            .create_async()
            .await;

        let client = HttpBookingClient::new(BookingConfig::new(server.url()));
        assert_eq!(
            client.submit(&payload()).await,
            Err(BookingError::Rejected {
                status: 409,
                message: Some("Slot taken".to_string())
            })
        );
    }

    #[tokio::test]
    async fn rejection_falls_back_to_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/appointment")
            .with_status(400)
            .with_body(r#"{"message":"Captcha invalid"}"#)
            .create_async()
            .await;

        let client = HttpBookingClient::new(BookingConfig::new(server.url()));
        assert_eq!(
            client.submit(&payload()).await,
            Err(BookingError::Rejected {
                status: 400,
                message: Some("Captcha invalid".to_string())
            })
        );
    }

    #[tokio::test]
    async fn rejection_with_html_body_has_no_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/appointment")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let client = HttpBookingClient::new(BookingConfig::new(server.url()));
        assert_eq!(
            client.submit(&payload()).await,
            Err(BookingError::Rejected {
                status: 502,
                message: None
            })
        );
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        let client = HttpBookingClient::new(BookingConfig::new("http://127.0.0.1:1"));
        let result = client.submit(&payload()).await;
        assert!(
            matches!(result, Err(BookingError::Network(_))),
            "unexpected result: {result:?}"
        );
    }

    #[tokio::test]
    async fn empty_base_url_fails_without_request() {
        let client = HttpBookingClient::new(BookingConfig::default());
        let result = client.submit(&payload()).await;
        assert!(
            matches!(result, Err(BookingError::InvalidUrl(_))),
            "unexpected result: {result:?}"
        );
    }
}
