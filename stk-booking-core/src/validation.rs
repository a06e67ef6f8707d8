//! Client-side validation of the booking form
//!
//! Every rule runs independently; the result lists all violations in rule
//! order, so the user sees every problem after one submit. An empty list means
//! the form may be sent.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::Regex;
use thiserror::Error;

use crate::types::FormState;

/// Optional leading `+`, then 8 to 15 digits (applied after stripping whitespace).
static PHONE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9]{8,15}$").ok());

/// Minimum length of the trimmed name, counted in UTF-16 code units
/// (an emoji outside the BMP counts as two).
const MIN_NAME_UNITS: usize = 2;

/// Format of the date field (`2030-05-10`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Format of the time field (`14:30`)
pub const TIME_FORMAT: &str = "%H:%M";

/// A single failed rule. `Display` yields the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("Name is required.")]
    NameRequired,

    #[error("Invalid phone number.")]
    InvalidPhone,

    #[error("Select a service.")]
    ServiceRequired,

    #[error("Select a date.")]
    DateRequired,

    #[error("Select a time.")]
    TimeRequired,

    /// Unparseable, non-existent in local time, or not strictly in the future.
    #[error("Date and time cannot be in the past.")]
    PastDateTime,

    #[error("Invalid captcha.")]
    InvalidCaptcha,
}

/// Validates against the current local wall-clock time.
pub fn validate(state: &FormState) -> Vec<ValidationError> {
    validate_at(state, &chrono::Local::now())
}

/// Validates against an explicit "now"; the date and time fields are read as
/// wall-clock values in `now`'s time zone.
pub fn validate_at<Tz: TimeZone>(state: &FormState, now: &DateTime<Tz>) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if utf16_len(state.full_name().trim()) < MIN_NAME_UNITS {
        errors.push(ValidationError::NameRequired);
    }

    if !is_valid_phone(state.phone()) {
        errors.push(ValidationError::InvalidPhone);
    }

    if state.service().is_none() {
        errors.push(ValidationError::ServiceRequired);
    }

    if state.date().is_empty() {
        errors.push(ValidationError::DateRequired);
    }

    if state.time().is_empty() {
        errors.push(ValidationError::TimeRequired);
    }

    if !state.date().is_empty() && !state.time().is_empty() {
        let in_future = scheduled_instant(state.date(), state.time(), &now.timezone())
            .is_some_and(|at| &at > now);
        if !in_future {
            errors.push(ValidationError::PastDateTime);
        }
    }

    if !state.captcha().is_answered_by(state.captcha_result()) {
        errors.push(ValidationError::InvalidCaptcha);
    }

    errors
}

fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Joins messages with a single space for display.
pub fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Phone check: whitespace anywhere is ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.as_ref().is_some_and(|re| re.is_match(&compact))
}

/// Builds the appointment instant (seconds fixed at 0) in the given zone.
///
/// Returns `None` when either part does not parse or the wall-clock time does
/// not exist in that zone.
pub fn scheduled_instant<Tz: TimeZone>(date: &str, time: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT).ok()?;
    tz.from_local_datetime(&NaiveDateTime::new(date, time))
        .earliest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Captcha, Field, Service};
    use chrono::{Duration, FixedOffset, Utc};

    fn now() -> DateTime<FixedOffset> {
        // 2030-06-15 12:00 at UTC+3 (Bucharest summer time)
        FixedOffset::east_opt(3 * 3600)
            .and_then(|tz| tz.with_ymd_and_hms(2030, 6, 15, 12, 0, 0).single())
            .unwrap_or_else(|| unreachable!())
    }

    fn valid_form() -> FormState {
        let captcha = Captcha::new(3, 4).unwrap_or_else(|| unreachable!());
        let mut form = FormState::with_captcha(captcha);
        form.set_field(Field::FullName, "Ion Popescu");
        form.set_field(Field::Phone, "+40712345678");
        form.set_field(Field::Date, "2030-06-16");
        form.set_field(Field::Time, "10:00");
        form.set_field(Field::CaptchaResult, "7");
        form
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate_at(&valid_form(), &now()).is_empty());
    }

    #[test]
    fn optional_fields_do_not_matter() {
        let mut form = valid_form();
        form.set_field(Field::Email, "not even an email");
        form.set_field(Field::Message, "");
        assert!(validate_at(&form, &now()).is_empty());
    }

    #[test]
    fn short_phone_reports_only_phone() {
        let mut form = valid_form();
        form.set_field(Field::Phone, "123");
        assert_eq!(
            validate_at(&form, &now()),
            vec![ValidationError::InvalidPhone]
        );
    }

    #[test]
    fn single_letter_name_is_rejected() {
        let mut form = valid_form();
        form.set_field(Field::FullName, "  I  ");
        assert_eq!(
            validate_at(&form, &now()),
            vec![ValidationError::NameRequired]
        );
    }

    #[test]
    fn name_length_counts_utf16_units() {
        let mut form = valid_form();
        form.set_field(Field::FullName, "💈");
        assert!(validate_at(&form, &now()).is_empty());

        form.set_field(Field::FullName, "ă");
        assert_eq!(
            validate_at(&form, &now()),
            vec![ValidationError::NameRequired]
        );

        form.set_field(Field::FullName, "Ăi");
        assert!(validate_at(&form, &now()).is_empty());
    }

    #[test]
    fn phone_rules() {
        assert!(is_valid_phone("0712345678"));
        assert!(is_valid_phone("+40 712 345 678"));
        assert!(is_valid_phone("12345678"));
        assert!(is_valid_phone("123456789012345"));
        assert!(!is_valid_phone("1234567"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("++40712345678"));
        assert!(!is_valid_phone("0712-345-678"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn missing_service_is_reported() {
        let mut form = valid_form();
        form.set_field(Field::Service, "vopsit");
        assert_eq!(
            validate_at(&form, &now()),
            vec![ValidationError::ServiceRequired]
        );
        form.select_service(Service::PachetComplet);
        assert!(validate_at(&form, &now()).is_empty());
    }

    #[test]
    fn missing_date_skips_schedule_check() {
        let mut form = valid_form();
        form.set_field(Field::Date, "");
        assert_eq!(
            validate_at(&form, &now()),
            vec![ValidationError::DateRequired]
        );
    }

    #[test]
    fn missing_time_skips_schedule_check() {
        let mut form = valid_form();
        form.set_field(Field::Time, "");
        assert_eq!(
            validate_at(&form, &now()),
            vec![ValidationError::TimeRequired]
        );
    }

    #[test]
    fn past_date_time_is_rejected() {
        let mut form = valid_form();
        form.set_field(Field::Date, "2030-06-15");
        form.set_field(Field::Time, "11:59");
        assert_eq!(
            validate_at(&form, &now()),
            vec![ValidationError::PastDateTime]
        );
    }

    #[test]
    fn current_minute_counts_as_past() {
        let mut form = valid_form();
        form.set_field(Field::Date, "2030-06-15");
        form.set_field(Field::Time, "12:00");
        assert_eq!(
            validate_at(&form, &now()),
            vec![ValidationError::PastDateTime]
        );
    }

    #[test]
    fn one_minute_ahead_passes() {
        let mut form = valid_form();
        form.set_field(Field::Date, "2030-06-15");
        form.set_field(Field::Time, "12:01");
        assert!(validate_at(&form, &now()).is_empty());
    }

    #[test]
    fn garbage_date_is_reported_as_past() {
        let mut form = valid_form();
        form.set_field(Field::Date, "mâine");
        assert_eq!(
            validate_at(&form, &now()),
            vec![ValidationError::PastDateTime]
        );

        let mut form = valid_form();
        form.set_field(Field::Time, "25:00");
        assert_eq!(
            validate_at(&form, &now()),
            vec![ValidationError::PastDateTime]
        );
    }

    #[test]
    fn captcha_answers() {
        let mut form = valid_form();
        form.set_field(Field::CaptchaResult, "07");
        assert!(validate_at(&form, &now()).is_empty());

        form.set_field(Field::CaptchaResult, "8");
        assert_eq!(
            validate_at(&form, &now()),
            vec![ValidationError::InvalidCaptcha]
        );
    }

    #[test]
    fn all_violations_are_collected_in_order() {
        let captcha = Captcha::new(1, 1).unwrap_or_else(|| unreachable!());
        let mut form = FormState::with_captcha(captcha);
        form.set_field(Field::Service, "");
        assert_eq!(
            validate_at(&form, &now()),
            vec![
                ValidationError::NameRequired,
                ValidationError::InvalidPhone,
                ValidationError::ServiceRequired,
                ValidationError::DateRequired,
                ValidationError::TimeRequired,
                ValidationError::InvalidCaptcha,
            ]
        );
    }

    #[test]
    fn messages_join_with_space() {
        let joined = join_messages(&[
            ValidationError::NameRequired,
            ValidationError::InvalidCaptcha,
        ]);
        assert_eq!(joined, "Name is required. Invalid captcha.");
    }

    #[test]
    fn wall_clock_validation_accepts_tomorrow() {
        let tomorrow = chrono::Local::now() + Duration::days(1);
        let mut form = valid_form();
        form.set_field(Field::Date, tomorrow.format(DATE_FORMAT).to_string());
        form.set_field(Field::Time, tomorrow.format(TIME_FORMAT).to_string());
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn utc_zone_is_supported() {
        let utc_now = Utc
            .with_ymd_and_hms(2030, 1, 1, 8, 0, 0)
            .single()
            .unwrap_or_else(|| unreachable!());
        let mut form = valid_form();
        form.set_field(Field::Date, "2030-01-01");
        form.set_field(Field::Time, "08:01");
        assert!(validate_at(&form, &utc_now).is_empty());
    }
}
