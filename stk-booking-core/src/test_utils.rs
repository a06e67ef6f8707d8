//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone};
use tokio::sync::Mutex;

use crate::error::BookingResult;
use crate::services::BookingForm;
use crate::traits::BookingClient;
use crate::types::{Ack, AppointmentPayload, Captcha, Field, FormState};

// ===== MockBookingClient =====

pub struct MockBookingClient {
    /// 每次 submit 返回的结果
    outcome: BookingResult<Ack>,
    /// 已收到的 payload
    calls: Mutex<Vec<AppointmentPayload>>,
}

impl MockBookingClient {
    pub fn answering(outcome: BookingResult<Ack>) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    pub async fn last_payload(&self) -> Option<AppointmentPayload> {
        self.calls.lock().await.last().cloned()
    }
}

#[async_trait]
impl BookingClient for MockBookingClient {
    async fn submit(&self, payload: &AppointmentPayload) -> BookingResult<Ack> {
        self.calls.lock().await.push(payload.clone());
        self.outcome.clone()
    }
}

// ===== 工厂方法 =====

/// 2030-06-15 12:00 (UTC+3)
pub fn fixed_now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3 * 3600)
        .and_then(|tz| tz.with_ymd_and_hms(2030, 6, 15, 12, 0, 0).single())
        .unwrap_or_else(|| unreachable!())
}

/// 在 `fixed_now()` 时刻完全有效的表单（验证码 3 + 4）
pub fn valid_form() -> BookingForm {
    let captcha = Captcha::new(3, 4).unwrap_or_else(|| unreachable!());
    let mut state = FormState::with_captcha(captcha);
    state.set_field(Field::FullName, "Ion Popescu");
    state.set_field(Field::Phone, "+40712345678");
    state.set_field(Field::Date, "2030-06-16");
    state.set_field(Field::Time, "10:00");
    state.set_field(Field::CaptchaResult, "7");
    BookingForm::with_state(state)
}
