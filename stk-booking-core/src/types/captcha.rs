//! Arithmetic captcha

use rand::Rng;
use serde::Serialize;

/// Smallest captcha operand
pub const CAPTCHA_MIN: u8 = 1;
/// Largest captcha operand
pub const CAPTCHA_MAX: u8 = 9;

/// "What is a + b?" challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Captcha {
    a: u8,
    b: u8,
}

impl Captcha {
    /// Builds a challenge from explicit operands, `None` if either is outside `[1, 9]`.
    pub fn new(a: u8, b: u8) -> Option<Self> {
        let range = CAPTCHA_MIN..=CAPTCHA_MAX;
        (range.contains(&a) && range.contains(&b)).then_some(Self { a, b })
    }

    /// Draws a fresh challenge from the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Draws both operands independently and uniformly from `[1, 9]`.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            a: rng.random_range(CAPTCHA_MIN..=CAPTCHA_MAX),
            b: rng.random_range(CAPTCHA_MIN..=CAPTCHA_MAX),
        }
    }

    pub fn a(self) -> u8 {
        self.a
    }

    pub fn b(self) -> u8 {
        self.b
    }

    /// Expected answer
    pub fn sum(self) -> u32 {
        u32::from(self.a) + u32::from(self.b)
    }

    /// Question text shown next to the answer field
    pub fn question(self) -> String {
        format!("What is {} + {}?", self.a, self.b)
    }

    /// Checks a user answer with numeric normalization (`"07"` and `"7.0"` both mean 7).
    pub fn is_answered_by(self, answer: &str) -> bool {
        parse_captcha_answer(answer) == Some(self.sum())
    }
}

/// Parses a captcha answer as a number.
///
/// Surrounding whitespace is ignored. Decimal and exponent forms are accepted
/// (`"7.0"`, `"7e0"`, `"+7"`), as are unsigned `0x` / `0o` / `0b` literals.
/// Returns `None` for empty input, anything non-numeric, and numbers that are
/// not non-negative integers.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_captcha_answer(answer: &str) -> Option<u32> {
    let answer = answer.trim();
    if let Some(value) = parse_radix_literal(answer) {
        return Some(value);
    }

    let value: f64 = answer.parse().ok()?;
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}

/// `0x1f`, `0o17`, `0b101` (prefix case-insensitive, no sign)
fn parse_radix_literal(answer: &str) -> Option<u32> {
    let prefix = answer.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &answer[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(digits, radix).ok()
}
