//! Backend configuration
//!
//! The base URL is read once at startup and injected into the HTTP client;
//! nothing in the library reads the environment on its own.

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

/// Path of the appointment endpoint, relative to the base URL.
pub const APPOINTMENT_PATH: &str = "/api/appointment";

/// Booking backend configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingConfig {
    backend_base_url: String,
}

impl BookingConfig {
    /// Creates a configuration, stripping a single trailing `/` from the base URL.
    pub fn new(backend_base_url: impl Into<String>) -> Self {
        let mut base: String = backend_base_url.into();
        if base.ends_with('/') {
            base.pop();
        }
        Self {
            backend_base_url: base,
        }
    }

    /// Reads the base URL from `BACKEND_URL`; unset means empty (relative requests).
    pub fn from_env() -> Self {
        Self::new(std::env::var(BACKEND_URL_ENV).unwrap_or_default())
    }

    /// The normalized base URL (may be empty)
    pub fn backend_base_url(&self) -> &str {
        &self.backend_base_url
    }

    /// Whether no base URL was configured
    pub fn is_relative(&self) -> bool {
        self.backend_base_url.is_empty()
    }

    /// Full appointment endpoint, `{base}/api/appointment`
    pub fn appointment_url(&self) -> String {
        format!("{}{APPOINTMENT_PATH}", self.backend_base_url)
    }
}
