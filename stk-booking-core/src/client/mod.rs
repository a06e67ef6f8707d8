//! `BookingClient` implementations

mod http;

pub use http::HttpBookingClient;
