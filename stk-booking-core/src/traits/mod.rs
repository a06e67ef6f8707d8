//! Trait definitions

mod booking_client;

pub use booking_client::BookingClient;
