//! Alert sink port
//!
//! Defines the interface for delivering alerts.

/// Destination for rendered alerts
///
/// Publishing is fire-and-forget: the caller does not wait for delivery
/// confirmation and never retries on the sink's behalf. Sinks report
/// their own delivery failures (e.g. by logging).
pub trait AlertSink: Send + Sync {
    /// Deliver one alert message to a user
    fn publish(&self, user: &str, message: &str);
}
