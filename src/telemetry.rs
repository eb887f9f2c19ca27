//! Logging setup for native hosts

/// Install a `tracing` fmt subscriber. Safe to call more than once; later
/// calls leave the first subscriber in place.
pub fn init() {
    let _ = tracing_subscriber::fmt().try_init();
}
