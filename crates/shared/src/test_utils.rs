//! Test Utilities
//!
//! Common test utilities shared across test modules to avoid port
//! conflicts when tests construct configurations with fixed addresses.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};

/// Global port counter to ensure unique ports across all tests
static TEST_PORT_COUNTER: AtomicU16 = AtomicU16::new(42000);

/// Returns a loopback address with a port unique to this test run
///
/// Tests that bind a listener should prefer `127.0.0.1:0` and read the
/// OS-assigned port back; this helper is for tests that only need distinct
/// addresses in configuration values without binding them.
pub fn unique_loopback_addr() -> SocketAddr {
    let port = TEST_PORT_COUNTER.fetch_add(1, Ordering::SeqCst);
    let port = if port > 62000 {
        TEST_PORT_COUNTER.store(42000, Ordering::SeqCst);
        42000
    } else {
        port
    };

    SocketAddr::from(([127, 0, 0, 1], port))
}
