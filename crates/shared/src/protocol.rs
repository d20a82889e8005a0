//! HTTP protocol constants shared by both services
//!
//! Route paths and content types used on the wire. Keeping these in one
//! place ensures the caller and the callee agree on the endpoint layout.

/// Route paths served by the microhello services
pub mod paths {
    /// Greeting endpoint served by both services
    pub const HELLO: &str = "/api/v1/hello";

    /// Forwarding endpoint served by service one
    pub const TO_SERVICE2: &str = "/api/v1/to/service2";

    /// Health check endpoint served by both services
    pub const HEALTH: &str = "/health";
}

/// Content type values for HTTP responses
pub mod content_types {
    pub const TEXT_PLAIN: &str = "text/plain";
    pub const JSON: &str = "application/json";
}

/// Header names used in HTTP requests and responses
pub mod headers {
    pub const CONTENT_TYPE: &str = "content-type";
}
