//! Greeting endpoint.
//!
//! Serves the fixed greeting at the site root. The body is a constant, so
//! repeated requests yield byte-identical responses.

use crate::config::GREETING_BODY;

/// Greeting handler.
///
/// Always returns 200 with the greeting as plain text.
pub async fn greeting() -> &'static str {
    GREETING_BODY
}
