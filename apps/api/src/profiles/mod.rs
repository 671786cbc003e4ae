// Profile persistence: the four-field self-report plus the last saved recommendation set.
// Optional at runtime; every handler here answers 503 when no database is configured.

pub mod handlers;
pub mod store;
