//! Email-to-id resolution.
//!
//! The Agenda service has no query-by-email endpoint, so the only way to find a
//! contact's server id is to read the whole directory and scan it. That strategy
//! lives behind [`ContactLookup`] so a server-side filter can replace it later
//! without touching the client's callers.

mod full_scan;
mod traits;

pub use full_scan::{find_contact_id, FullScanLookup};
pub use traits::{ContactLookup, ContactSource};
