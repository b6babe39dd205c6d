//! Seams between the client and its email-to-id resolution strategy.

use crate::domain::ContactId;
use crate::error::DirectoryResult;
use crate::models::Contact;

/// Anything that can produce the current directory contents.
pub trait ContactSource {
    /// Fetch every contact, in server order.
    fn list_contacts(&self) -> DirectoryResult<Vec<Contact>>;
}

/// Strategy for mapping an email address to a server-assigned id.
pub trait ContactLookup: Send + Sync {
    /// Resolve `email` against `source`.
    ///
    /// Returns `DirectoryError::ResolutionMiss` when no contact matches; any
    /// error from the source is passed through unchanged.
    fn resolve(&self, source: &dyn ContactSource, email: &str) -> DirectoryResult<ContactId>;
}
