//! ContactId value object.

use super::errors::ValidationError;
use std::fmt;
use std::num::NonZeroU64;

/// A server-assigned contact identifier.
///
/// Only persisted contacts have one, so an item URL can never be built for an
/// unsaved contact (whose wire id is `0`).
///
/// # Example
///
/// ```
/// use agenda_client::domain::ContactId;
///
/// let id = ContactId::new(42).unwrap();
/// assert_eq!(id.get(), 42);
/// assert!(ContactId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(NonZeroU64);

impl ContactId {
    /// Create a new ContactId, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ZeroId` if `id` is zero.
    pub fn new(id: u64) -> Result<Self, ValidationError> {
        NonZeroU64::new(id).map(Self).ok_or(ValidationError::ZeroId)
    }

    /// Get the raw numeric id.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl From<ContactId> for u64 {
    fn from(id: ContactId) -> Self {
        id.get()
    }
}

impl TryFrom<u64> for ContactId {
    type Error = ValidationError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
