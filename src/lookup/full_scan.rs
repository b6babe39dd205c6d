//! Email resolution by scanning the full directory listing.

use super::traits::{ContactLookup, ContactSource};
use crate::domain::ContactId;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Contact;

/// Resolves ids by listing the full directory and scanning it in order.
///
/// Costs one collection fetch and O(n) comparisons per call. Nothing is
/// remembered between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullScanLookup;

impl ContactLookup for FullScanLookup {
    fn resolve(&self, source: &dyn ContactSource, email: &str) -> DirectoryResult<ContactId> {
        let contacts = source.list_contacts()?;
        tracing::debug!(email = %email, scanned = contacts.len(), "Scanning directory for email");

        find_contact_id(&contacts, email)
            .ok_or_else(|| DirectoryError::ResolutionMiss(email.to_string()))
    }
}

/// Id of the first contact whose email matches `email` case-insensitively.
///
/// Only the first match counts: if its id is `0` the result is `None`, even
/// when a later entry carries the same email.
pub fn find_contact_id(contacts: &[Contact], email: &str) -> Option<ContactId> {
    contacts
        .iter()
        .find(|contact| contact.matches_email(email))
        .and_then(Contact::persisted_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<Contact> {
        vec![
            Contact::new("Ana", "ana@x.com").with_id(1),
            Contact::new("Bia", "bia@x.com").with_id(2),
            Contact::new("Ana Clone", "ANA@x.com").with_id(3),
        ]
    }

    #[test]
    fn test_find_first_match_in_order() {
        let id = find_contact_id(&directory(), "ana@x.com").unwrap();
        assert_eq!(id.get(), 1);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let id = find_contact_id(&directory(), "BIA@X.COM").unwrap();
        assert_eq!(id.get(), 2);
    }

    #[test]
    fn test_find_no_partial_or_trimmed_match() {
        assert!(find_contact_id(&directory(), "ana").is_none());
        assert!(find_contact_id(&directory(), " bia@x.com").is_none());
        assert!(find_contact_id(&directory(), "bia@x.com\n").is_none());
    }

    #[test]
    fn test_find_in_empty_directory() {
        assert!(find_contact_id(&[], "ana@x.com").is_none());
    }

    #[test]
    fn test_find_unsaved_first_match_is_not_found() {
        let contacts = vec![
            Contact::new("Draft", "dup@x.com"),
            Contact::new("Saved", "dup@x.com").with_id(8),
        ];
        assert!(find_contact_id(&contacts, "dup@x.com").is_none());
        assert_eq!(find_contact_id(&contacts[1..], "dup@x.com").unwrap().get(), 8);
    }

    #[test]
    fn test_find_passes_over_entries_without_email() {
        let contacts = vec![
            Contact {
                id: 5,
                name: "NoMail".to_string(),
                ..Contact::default()
            },
            Contact::new("Blank", "").with_id(6),
        ];
        assert_eq!(find_contact_id(&contacts, "").unwrap().get(), 6);
        assert!(find_contact_id(&contacts[..1], "").is_none());
    }
}
