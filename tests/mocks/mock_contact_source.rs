use agenda_client::error::{DirectoryError, DirectoryResult};
use agenda_client::lookup::ContactSource;
use agenda_client::models::Contact;
use std::sync::{Arc, Mutex};

/// In-memory directory for lookup tests.
///
/// Serves a fixed list of contacts (or a configured failure) and counts how
/// many times the full listing was requested.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactSource {
    contacts: Arc<Mutex<Vec<Contact>>>,
    failure: Arc<Mutex<Option<DirectoryError>>>,
    list_calls: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockContactSource {
    /// Create a new empty MockContactSource.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source serving `contacts` in the given order.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let source = Self::new();
        *source.contacts.lock().unwrap() = contacts;
        source
    }

    /// Append a contact at the end of the directory.
    pub fn push(&self, contact: Contact) {
        self.contacts.lock().unwrap().push(contact);
    }

    /// Make every subsequent listing fail with `error`.
    pub fn fail_with(&self, error: DirectoryError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Number of times the directory was listed.
    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

impl ContactSource for MockContactSource {
    fn list_contacts(&self) -> DirectoryResult<Vec<Contact>> {
        *self.list_calls.lock().unwrap() += 1;

        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.contacts.lock().unwrap().clone())
    }
}
