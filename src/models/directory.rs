//! Directory model: the full contact collection as served by the Agenda.

use crate::models::Contact;
use serde::{Deserialize, Serialize};

/// The ordered collection of all contacts returned by the service.
///
/// Order is whatever the server sends and is not stable across calls. A fresh
/// `Directory` is decoded on every list or lookup; it is never cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename = "agenda")]
pub struct Directory {
    /// One repeated `<contatos>` element per contact
    #[serde(rename = "contatos", default)]
    pub contacts: Vec<Contact>,
}

impl Directory {
    /// Create a directory from contacts in server order.
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Consume the directory, yielding its contacts in server order.
    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
    }
}

impl From<Vec<Contact>> for Directory {
    fn from(contacts: Vec<Contact>) -> Self {
        Self::new(contacts)
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
