//! Contact model representing one entry of the Agenda directory.

use crate::domain::ContactId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Keeps an absent `<email>` element apart from an empty `<email/>`.
fn deserialize_email<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

/// Writes a missing email as an empty element so the field is never dropped.
fn serialize_email<S>(email: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(email.as_deref().unwrap_or_default())
}

/// A single directory entry.
///
/// Field order matches the wire schema (`id`, `nome`, `email`, `telefone`) and
/// every field is always written, even when empty or zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename = "contato")]
pub struct Contact {
    /// Server-assigned identifier; `0` until the server has accepted the contact
    #[serde(default)]
    pub id: u64,

    /// Display name
    #[serde(rename = "nome", default)]
    pub name: String,

    /// Email address, the caller's lookup key; `None` when the server sent no
    /// `<email>` element at all
    #[serde(
        default,
        serialize_with = "serialize_email",
        deserialize_with = "deserialize_email"
    )]
    pub email: Option<String>,

    /// Phone number, passed through untouched
    #[serde(rename = "telefone", default)]
    pub phone: String,
}

impl Contact {
    /// Create an unsaved contact (id `0`) with the required fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: Some(email.into()),
            phone: String::new(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// The email address, if the entry has one.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// The server id, if this contact has been persisted.
    pub fn persisted_id(&self) -> Option<ContactId> {
        ContactId::new(self.id).ok()
    }

    /// Case-insensitive exact comparison against this contact's email.
    ///
    /// No trimming and no partial matches: `" ana@x.com"` does not match `"ana@x.com"`.
    /// A contact without an email matches nothing, not even `""`.
    pub fn matches_email(&self, email: &str) -> bool {
        self.email().is_some_and(|own| eq_ignore_case(own, email))
    }
}

/// Character-wise comparison that accepts either case mapping as equal.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y || x.to_lowercase().eq(y.to_lowercase()) || x.to_uppercase().eq(y.to_uppercase())
        })
}
