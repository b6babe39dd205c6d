//! HTTP client for the Agenda contact directory.
//!
//! [`DirectoryClient`] is the façade callers use. It offers every operation in two
//! shapes:
//!
//! - `try_*` methods return [`DirectoryResult`], so callers can tell a transport
//!   failure from a bad status, an undecodable body, or an unknown email.
//! - The plain methods (`create`, `delete`, `fetch`, `list`, `resolve`) collapse
//!   every failure into a sentinel (`false`, `None`, an empty list, `0`) and only
//!   log the cause.
//!
//! Resource handles are bound per call from the configured base URL, so the
//! client holds no request state and can be shared across threads.

mod resource;
pub use resource::{Reply, Resource, ResourceFactory};

use crate::config::Config;
use crate::domain::ContactId;
use crate::error::{DirectoryError, DirectoryResult};
use crate::lookup::{ContactLookup, ContactSource, FullScanLookup};
use crate::metrics::Metrics;
use crate::models::Contact;
use crate::xml;
use std::time::Duration;

/// Path of the contact collection below the base URL.
pub const COLLECTION_PATH: &str = "contatos";

/// Blocking client for the Agenda directory service.
pub struct DirectoryClient {
    /// Base URL of the service, e.g. `http://localhost:8888/agenda`
    base_url: String,

    /// Binds per-call resource handles
    resources: ResourceFactory,

    /// Email-to-id resolution strategy
    lookup: Box<dyn ContactLookup>,

    /// Metrics collector
    metrics: Metrics,
}

impl DirectoryClient {
    /// Create a client for the default base URL.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Create a DirectoryClient from configuration.
    pub fn from_config(config: &Config) -> Self {
        let metrics = Metrics::new();
        let timeout = config.request_timeout.map(Duration::from_secs);

        Self {
            base_url: config.server_url.clone(),
            resources: ResourceFactory::new(timeout, metrics.clone()),
            lookup: Box::new(FullScanLookup),
            metrics,
        }
    }

    /// Create a client for a specific base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut client = Self::new();
        client.set_base_url(base_url);
        client
    }

    /// Replace the email-to-id resolution strategy.
    pub fn with_lookup<L: ContactLookup + 'static>(mut self, lookup: L) -> Self {
        self.lookup = Box::new(lookup);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Point the client at another server. Takes effect on the next call;
    /// reachability is not checked.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
        tracing::debug!("Directory base URL set to {}", self.base_url);
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// URL of the contact collection.
    pub fn collection_url(&self) -> String {
        build_url(&self.base_url, COLLECTION_PATH)
    }

    fn item_url(&self, id: ContactId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    // ========================= Typed operations =========================

    /// POST a new contact to the collection.
    ///
    /// The server assigns the id; it is not read back from the response.
    pub fn try_create(&self, contact: &Contact) -> DirectoryResult<()> {
        let body = xml::encode_contact(contact)?;
        let reply = self.resources.bind(self.collection_url()).post(&body)?;

        tracing::debug!(email = ?contact.email(), status = reply.status, "Contact created");
        Ok(())
    }

    /// GET the whole directory. An empty `Vec` here means the directory really is empty.
    pub fn try_list(&self) -> DirectoryResult<Vec<Contact>> {
        let reply = self.resources.bind(self.collection_url()).get()?;
        let directory = xml::parse_directory(reply.body.as_str())?;

        self.metrics.record_contacts_fetched(directory.len());
        Ok(directory.into_contacts())
    }

    /// Resolve the server id of the contact with `email`.
    pub fn try_resolve(&self, email: &str) -> DirectoryResult<ContactId> {
        let result = self.lookup.resolve(self, email);
        self.metrics
            .record_lookup(matches!(result, Err(DirectoryError::ResolutionMiss(_))));
        result
    }

    /// Resolve `email`, then GET its item resource.
    ///
    /// No item request is made when the email does not resolve.
    pub fn try_fetch(&self, email: &str) -> DirectoryResult<Contact> {
        let id = self.try_resolve(email)?;
        let reply = self.resources.bind(self.item_url(id)).get()?;
        let contact = xml::parse_contact(reply.body.as_str())?;

        self.metrics.record_contacts_fetched(1);
        Ok(contact)
    }

    /// Resolve `email`, then DELETE its item resource.
    ///
    /// No delete is issued when the email does not resolve, so neither the
    /// collection nor a zero id can be hit by mistake.
    pub fn try_delete(&self, email: &str) -> DirectoryResult<()> {
        let id = self.try_resolve(email)?;
        let reply = self.resources.bind(self.item_url(id)).delete()?;

        tracing::debug!(email = %email, id = %id, status = reply.status, "Contact deleted");
        Ok(())
    }

    // ========================= Sentinel operations =========================

    /// `true` iff the server accepted the contact with a 2xx status.
    pub fn create(&self, contact: &Contact) -> bool {
        settle("create", self.try_create(contact)).is_some()
    }

    /// `true` iff the email resolved and the delete got a 2xx status.
    pub fn delete(&self, email: &str) -> bool {
        settle("delete", self.try_delete(email)).is_some()
    }

    /// The contact for `email`, or `None` on a miss or any failure.
    pub fn fetch(&self, email: &str) -> Option<Contact> {
        settle("fetch", self.try_fetch(email))
    }

    /// All contacts, or an empty list on any failure.
    ///
    /// An empty result cannot be told apart from a failed request here; use
    /// [`try_list`](Self::try_list) when that matters.
    pub fn list(&self) -> Vec<Contact> {
        settle("list", self.try_list()).unwrap_or_default()
    }

    /// The server id for `email`, or `0` on a miss or any failure.
    pub fn resolve(&self, email: &str) -> u64 {
        settle("resolve", self.try_resolve(email)).map_or(0, ContactId::get)
    }
}

impl ContactSource for DirectoryClient {
    fn list_contacts(&self) -> DirectoryResult<Vec<Contact>> {
        self.try_list()
    }
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Log and drop the error side of a typed result.
fn settle<T>(operation: &str, result: DirectoryResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(DirectoryError::ResolutionMiss(email)) => {
            tracing::debug!(operation = %operation, email = %email, "No contact with that email");
            None
        }
        Err(e) => {
            tracing::warn!(operation = %operation, error = %e, "Directory operation failed");
            None
        }
    }
}

/// Join a base URL and a path with exactly one slash between them.
fn build_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
