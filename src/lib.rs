//! Agenda Client - a blocking HTTP/XML client for the Agenda contact directory.
//!
//! The remote service exposes a contact collection at `{base}/contatos` and one
//! item resource per contact at `{base}/contatos/{id}`, all encoded as XML.
//! Callers only know a contact by its email, so every id-addressed operation first
//! resolves the email by scanning the full collection.
//!
//! # Architecture
//!
//! - **models**: The `Contact` and `Directory` entities
//! - **xml**: XML encoding and decoding of those entities
//! - **client**: Resource handles and the `DirectoryClient` façade
//! - **lookup**: Email-to-id resolution strategies
//! - **domain**: Validated value objects (`ContactId`)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration loading from the environment
//! - **metrics**: Request and lookup counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod lookup;
pub mod metrics;
pub mod models;
pub mod xml;

pub use client::{DirectoryClient, Resource, ResourceFactory};
pub use config::Config;
pub use domain::ContactId;
pub use error::{ConfigError, DirectoryError, DirectoryResult};
pub use lookup::{ContactLookup, ContactSource, FullScanLookup};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Contact, Directory};
pub use xml::Representation;
