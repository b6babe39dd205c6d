//! Domain value objects and types.
//!
//! Type-safe wrappers for domain concepts. These value objects validate at
//! construction time and keep invalid data from reaching the wire.

pub mod contact_id;
pub mod errors;

pub use contact_id::ContactId;
pub use errors::ValidationError;
