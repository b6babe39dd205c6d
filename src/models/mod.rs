//! Data models for Agenda entities.
//!
//! These types mirror the service's fixed XML data contract: a single contact
//! (`<contato>`) and the whole directory (`<agenda>`).

pub mod contact;
pub mod directory;

pub use contact::Contact;
pub use directory::Directory;
