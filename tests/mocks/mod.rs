mod mock_contact_source;

pub use mock_contact_source::MockContactSource;
