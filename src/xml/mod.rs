//! XML marshalling for contacts and the directory.
//!
//! Encoding goes through `quick_xml::se` with indented output. Decoding first
//! checks the document's root element with a `quick_xml::Reader`, because the
//! serde deserializer ignores the root tag name, and then hands the document to
//! `quick_xml::de`.
//!
//! The `decode_*` functions return `None` on any failure. The `parse_*`
//! functions return the same outcome as a [`DirectoryError::Serialization`]
//! carrying the decoder's message.

mod representation;
pub use representation::{Representation, XML_MEDIA_TYPE};

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Contact, Directory};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Root element of a single contact document.
pub const CONTACT_ROOT: &str = "contato";

/// Root element of the directory document.
pub const DIRECTORY_ROOT: &str = "agenda";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Encode a contact, including zero and empty fields.
///
/// Encoding an in-memory contact does not fail in practice; the `Result` only
/// carries writer errors from the serializer.
pub fn encode_contact(contact: &Contact) -> DirectoryResult<Representation> {
    encode(contact)
}

/// Encode a whole directory document.
pub fn encode_directory(directory: &Directory) -> DirectoryResult<Representation> {
    encode(directory)
}

/// Decode a `<contato>` document, or `None` if it is malformed or has another root.
pub fn decode_contact(representation: &Representation) -> Option<Contact> {
    parse_contact(representation.as_str()).ok()
}

/// Decode an `<agenda>` document, or `None` if it is malformed or has another root.
pub fn decode_directory(representation: &Representation) -> Option<Directory> {
    parse_directory(representation.as_str()).ok()
}

pub fn parse_contact(xml: &str) -> DirectoryResult<Contact> {
    parse(xml, CONTACT_ROOT)
}

pub fn parse_directory(xml: &str) -> DirectoryResult<Directory> {
    parse(xml, DIRECTORY_ROOT)
}

fn encode<T: Serialize>(value: &T) -> DirectoryResult<Representation> {
    let mut xml = String::from(XML_DECLARATION);
    xml.push('\n');

    let mut serializer = quick_xml::se::Serializer::new(&mut xml);
    serializer.indent(' ', 2);
    value
        .serialize(serializer)
        .map_err(|e| DirectoryError::Serialization(e.to_string()))?;

    Ok(Representation::new(xml))
}

fn parse<T: DeserializeOwned>(xml: &str, expected_root: &str) -> DirectoryResult<T> {
    let root = root_element(xml)?;
    if root != expected_root {
        return Err(DirectoryError::Serialization(format!(
            "expected <{}> document, found <{}>",
            expected_root, root
        )));
    }

    quick_xml::de::from_str(xml).map_err(|e| DirectoryError::Serialization(e.to_string()))
}

/// Local name of the first element in the document.
fn root_element(xml: &str) -> DirectoryResult<String> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(DirectoryError::Serialization(
                    "document has no root element".to_string(),
                ));
            }
            Ok(_) => {}
            Err(e) => return Err(DirectoryError::Serialization(e.to_string())),
        }
    }
}
