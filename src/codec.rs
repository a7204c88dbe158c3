//! XML property list encoding of themes and bundle metadata.

use crate::error::Result;
use crate::model::Document;
use serde::Serialize;

/// Encode any plist-shaped value as an XML property list.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    plist::to_writer_xml(&mut buf, value)?;
    Ok(buf)
}

/// Read a theme document back from property list bytes (XML or binary).
pub fn decode(bytes: &[u8]) -> Result<Document> {
    Ok(plist::from_bytes(bytes)?)
}
