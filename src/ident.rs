//! Identifier generation for theme and bundle uuids.

use uuid::Uuid;

/// Source of fresh unique identifiers.
pub trait IdGenerator {
    fn generate(&self) -> String;
}

/// Random v4 uuids in the uppercase form `uuidgen` prints.
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().hyphenated().to_string().to_uppercase()
    }
}
