/// Returned when a string or number doesn't name any variant of an enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumError<T> {
    Unknown(T),
}

mod api_key;
pub use api_key::{ApiKey, ApiKeyError};

mod format;
pub use format::Format;

mod operation;
pub use operation::Operation;

mod relationship;
pub use relationship::Relationship;
