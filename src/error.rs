use thiserror::Error;

use super::JsonType;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while reading elements out of a received message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The remote service sent something the protocol does not allow.
    #[error(transparent)]
    ProtocolViolation(#[from] ProtocolViolation),

    /// A list index past the end of an [`ElementList`](crate::ElementList).
    #[error("index {index} is out of bounds for a list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
impl Error {
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, Self::ProtocolViolation(_))
    }
    pub fn protocol_violation(&self) -> Option<&ProtocolViolation> {
        match self {
            Self::ProtocolViolation(e) => Some(e),
            Self::IndexOutOfBounds { .. } => None,
        }
    }
}

/// A received value that does not match the shape the protocol documents.
///
/// These are never recoverable locally. A field that is absent or mistyped
/// is reported at the accessor that reads it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolViolation {
    #[error("`{ty}.{field}` is missing")]
    MissingField {
        ty: &'static str,
        field: &'static str,
    },

    #[error("`{ty}.{field}` must be {expected}, but was {got}")]
    FieldType {
        ty: &'static str,
        field: &'static str,
        expected: &'static str,
        got: JsonType,
    },

    #[error("`{ty}.{field}` has unknown value `{value}`")]
    UnknownDiscriminator {
        ty: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{ty} must be an object, but was {got}")]
    NotAnObject { ty: &'static str, got: JsonType },

    #[error("unsupported JSON-RPC version `{0}`")]
    Version(String),

    #[error("message is neither a response nor a stream notification")]
    MessageStructure,
}
