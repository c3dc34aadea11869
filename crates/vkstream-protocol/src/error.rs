use thiserror::Error;

pub type Result<T> = std::result::Result<T, WireError>;

/// Failure while reading or writing one call's parameters.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("unexpected end of payload: needed {needed} bytes at offset {offset}, {remaining} remaining")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("wrong structure type for {schema}: expected {expected}, found {found}")]
    StructureTypeMismatch {
        schema: &'static str,
        expected: u32,
        found: u32,
    },

    #[error("{schema} carries an extension chain of {length} bytes (ext type {ext_type:?}); extension chains are not supported")]
    UnsupportedExtensionChain {
        schema: &'static str,
        length: u32,
        ext_type: Option<u32>,
    },

    #[error("string field {field} is not valid utf-8")]
    InvalidUtf8 { field: &'static str },

    #[error("count for {field} overflows ({count} elements)")]
    CountOverflow { field: &'static str, count: u64 },

    #[error("array {field} is counted by {count_field}, which was not decoded before it")]
    MissingCount {
        field: &'static str,
        count_field: &'static str,
    },

    #[error("array {field} has {found} elements but its count says {expected}")]
    CountMismatch {
        field: &'static str,
        expected: u64,
        found: usize,
    },

    #[error("value for {field} does not match its declared type")]
    ValueMismatch { field: &'static str },

    #[error("handle {handle:#x} for {field} could not be mapped: {source}")]
    HandleMapping {
        field: &'static str,
        handle: u64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
