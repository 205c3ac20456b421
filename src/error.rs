//! Errors raised while assembling member metadata.

use thiserror::Error;

use crate::signature::SignatureError;

pub type MemberResult<T> = Result<T, MemberError>;

#[derive(Debug, Error)]
pub enum MemberError {
    #[error("class `{0}` is already defined")]
    DuplicateClass(String),

    #[error("a field of `{owner}` has an empty name")]
    EmptyFieldName { owner: String },

    #[error("field `{name}` is declared more than once on `{owner}`")]
    DuplicateField { owner: String, name: String },

    #[error("invalid descriptor for `{owner}.{field}`: {source}")]
    InvalidDescriptor {
        owner: String,
        field: String,
        source: SignatureError,
    },

    #[error("invalid generic signature for `{owner}.{field}`: {source}")]
    InvalidSignature {
        owner: String,
        field: String,
        source: SignatureError,
    },

    #[error("signature of `{owner}.{field}` erases to `{erasure}` but the descriptor is `{descriptor}`")]
    InconsistentSignature {
        owner: String,
        field: String,
        descriptor: String,
        erasure: String,
    },
}
