use thiserror::Error;

pub type SignatureResult<T> = Result<T, SignatureError>;

/// Failure to parse a descriptor or generic signature. Positions are byte offsets.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("unexpected end of `{input}`")]
    UnexpectedEnd { input: String },

    #[error("unexpected `{found}` at {position} in `{input}`")]
    UnexpectedChar {
        found: char,
        position: usize,
        input: String,
    },

    #[error("trailing input at {position} in `{input}`")]
    TrailingInput { position: usize, input: String },

    #[error("empty identifier at {position} in `{input}`")]
    EmptyIdentifier { position: usize, input: String },

    #[error("more than {limit} array dimensions at {position} in `{input}`")]
    TooManyDimensions {
        limit: usize,
        position: usize,
        input: String,
    },

    #[error("type arguments nested deeper than {limit} at {position} in `{input}`")]
    NestingTooDeep {
        limit: usize,
        position: usize,
        input: String,
    },
}
