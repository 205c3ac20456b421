//! Binary descriptor and generic signature codec.

pub mod error;
pub mod reader;
pub mod resolver;
pub mod visitor;
pub mod writer;

pub use error::{SignatureError, SignatureResult};
pub use reader::{read_descriptor, read_field_signature, MAX_ARGUMENT_NESTING, MAX_ARRAY_DIMENSIONS};
pub use resolver::{DetachedResolver, TypeResolver};
pub use visitor::{generic_signature_of, SignatureVisitor};
pub use writer::SignatureWriter;
