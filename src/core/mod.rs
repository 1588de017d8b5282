//! Signature model shared by the merger, the descriptor and the manifest.

pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{MemberOrigin, MethodSignature, ParameterInfo, TypeRef};
