//! Keyword collection: overload merging and the library descriptor.

pub mod argument;
pub mod keyword;
pub mod library;
pub mod merger;

pub use argument::ArgumentInfo;
pub use keyword::KeywordInfo;
pub use library::{describe, LibraryDescriptor};
pub use merger::merge_arguments;
