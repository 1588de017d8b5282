//! CLI command implementations.
//!
//! - **describe**: full library report in terminal, JSON or YAML form
//! - **keywords**: keyword names, and the arguments of a single keyword
//! - **init**: write a default `.keywordmap.toml`

pub mod describe;
pub mod init;
pub mod keywords;

pub use describe::{describe_library, DescribeConfig};
pub use init::init_config;
pub use keywords::{list_keywords, show_arguments, ArgumentsConfig};
