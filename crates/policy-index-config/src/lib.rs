//! Configuration management for policy-index
//!
//! Hierarchical configuration with discovery and precedence:
//! CLI > file > builder > defaults. The TOML file lives at
//! `.policy-index/config.toml` and supports `[paths]`, `[scan]` and
//! `[render]` sections.

mod builder;
mod discovery;
mod model;
mod sources;
mod validation;

pub use builder::ConfigBuilder;
pub use discovery::{CONFIG_DIR, CONFIG_FILE};
pub use model::*;
pub use policy_index_utils::types::ConfigSource;
