//! Tagfile
//!
//! Retrieves the contents of one file at every tag of a GitHub repository,
//! producing a tag -> content mapping without cloning the repository. Tags
//! are enumerated through the REST API, each tag's commit is resolved to its
//! root tree, and the tree is walked segment by segment to the target blob.

/// Error types and result alias.
pub mod core;

/// Configuration management.
pub mod config;

/// GitHub REST API client and wire types.
pub mod github;

/// Dependency injection infrastructure.
pub mod di;

/// Tag and tree resolution.
pub mod resolver;

/// Tag-to-file-content orchestration.
pub mod service;

pub use crate::core::{TagFileError, TagFileResult};
pub use service::FileTagsService;
