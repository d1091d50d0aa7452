//! GitHub REST API binding
//!
//! This module provides the hosting-client side of the pipeline:
//! - Enumerate a repository's tags
//! - Fetch single commits, tree objects, and blobs by SHA
//!
//! The resolvers in `crate::resolver` consume it through the
//! `HostingProvider` trait so tests can substitute fakes.

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{BlobObject, CommitObject, TagInfo, TreeEntry, TreeEntryKind, TreeObject};
