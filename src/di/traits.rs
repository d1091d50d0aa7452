//! Trait definitions for dependency injection

use crate::core::TagFileResult;
use crate::github::types::{BlobObject, CommitObject, TagInfo, TreeObject};
use async_trait::async_trait;

/// Trait for hosting-service access
///
/// The four read operations the resolution pipeline needs, each a thin
/// mapping onto the hosting service's REST surface. Implementations perform
/// no retries; failures propagate to the caller. Must be thread-safe
/// (Send + Sync).
#[async_trait]
pub trait HostingProvider: Send + Sync {
    /// List all tags of a repository
    async fn list_tags(&self, owner: &str, repo: &str) -> TagFileResult<Vec<TagInfo>>;

    /// Fetch a single commit by SHA
    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> TagFileResult<CommitObject>;

    /// Fetch one tree object by SHA (non-recursive)
    async fn get_tree(&self, owner: &str, repo: &str, sha: &str) -> TagFileResult<TreeObject>;

    /// Fetch a blob by SHA; content stays transport-encoded
    async fn get_blob(&self, owner: &str, repo: &str, sha: &str) -> TagFileResult<BlobObject>;
}
