//! Tag-to-file-content orchestration

use crate::core::TagFileResult;
use crate::di::HostingProvider;
use crate::resolver::{TagResolver, TreeResolver};
use std::collections::HashMap;
use std::sync::Arc;

/// The per-tag resolution result: file bytes, or `None` if the path did not
/// exist at that tag.
pub type TagContents = HashMap<String, Option<Vec<u8>>>;

/// Retrieves one file's contents at every tag of a repository
///
/// Holds no state between calls; `get_data` is re-entrant and safe for
/// concurrent independent invocations. The credential lives in the hosting
/// provider handed in at construction.
pub struct FileTagsService {
    tags: TagResolver,
    tree: TreeResolver,
}

impl FileTagsService {
    pub fn new(provider: Arc<dyn HostingProvider>) -> Self {
        Self {
            tags: TagResolver::new(provider.clone()),
            tree: TreeResolver::new(provider),
        }
    }

    /// Build the tag -> content mapping for one file path
    ///
    /// Returns one entry per tag; a tag where the file does not exist maps to
    /// `None`. Any fetch failure on any tag fails the whole call: either a
    /// complete mapping is returned or a single error, never a partial
    /// mapping. Tags are resolved sequentially.
    pub async fn get_data(
        &self,
        owner: &str,
        repo: &str,
        file_path: &str,
    ) -> TagFileResult<TagContents> {
        let tags = self.tags.list_tags(owner, repo).await?;
        tracing::debug!(count = tags.len(), owner, repo, "enumerated tags");

        let mut contents = TagContents::with_capacity(tags.len());
        for tag in tags {
            let commit = self.tags.commit_for_tag(owner, repo, &tag).await?;
            let file = self
                .tree
                .resolve(owner, repo, &commit.tree_sha, file_path)
                .await?;
            tracing::info!(tag = %tag.name, found = file.is_some(), "resolved tag");
            contents.insert(tag.name, file);
        }

        Ok(contents)
    }
}
