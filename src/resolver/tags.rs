use crate::core::TagFileResult;
use crate::di::HostingProvider;
use std::sync::Arc;

/// A named, immutable pointer to a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub commit_sha: String,
}

/// A commit reduced to what resolution needs: its SHA and its root tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub sha: String,
    pub tree_sha: String,
}

/// Resolves a repository's tags to their commits
pub struct TagResolver {
    provider: Arc<dyn HostingProvider>,
}

impl TagResolver {
    pub fn new(provider: Arc<dyn HostingProvider>) -> Self {
        Self { provider }
    }

    /// List all tags of a repository
    pub async fn list_tags(&self, owner: &str, repo: &str) -> TagFileResult<Vec<Tag>> {
        let tags = self.provider.list_tags(owner, repo).await?;
        Ok(tags
            .into_iter()
            .map(|t| Tag {
                name: t.name,
                commit_sha: t.commit.sha,
            })
            .collect())
    }

    /// Resolve a tag to its commit and root tree SHA
    pub async fn commit_for_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &Tag,
    ) -> TagFileResult<Commit> {
        let commit = self.provider.get_commit(owner, repo, &tag.commit_sha).await?;
        Ok(Commit {
            tree_sha: commit.commit.tree.sha,
            sha: commit.sha,
        })
    }
}
