//! Mock implementations of service traits for testing

use super::traits::HostingProvider;
use crate::core::{TagFileError, TagFileResult};
use crate::github::types::{
    BlobObject, CommitDetail, CommitObject, TagCommit, TagInfo, TreeEntry, TreeEntryKind,
    TreeObject, TreeRef,
};
use async_trait::async_trait;
use base64::Engine;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Build a sub-tree entry for a mock tree
pub fn tree_entry(path: &str, sha: &str) -> TreeEntry {
    TreeEntry {
        path: path.to_string(),
        kind: TreeEntryKind::Tree,
        sha: sha.to_string(),
    }
}

/// Build a blob entry for a mock tree
pub fn blob_entry(path: &str, sha: &str) -> TreeEntry {
    TreeEntry {
        path: path.to_string(),
        kind: TreeEntryKind::Blob,
        sha: sha.to_string(),
    }
}

/// Mock hosting provider for testing
///
/// Stores tags, commits, trees, and blobs in memory. Blobs are stored as raw
/// bytes and served base64-encoded with embedded newlines, the way GitHub
/// returns them. Individual object fetches can be made to fail to exercise
/// error propagation.
///
/// # Example
///
/// ```
/// use tagfile::di::mocks::{blob_entry, MockHostingProvider};
///
/// let provider = MockHostingProvider::new();
/// provider.add_tag("v1.0", "commit-a");
/// provider.add_commit("commit-a", "tree-a");
/// provider.add_tree("tree-a", vec![blob_entry("x.txt", "blob-x")]);
/// provider.add_blob("blob-x", b"hello".to_vec());
/// ```
#[derive(Clone, Default)]
pub struct MockHostingProvider {
    tags: Arc<Mutex<Vec<TagInfo>>>,
    commits: Arc<Mutex<HashMap<String, String>>>,
    trees: Arc<Mutex<HashMap<String, Vec<TreeEntry>>>>,
    blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    tree_fetches: Arc<Mutex<HashMap<String, usize>>>,
}

impl MockHostingProvider {
    /// Create a new mock hosting provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag pointing at a commit SHA
    pub fn add_tag(&self, name: &str, commit_sha: &str) {
        self.tags.lock().unwrap().push(TagInfo {
            name: name.to_string(),
            commit: TagCommit {
                sha: commit_sha.to_string(),
            },
        });
    }

    /// Add a commit with its root tree SHA
    pub fn add_commit(&self, sha: &str, tree_sha: &str) {
        self.commits
            .lock()
            .unwrap()
            .insert(sha.to_string(), tree_sha.to_string());
    }

    /// Add a tree object
    pub fn add_tree(&self, sha: &str, entries: Vec<TreeEntry>) {
        self.trees.lock().unwrap().insert(sha.to_string(), entries);
    }

    /// Add a blob as raw bytes
    pub fn add_blob(&self, sha: &str, content: Vec<u8>) {
        self.blobs.lock().unwrap().insert(sha.to_string(), content);
    }

    /// Make every fetch of the given object SHA fail
    pub fn fail_object(&self, sha: &str) {
        self.failing.lock().unwrap().insert(sha.to_string());
    }

    /// How many times a tree SHA has been fetched
    pub fn tree_fetch_count(&self, sha: &str) -> usize {
        self.tree_fetches
            .lock()
            .unwrap()
            .get(sha)
            .copied()
            .unwrap_or(0)
    }

    fn check_failure(&self, sha: &str) -> TagFileResult<()> {
        if self.failing.lock().unwrap().contains(sha) {
            Err(TagFileError::Api(format!(
                "simulated network failure fetching {}",
                sha
            )))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl HostingProvider for MockHostingProvider {
    async fn list_tags(&self, _owner: &str, _repo: &str) -> TagFileResult<Vec<TagInfo>> {
        self.check_failure("tags")?;
        Ok(self.tags.lock().unwrap().clone())
    }

    async fn get_commit(
        &self,
        _owner: &str,
        _repo: &str,
        sha: &str,
    ) -> TagFileResult<CommitObject> {
        self.check_failure(sha)?;
        let tree_sha = self
            .commits
            .lock()
            .unwrap()
            .get(sha)
            .cloned()
            .ok_or_else(|| TagFileError::NotFound(format!("commit {}", sha)))?;
        Ok(CommitObject {
            sha: sha.to_string(),
            commit: CommitDetail {
                tree: TreeRef { sha: tree_sha },
            },
        })
    }

    async fn get_tree(&self, _owner: &str, _repo: &str, sha: &str) -> TagFileResult<TreeObject> {
        *self
            .tree_fetches
            .lock()
            .unwrap()
            .entry(sha.to_string())
            .or_insert(0) += 1;
        self.check_failure(sha)?;
        let entries = self
            .trees
            .lock()
            .unwrap()
            .get(sha)
            .cloned()
            .ok_or_else(|| TagFileError::NotFound(format!("tree {}", sha)))?;
        Ok(TreeObject {
            sha: sha.to_string(),
            tree: entries,
            truncated: false,
        })
    }

    async fn get_blob(&self, _owner: &str, _repo: &str, sha: &str) -> TagFileResult<BlobObject> {
        self.check_failure(sha)?;
        let content = self
            .blobs
            .lock()
            .unwrap()
            .get(sha)
            .cloned()
            .ok_or_else(|| TagFileError::NotFound(format!("blob {}", sha)))?;

        // GitHub wraps base64 payloads at 60 columns
        let encoded = base64::engine::general_purpose::STANDARD.encode(&content);
        let wrapped = encoded
            .as_bytes()
            .chunks(60)
            .map(|c| std::str::from_utf8(c).unwrap())
            .collect::<Vec<_>>()
            .join("\n");

        Ok(BlobObject {
            sha: sha.to_string(),
            content: wrapped,
            encoding: "base64".to_string(),
            size: content.len() as u64,
        })
    }
}
