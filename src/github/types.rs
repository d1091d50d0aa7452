//! GitHub API type definitions

use serde::{Deserialize, Serialize};

/// One entry of the repository tags listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagInfo {
    pub name: String,
    pub commit: TagCommit,
}

/// Commit reference inside a tag entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCommit {
    pub sha: String,
}

/// A single commit as returned by the commits endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitObject {
    pub sha: String,
    pub commit: CommitDetail,
}

/// The git-level payload of a commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub tree: TreeRef,
}

/// SHA reference to a tree object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeRef {
    pub sha: String,
}

/// A tree object: one directory level of a commit's snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeObject {
    pub sha: String,
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

/// One name in a tree: either a sub-tree or a blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEntry {
    /// Single path segment, not a full path
    pub path: String,
    #[serde(rename = "type")]
    pub kind: TreeEntryKind,
    pub sha: String,
}

/// Type of a tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeEntryKind {
    Tree,
    Blob,
    /// Submodule pointers ("commit") and anything the API adds later
    #[serde(other)]
    Other,
}

impl std::fmt::Display for TreeEntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeEntryKind::Tree => write!(f, "tree"),
            TreeEntryKind::Blob => write!(f, "blob"),
            TreeEntryKind::Other => write!(f, "other"),
        }
    }
}

/// A blob object; content is transport-encoded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlobObject {
    pub sha: String,
    /// Base64 with embedded newlines, as GitHub returns it
    pub content: String,
    pub encoding: String,
    #[serde(default)]
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_listing_deserialization() {
        let json = r#"[
            {"name": "v1.0", "commit": {"sha": "abc123", "url": "https://api.github.com/x"}, "zipball_url": "z", "tarball_url": "t"},
            {"name": "v2.0", "commit": {"sha": "def456", "url": "https://api.github.com/y"}, "zipball_url": "z", "tarball_url": "t"}
        ]"#;
        let tags: Vec<TagInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "v1.0");
        assert_eq!(tags[1].commit.sha, "def456");
    }

    #[test]
    fn test_commit_deserialization() {
        let json = r#"{
            "sha": "abc123",
            "commit": {
                "message": "release",
                "tree": {"sha": "tree789", "url": "https://api.github.com/t"}
            },
            "author": null
        }"#;
        let commit: CommitObject = serde_json::from_str(json).unwrap();
        assert_eq!(commit.sha, "abc123");
        assert_eq!(commit.commit.tree.sha, "tree789");
    }

    #[test]
    fn test_tree_deserialization() {
        let json = r#"{
            "sha": "tree789",
            "tree": [
                {"path": "lib", "mode": "040000", "type": "tree", "sha": "aaa"},
                {"path": "README.md", "mode": "100644", "type": "blob", "sha": "bbb", "size": 12},
                {"path": "vendored", "mode": "160000", "type": "commit", "sha": "ccc"}
            ],
            "truncated": false
        }"#;
        let tree: TreeObject = serde_json::from_str(json).unwrap();
        assert_eq!(tree.tree.len(), 3);
        assert_eq!(tree.tree[0].kind, TreeEntryKind::Tree);
        assert_eq!(tree.tree[1].kind, TreeEntryKind::Blob);
        // Submodule entries parse as Other instead of failing the whole tree
        assert_eq!(tree.tree[2].kind, TreeEntryKind::Other);
    }

    #[test]
    fn test_tree_truncated_defaults_to_false() {
        let json = r#"{"sha": "tree789", "tree": []}"#;
        let tree: TreeObject = serde_json::from_str(json).unwrap();
        assert!(!tree.truncated);
    }

    #[test]
    fn test_blob_deserialization() {
        let json = r#"{
            "sha": "bbb",
            "size": 6,
            "content": "aGVsbG8K\n",
            "encoding": "base64"
        }"#;
        let blob: BlobObject = serde_json::from_str(json).unwrap();
        assert_eq!(blob.encoding, "base64");
        assert_eq!(blob.size, 6);
        assert!(blob.content.contains("aGVsbG8K"));
    }

    #[test]
    fn test_tree_entry_kind_display() {
        assert_eq!(TreeEntryKind::Tree.to_string(), "tree");
        assert_eq!(TreeEntryKind::Blob.to_string(), "blob");
    }
}
