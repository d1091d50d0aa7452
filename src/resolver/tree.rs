use crate::core::{TagFileError, TagFileResult};
use crate::di::HostingProvider;
use crate::github::types::{BlobObject, TreeEntryKind};
use base64::Engine;
use std::sync::Arc;

/// Locates one file within a commit's tree object graph
///
/// Trees are fetched lazily, one directory level per path segment. Within a
/// single `resolve` call each tree SHA is fetched exactly once.
pub struct TreeResolver {
    provider: Arc<dyn HostingProvider>,
}

impl TreeResolver {
    pub fn new(provider: Arc<dyn HostingProvider>) -> Self {
        Self { provider }
    }

    /// Resolve a slash-delimited path against a root tree
    ///
    /// Returns `Ok(None)` when the path does not lead to a blob: a segment
    /// with no matching entry, a directory at the final segment, or a file
    /// where a directory was needed. That is the normal "file absent at this
    /// tag" outcome, not an error. Fetch failures propagate.
    pub async fn resolve(
        &self,
        owner: &str,
        repo: &str,
        root_tree_sha: &str,
        path: &str,
    ) -> TagFileResult<Option<Vec<u8>>> {
        let segments: Vec<&str> = path.split('/').collect();
        let mut current_sha = root_tree_sha.to_string();

        for (i, segment) in segments.iter().enumerate() {
            let tree = self.provider.get_tree(owner, repo, &current_sha).await?;

            // First name match wins, mirroring the service's own path
            // semantics. Empty segments (leading, trailing, or doubled
            // slashes) match no entry and fall out here.
            let entry = match tree.tree.iter().find(|e| e.path == *segment) {
                Some(entry) => entry,
                None => return Ok(None),
            };

            let at_last_segment = i + 1 == segments.len();
            match entry.kind {
                TreeEntryKind::Tree if !at_last_segment => {
                    current_sha = entry.sha.clone();
                }
                // The path names a directory, not a file
                TreeEntryKind::Tree => return Ok(None),
                TreeEntryKind::Blob if at_last_segment => {
                    let blob = self.provider.get_blob(owner, repo, &entry.sha).await?;
                    return decode_blob(&blob).map(Some);
                }
                // Cannot descend into a file
                TreeEntryKind::Blob => return Ok(None),
                // Submodule pointer; nothing to descend into or fetch
                TreeEntryKind::Other => return Ok(None),
            }
        }

        // split('/') always yields at least one segment, so the loop returns
        Ok(None)
    }
}

/// Decode a blob's transport encoding into raw bytes
///
/// GitHub wraps base64 payloads with newlines; strip them before decoding.
fn decode_blob(blob: &BlobObject) -> TagFileResult<Vec<u8>> {
    if blob.encoding != "base64" {
        return Err(TagFileError::Decode(format!(
            "Unexpected blob encoding: {}",
            blob.encoding
        )));
    }

    base64::engine::general_purpose::STANDARD
        .decode(blob.content.replace('\n', ""))
        .map_err(|e| TagFileError::Decode(format!("Failed to decode blob {}: {}", blob.sha, e)))
}
