//! Tag and tree resolution
//!
//! `TagResolver` maps a repository's tags to their commits; `TreeResolver`
//! walks a commit's tree object graph to one file's blob. Both are stateless
//! between calls and go through the `HostingProvider` seam.

pub mod tags;
pub mod tree;

pub use tags::{Commit, Tag, TagResolver};
pub use tree::TreeResolver;
