//! Dependency injection infrastructure
//!
//! The resolvers and service consume the hosting client through the
//! `HostingProvider` trait so tests can substitute in-memory fakes.
//!
//! # Example (Testing)
//! ```
//! use tagfile::di::mocks::MockHostingProvider;
//! use std::sync::Arc;
//!
//! let provider = Arc::new(MockHostingProvider::new());
//! provider.add_tag("v1.0", "commit-sha");
//! ```

pub mod mocks;
pub mod traits;

pub use traits::HostingProvider;
