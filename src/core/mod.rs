pub mod error;

pub use error::{TagFileError, TagFileResult};
