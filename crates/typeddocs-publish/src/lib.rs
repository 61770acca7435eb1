//! Publishes the typed-language demo page into the `docs/` directory.
//!
//! Copies a fixed table of build artifacts (bundles, stylesheets, the demo page)
//! into the docs directory, renaming where the table says so.

pub mod publisher;
pub mod spec;

pub use publisher::{PublishConfig, PublishError, PublishResult, Publisher};
pub use spec::{resolve_source, CopyEntry, CopySpec};
