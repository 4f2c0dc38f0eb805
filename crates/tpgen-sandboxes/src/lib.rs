//! # tpgen-sandboxes
//!
//! CodeSandbox discovery for tpgen: the REST wire client and the
//! paginated, filtered, privacy-gated aggregate listing built on it.
//!
//! The listing contract is fail-closed: the moment a sandbox accepted by
//! the caller's predicate turns out not to be public, the whole call fails
//! and nothing is surfaced. Sandbox listing is read-only; nothing here
//! creates, modifies, or deletes remote sandboxes.

mod api;
mod error;
mod lister;

pub use api::{CodeSandboxApi, PAGE_SIZE, SandboxPage, UrlResolver};
pub use error::{ListError, SandboxError};
pub use lister::{PageSource, SandboxLister};
