//! # tpgen-core
//!
//! Shared domain types for tpgen:
//! - Sandbox snapshots and privacy levels as returned by CodeSandbox
//! - Assignment coordinates (DR unit, TP/AT activity, semester)
//! - The question/link pair the report generator consumes

pub mod assignment;
pub mod sandbox;

pub use assignment::{ActivityKind, AssignmentCoordinates};
pub use sandbox::{Sandbox, SandboxLink, SandboxPrivacy};
