//! Build-configuration README analysis.
//!
//! Management-plane READMEs declare a default tag in their "Basic
//! Information" section and list the Swagger files for each tag in fenced
//! yaml blocks. The files behind one tag are expected to come from a single
//! API version folder.

pub mod consistency;
pub mod extraction;

pub use consistency::{check_version_consistency, Skip, VersionCheck};
