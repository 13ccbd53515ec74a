//! Folder structure v2 compliance rules.
//!
//! A candidate folder is either a TypeSpec project root or a `stable` /
//! `preview` version folder. Each candidate is matched against the single
//! path shape its plane allows:
//!
//! - management project: `{org}/resource-manager/{Namespace.Name}/{service}`
//! - data project: `{org}/data-plane/{service}`
//! - version folders: the project shape plus a trailing `stable` or `preview`

mod rules;


pub use rules::{check_folder, evaluate, relative_segments, FolderFacts, COMMON_TYPES};
