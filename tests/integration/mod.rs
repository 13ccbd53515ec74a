//! Integration tests for foldscan
//!
//! These tests build small specification trees on disk and run the scanner,
//! report writers and config loading against them.

pub mod full_scan;
pub mod helpers;
pub mod organization_scan;
