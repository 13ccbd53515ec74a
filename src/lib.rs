pub mod classify;
pub mod commands;
pub mod compliance;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod readme;
pub mod report;
pub mod scan;
