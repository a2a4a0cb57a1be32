//! Stepkit library - reusable UI test step helpers.
//!
//! Each helper is an independent, single-shot procedure: a runner injects
//! parameters, the helper returns a structured result the runner writes into
//! its named output mapping. The core is the table cell resolver in
//! [`table`]; [`files`] and [`store`] hold the file-wait, log-scan, and
//! key-value helpers.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod files;
pub mod outputs;
pub mod store;
pub mod table;
