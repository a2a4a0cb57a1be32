//! Local-file helpers: waiting on downloads and scanning logs.

pub mod logscan;
pub mod wait;
