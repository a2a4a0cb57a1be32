pub mod config;
pub mod kv;
pub mod scan_log;
pub mod table;
pub mod wait_file;
