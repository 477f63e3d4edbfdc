//! Infrastructure: configuration files and process-wide setup.

pub mod config;
