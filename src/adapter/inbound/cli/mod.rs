//! CLI module graph.

pub mod auth;
pub mod cache;
pub mod command;
pub mod config;
pub mod display;
pub mod export;
pub mod inflation;
pub mod orders;
pub mod output;
pub mod paths;
pub mod run;
pub mod stats;
pub mod suggest;
pub mod sync;
pub mod wrapped;
