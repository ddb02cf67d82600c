pub mod config;
pub mod get;
