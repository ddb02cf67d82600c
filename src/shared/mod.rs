pub mod config;
pub mod env_var;
pub mod logging;
pub mod text;
