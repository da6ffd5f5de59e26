//! Command handlers.

pub mod config_cmd;
pub mod generate;
pub mod sample;
pub mod validate;
