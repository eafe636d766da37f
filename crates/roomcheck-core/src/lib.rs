pub mod config;
pub mod exceptions;
mod macros;
pub mod models;
