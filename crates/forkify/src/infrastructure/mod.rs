pub mod config;
pub mod repositories;
pub mod source;
