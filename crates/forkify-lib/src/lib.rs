pub mod error;
pub mod models;
pub mod prelude;
pub mod traits;

/// Version of the source contract, reported by the CLI
pub static LIB_VERSION: &str = env!("CARGO_PKG_VERSION");
