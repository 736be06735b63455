pub mod recipe_summary;
pub use recipe_summary::*;

pub mod recipe_detail;
pub use recipe_detail::*;
