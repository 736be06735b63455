pub use crate::error::Error;
pub use crate::models::{RecipeDetail, RecipeSummary};
pub use crate::traits::RecipeSource;
