use async_trait::async_trait;

use crate::models::{RecipeDetail, RecipeSummary};
use anyhow::Result;

/// Anything that can answer recipe searches and detail lookups.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>>;

    async fn get_recipe(&self, id: &str) -> Result<RecipeDetail>;
}
