use serde::{Deserialize, Serialize};

/// A single search hit, normalized across sources
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
}
