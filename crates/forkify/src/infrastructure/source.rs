use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use forkify_lib::prelude::{Error, RecipeDetail, RecipeSource, RecipeSummary};
use serde::{Deserialize, de::DeserializeOwned};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    recipes: Vec<RecipeSummaryDto>,
}

#[derive(Debug, Deserialize)]
struct RecipeSummaryDto {
    recipe_id: String,
    title: String,
    publisher: String,
    image_url: String,
}

impl From<RecipeSummaryDto> for RecipeSummary {
    fn from(dto: RecipeSummaryDto) -> Self {
        Self {
            id: dto.recipe_id,
            title: dto.title,
            author: dto.publisher,
            image_url: dto.image_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecipeResponse {
    recipe: Option<RecipeDto>,
}

#[derive(Debug, Deserialize)]
struct RecipeDto {
    recipe_id: String,
    title: String,
    publisher: String,
    image_url: String,
    source_url: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    servings: Option<u32>,
    #[serde(default)]
    cooking_time: Option<u32>,
}

impl From<RecipeDto> for RecipeDetail {
    fn from(dto: RecipeDto) -> Self {
        Self {
            id: dto.recipe_id,
            title: dto.title,
            author: dto.publisher,
            image_url: dto.image_url,
            source_url: dto.source_url,
            servings: dto.servings,
            ingredients: dto.ingredients,
            cooking_time: dto.cooking_time,
        }
    }
}

/// Client for the forkify recipe API.
#[derive(Clone)]
pub struct ForkifyApi {
    base_url: String,
    client: reqwest::Client,
}

impl ForkifyApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("forkify/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{path}", self.base_url);
        debug!("GET {url} {query:?}");

        let res = self.client.get(&url).query(query).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()).into());
        }

        Ok(res.json().await?)
    }
}

#[async_trait]
impl RecipeSource for ForkifyApi {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        if query.trim().is_empty() {
            return Err(Error::EmptyQuery.into());
        }

        let res: SearchResponse = self.get("search", &[("q", query)]).await?;

        Ok(res.recipes.into_iter().map(Into::into).collect())
    }

    async fn get_recipe(&self, id: &str) -> Result<RecipeDetail> {
        let res: RecipeResponse = self.get("get", &[("rId", id)]).await?;

        res.recipe
            .map(Into::into)
            .ok_or_else(|| Error::RecipeNotFound(id.to_string()).into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decode_search_response() {
        let raw = r#"{
            "count": 2,
            "recipes": [
                {"publisher": "101 Cookbooks", "title": "Best Pizza Dough Ever",
                 "source_url": "http://www.101cookbooks.com/archives/001199.html",
                 "recipe_id": "47746", "image_url": "http://forkify-api.herokuapp.com/images/best_pizza_dough_recipe1b20.jpg",
                 "social_rank": 100, "publisher_url": "http://www.101cookbooks.com"},
                {"publisher": "The Pioneer Woman", "title": "Deep Dish Fruit Pizza",
                 "source_url": "http://thepioneerwoman.com/cooking/2012/01/fruit-pizza/",
                 "recipe_id": "46956", "image_url": "http://forkify-api.herokuapp.com/images/fruitpizza9a19.jpg",
                 "social_rank": 100, "publisher_url": "http://thepioneerwoman.com"}
            ]
        }"#;

        let res: SearchResponse = serde_json::from_str(raw).unwrap();
        let summaries: Vec<RecipeSummary> = res.recipes.into_iter().map(Into::into).collect();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "47746");
        assert_eq!(summaries[0].author, "101 Cookbooks");
        assert_eq!(summaries[1].title, "Deep Dish Fruit Pizza");
    }

    #[test]
    fn test_decode_recipe_response() {
        let raw = r#"{
            "recipe": {
                "publisher": "101 Cookbooks",
                "ingredients": ["4 1/2 cups (20.25 ounces) unbleached high-gluten, bread, or all-purpose flour, chilled",
                                "1 3/4 teaspoons salt"],
                "source_url": "http://www.101cookbooks.com/archives/001199.html",
                "recipe_id": "47746",
                "image_url": "http://forkify-api.herokuapp.com/images/best_pizza_dough_recipe1b20.jpg",
                "social_rank": 100,
                "publisher_url": "http://www.101cookbooks.com",
                "title": "Best Pizza Dough Ever"
            }
        }"#;

        let res: RecipeResponse = serde_json::from_str(raw).unwrap();
        let detail: RecipeDetail = res.recipe.unwrap().into();

        assert_eq!(detail.id, "47746");
        assert_eq!(detail.ingredients.len(), 2);
        assert_eq!(detail.servings, None);
        assert_eq!(detail.source_url, "http://www.101cookbooks.com/archives/001199.html");
    }

    #[test]
    fn test_decode_missing_recipe() {
        let res: RecipeResponse = serde_json::from_str(r#"{"error": "Couldn't find recipe"}"#).unwrap();

        assert!(res.recipe.is_none());
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected_locally() {
        let api = ForkifyApi::new("http://127.0.0.1:9/api/", Duration::from_secs(1)).unwrap();

        let err = api.search("  ").await.unwrap_err();

        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::EmptyQuery));
        assert_eq!(api.base_url, "http://127.0.0.1:9/api");
    }
}
