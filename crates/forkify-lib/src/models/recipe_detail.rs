use serde::{Deserialize, Serialize};

/// Full recipe record as delivered by a source, before any parsing
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecipeDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
    pub source_url: String,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Cooking time in minutes, when the source knows it
    #[serde(default)]
    pub cooking_time: Option<u32>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let detail: RecipeDetail = serde_json::from_str(
            r#"{"id":"47746","title":"Best Pizza Dough Ever","author":"101 Cookbooks",
                "image_url":"http://img/pizza.jpg","source_url":"http://src/pizza"}"#,
        )
        .unwrap();

        assert_eq!(detail.servings, None);
        assert_eq!(detail.cooking_time, None);
        assert!(detail.ingredients.is_empty());
    }
}
