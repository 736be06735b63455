use forkify_lib::prelude::RecipeSource;
use thiserror::Error;

use crate::domain::services::ingredient::parse_ingredient;

/// Servings assumed when the source does not report any
pub const DEFAULT_SERVINGS: u32 = 4;
/// Cooking time heuristic, in minutes per ingredient
pub const MINUTES_PER_INGREDIENT: u32 = 15;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("network error: {0:#}")]
    Network(anyhow::Error),
}

impl From<anyhow::Error> for RecipeError {
    fn from(e: anyhow::Error) -> Self {
        Self::Network(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// A leading quantity was recognized
    Parsed,
    /// The line was kept as-is with no count
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
    pub outcome: ParseOutcome,
}

impl Ingredient {
    pub fn fallback(line: &str) -> Self {
        Self {
            count: None,
            unit: String::new(),
            ingredient: line.to_string(),
            outcome: ParseOutcome::Fallback,
        }
    }
}

/// How many ingredient lines parsed cleanly and how many fell back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseCoverage {
    pub parsed: usize,
    pub fallback: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsDirection {
    Inc,
    Dec,
}

#[derive(Debug, Clone, Default)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    pub original_servings: u32,
    pub cooking_time: Option<u32>,
    /// Time reported by the source, kept for display only
    pub source_time: Option<u32>,
    pub raw_ingredients: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    servings: Option<u32>,
}

impl Recipe {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            original_servings: DEFAULT_SERVINGS,
            ..Default::default()
        }
    }

    pub async fn fetch_detail(&mut self, source: &dyn RecipeSource) -> Result<(), RecipeError> {
        let detail = source.get_recipe(&self.id).await.inspect_err(|e| {
            warn!("failed to fetch recipe {}: {e}", self.id);
        })?;

        self.title = detail.title;
        self.author = detail.author;
        self.img = detail.image_url;
        self.url = detail.source_url;
        self.raw_ingredients = detail.ingredients;
        self.original_servings = detail
            .servings
            .filter(|servings| *servings > 0)
            .unwrap_or(DEFAULT_SERVINGS);
        self.source_time = detail.cooking_time;

        Ok(())
    }

    /// Replace `ingredients` with the parse of every raw line.
    pub fn parse_ingredients(&mut self) -> ParseCoverage {
        let mut coverage = ParseCoverage::default();

        self.ingredients = self
            .raw_ingredients
            .iter()
            .map(|line| parse_ingredient(line))
            .inspect(|ingredient| match ingredient.outcome {
                ParseOutcome::Parsed => coverage.parsed += 1,
                ParseOutcome::Fallback => coverage.fallback += 1,
            })
            .collect();

        if coverage.fallback > 0 {
            debug!(
                "recipe {}: {} of {} ingredient lines kept without a quantity",
                self.id,
                coverage.fallback,
                self.ingredients.len()
            );
        }

        coverage
    }

    pub fn calc_time(&mut self) -> u32 {
        let time = self.ingredients.len() as u32 * MINUTES_PER_INGREDIENT;
        self.cooking_time = Some(time);
        time
    }

    pub fn calc_servings(&mut self) -> u32 {
        *self.servings.get_or_insert(self.original_servings)
    }

    pub fn servings(&self) -> u32 {
        self.servings.unwrap_or(self.original_servings)
    }

    /// Step servings by one and rescale every known count with it. Returns
    /// `false` without touching anything when decreasing below one serving.
    pub fn update_servings(&mut self, direction: ServingsDirection) -> bool {
        let current = self.servings();
        let next = match direction {
            ServingsDirection::Inc => current + 1,
            ServingsDirection::Dec if current > 1 => current - 1,
            ServingsDirection::Dec => return false,
        };

        let factor = f64::from(next) / f64::from(current);
        for count in self.ingredients.iter_mut().filter_map(|i| i.count.as_mut()) {
            *count *= factor;
        }
        self.servings = Some(next);

        true
    }
}
