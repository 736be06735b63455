use forkify_lib::prelude::RecipeSummary;

use crate::{
    application::{LoaderTarget, View},
    domain::entities::{
        likes::Like,
        list::Item,
        recipe::{Ingredient, Recipe},
    },
};

const FRACTIONS: [(f64, &str); 9] = [
    (1.0 / 8.0, "1/8"),
    (1.0 / 4.0, "1/4"),
    (1.0 / 3.0, "1/3"),
    (3.0 / 8.0, "3/8"),
    (1.0 / 2.0, "1/2"),
    (5.0 / 8.0, "5/8"),
    (2.0 / 3.0, "2/3"),
    (3.0 / 4.0, "3/4"),
    (7.0 / 8.0, "7/8"),
];
const FRACTION_TOLERANCE: f64 = 0.02;

/// Render a count the way a recipe card would, e.g. `2 1/2` or `0.15`.
pub fn format_count(count: Option<f64>) -> String {
    let Some(count) = count else {
        return String::new();
    };

    let mut whole = count.trunc();
    let rest = count - whole;
    if rest < FRACTION_TOLERANCE && whole > 0.0 {
        return format!("{whole}");
    }
    if 1.0 - rest < FRACTION_TOLERANCE {
        whole += 1.0;
        return format!("{whole}");
    }

    match FRACTIONS
        .iter()
        .find(|(value, _)| (rest - value).abs() < FRACTION_TOLERANCE)
    {
        Some((_, fraction)) if whole == 0.0 => fraction.to_string(),
        Some((_, fraction)) => format!("{whole} {fraction}"),
        None => {
            let rounded = format!("{count:.2}");
            rounded.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

fn format_ingredient(ingredient: &Ingredient) -> String {
    [
        format_count(ingredient.count),
        ingredient.unit.clone(),
        ingredient.ingredient.clone(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

fn format_time(recipe: &Recipe) -> Option<String> {
    match (recipe.cooking_time, recipe.source_time) {
        (Some(time), Some(source)) if source != time => {
            Some(format!("about {time} minutes ({source} by the source)"))
        }
        (Some(time), _) => Some(format!("about {time} minutes")),
        (None, Some(source)) => Some(format!("{source} minutes by the source")),
        (None, None) => None,
    }
}

/// Plain stdout rendering for the CLI.
#[derive(Debug, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }

    fn print_ingredients(&self, recipe: &Recipe) {
        println!("  servings: {}", recipe.servings());
        for ingredient in &recipe.ingredients {
            println!("    - {}", format_ingredient(ingredient));
        }
    }
}

impl View for TerminalView {
    fn render_loader(&self, target: LoaderTarget) {
        match target {
            LoaderTarget::Results => eprintln!("searching..."),
            LoaderTarget::Recipe => eprintln!("loading recipe..."),
        }
    }

    fn clear_loader(&self) {}

    fn clear_input(&self) {}

    fn clear_results(&self) {}

    fn render_results(&self, results: &[RecipeSummary], page: usize, pages: usize) {
        if results.is_empty() {
            println!("no recipes found");
            return;
        }
        for result in results {
            println!("  {:>8}  {} ({})", result.id, result.title, result.author);
        }
        if pages > 1 {
            println!("  page {page} of {pages}");
        }
    }

    fn highlight_selected(&self, id: &str) {
        debug!("selected {id}");
    }

    fn clear_recipe(&self) {}

    fn render_recipe(&self, recipe: &Recipe, liked: bool) {
        let heart = if liked { "♥" } else { "♡" };
        println!("{heart} {} by {}", recipe.title, recipe.author);
        println!("  {}", recipe.url);
        if let Some(time) = format_time(recipe) {
            println!("  {time}");
        }
        self.print_ingredients(recipe);
    }

    fn update_servings_ingredients(&self, recipe: &Recipe) {
        self.print_ingredients(recipe);
    }

    fn render_item(&self, item: &Item) {
        let count = format_count(item.count);
        println!("  [{}] {count} {} {}", item.id, item.unit, item.ingredient);
    }

    fn delete_item(&self, id: &str) {
        println!("removed {id} from the shopping list");
    }

    fn toggle_like_btn(&self, liked: bool) {
        println!("{}", if liked { "♥ liked" } else { "♡ unliked" });
    }

    fn render_like(&self, like: &Like) {
        println!("  ♥ {:>8}  {} ({})", like.id, like.title, like.author);
    }

    fn delete_like(&self, id: &str) {
        debug!("like {id} removed");
    }

    fn toggle_like_menu(&self, visible: bool) {
        if !visible {
            println!("no liked recipes");
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::domain::entities::recipe::ParseOutcome;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(None), "");
        assert_eq!(format_count(Some(2.0)), "2");
        assert_eq!(format_count(Some(2.5)), "2 1/2");
        assert_eq!(format_count(Some(0.25)), "1/4");
        assert_eq!(format_count(Some(1.0 / 3.0)), "1/3");
        assert_eq!(format_count(Some(0.999)), "1");
        assert_eq!(format_count(Some(0.15)), "0.15");
        assert_eq!(format_count(Some(0.01)), "0.01");
    }

    #[test]
    fn test_format_ingredient_skips_empty_parts() {
        let ingredient = Ingredient {
            count: Some(3.0),
            unit: String::new(),
            ingredient: "eggs".to_string(),
            outcome: ParseOutcome::Parsed,
        };

        assert_eq!(format_ingredient(&ingredient), "3 eggs");
        assert_eq!(
            format_ingredient(&Ingredient::fallback("salt to taste")),
            "salt to taste"
        );
    }

    #[test]
    fn test_format_time_shows_source_time() {
        let mut recipe = Recipe::new("1");
        assert_eq!(format_time(&recipe), None);

        recipe.cooking_time = Some(45);
        assert_eq!(format_time(&recipe).as_deref(), Some("about 45 minutes"));

        recipe.source_time = Some(45);
        assert_eq!(format_time(&recipe).as_deref(), Some("about 45 minutes"));

        recipe.source_time = Some(20);
        assert_eq!(
            format_time(&recipe).as_deref(),
            Some("about 45 minutes (20 by the source)")
        );
    }
}
