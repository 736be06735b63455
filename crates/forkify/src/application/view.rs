use forkify_lib::prelude::RecipeSummary;

use crate::domain::entities::{likes::Like, list::Item, recipe::Recipe};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderTarget {
    Results,
    Recipe,
}

/// Rendering side of the application. Controllers call these after every
/// state change; implementations decide how things look.
pub trait View: Send + Sync {
    fn render_loader(&self, target: LoaderTarget);
    fn clear_loader(&self);

    fn clear_input(&self);
    fn clear_results(&self);
    /// `page` is 1-based, `pages` is the total page count
    fn render_results(&self, results: &[RecipeSummary], page: usize, pages: usize);
    fn highlight_selected(&self, id: &str);

    fn clear_recipe(&self);
    fn render_recipe(&self, recipe: &Recipe, liked: bool);
    fn update_servings_ingredients(&self, recipe: &Recipe);

    fn render_item(&self, item: &Item);
    fn delete_item(&self, id: &str);

    fn toggle_like_btn(&self, liked: bool);
    fn render_like(&self, like: &Like);
    fn delete_like(&self, id: &str);
    fn toggle_like_menu(&self, visible: bool);

    /// Blocking notification for failures
    fn alert(&self, message: &str);
}
