use crate::{
    application::{AppContext, LoaderTarget, Outcome},
    domain::entities::recipe::{Recipe, ServingsDirection},
};

/// Load the recipe named by the location hash, parse it and render it.
pub async fn control_recipe(ctx: &AppContext, hash: &str) -> Outcome {
    let id = hash.trim().trim_start_matches('#');
    if id.is_empty() {
        return Outcome::Ignored;
    }

    let view = ctx.view();
    view.clear_recipe();
    view.render_loader(LoaderTarget::Recipe);

    if ctx.state.lock().await.search.is_some() {
        view.highlight_selected(id);
    }

    let ticket = ctx.recipe_generation.begin();
    let mut recipe = Recipe::new(id);
    let fetched = recipe.fetch_detail(ctx.source.as_ref()).await;

    let mut state = ctx.state.lock().await;
    if !ctx.recipe_generation.is_current(ticket) {
        debug!("recipe {id} was superseded, dropping it");
        return Outcome::Superseded;
    }

    if let Err(e) = fetched {
        error!("loading recipe {id} failed: {e}");
        view.clear_loader();
        view.alert("Error processing recipe");
        return Outcome::Failed;
    }

    recipe.parse_ingredients();
    recipe.calc_time();
    recipe.calc_servings();

    let liked = state
        .likes
        .as_ref()
        .is_some_and(|likes| likes.is_liked(id));
    view.clear_loader();
    view.render_recipe(&recipe, liked);
    state.recipe = Some(recipe);

    Outcome::Committed
}

/// Servings +/- buttons. Decreasing stops at one serving.
pub async fn control_servings(ctx: &AppContext, direction: ServingsDirection) -> Outcome {
    let mut state = ctx.state.lock().await;
    let Some(recipe) = state.recipe.as_mut() else {
        return Outcome::Ignored;
    };

    if direction == ServingsDirection::Dec && recipe.servings() <= 1 {
        return Outcome::Ignored;
    }
    if !recipe.update_servings(direction) {
        return Outcome::Ignored;
    }
    ctx.view().update_servings_ingredients(recipe);

    Outcome::Committed
}

/// Step the open recipe to `target` servings, rendering only the result.
pub async fn control_scale_servings(ctx: &AppContext, target: u32) -> Outcome {
    let mut state = ctx.state.lock().await;
    let Some(recipe) = state.recipe.as_mut() else {
        return Outcome::Ignored;
    };
    if target == 0 || recipe.servings() == target {
        return Outcome::Ignored;
    }

    while recipe.servings() != target {
        let direction = if recipe.servings() < target {
            ServingsDirection::Inc
        } else {
            ServingsDirection::Dec
        };
        if !recipe.update_servings(direction) {
            break;
        }
    }
    ctx.view().update_servings_ingredients(recipe);

    Outcome::Committed
}
