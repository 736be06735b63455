use crate::{
    application::{AppContext, Outcome},
    domain::entities::list::List,
};

/// "Add to shopping list". The list is created once, from the recipe on
/// screen at that moment; later clicks leave it alone.
pub async fn control_list(ctx: &AppContext) -> Outcome {
    let mut state = ctx.state.lock().await;
    if state.list.is_some() {
        return Outcome::Ignored;
    }
    let Some(recipe) = state.recipe.as_ref() else {
        return Outcome::Ignored;
    };

    let view = ctx.view();
    let mut list = List::new();
    for ingredient in &recipe.ingredients {
        let item = list.add_item(
            ingredient.count,
            ingredient.unit.as_str(),
            ingredient.ingredient.as_str(),
        );
        view.render_item(&item);
    }
    state.list = Some(list);

    Outcome::Committed
}

pub async fn control_delete_item(ctx: &AppContext, id: &str) -> Outcome {
    let mut state = ctx.state.lock().await;
    let Some(list) = state.list.as_mut() else {
        return Outcome::Ignored;
    };

    match list.delete_item(id) {
        Some(_) => {
            ctx.view().delete_item(id);
            Outcome::Committed
        }
        None => Outcome::Ignored,
    }
}

pub async fn control_update_count(ctx: &AppContext, id: &str, count: f64) -> Outcome {
    let mut state = ctx.state.lock().await;
    let Some(list) = state.list.as_mut() else {
        return Outcome::Ignored;
    };

    if list.update_count(id, count) {
        Outcome::Committed
    } else {
        Outcome::Ignored
    }
}
