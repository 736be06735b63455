use crate::{
    application::{AppContext, Outcome},
    domain::entities::likes::Likes,
};

/// Heart button on the open recipe: like it, or unlike it if it already is.
pub async fn control_like(ctx: &AppContext) -> Outcome {
    let mut state = ctx.state.lock().await;
    let Some(recipe) = state.recipe.as_ref() else {
        return Outcome::Ignored;
    };
    let (id, title, author, img) = (
        recipe.id.clone(),
        recipe.title.clone(),
        recipe.author.clone(),
        recipe.img.clone(),
    );

    let view = ctx.view();
    let likes = state
        .likes
        .get_or_insert_with(|| Likes::restore(ctx.storage.clone()));

    if !likes.is_liked(&id) {
        let like = likes.add_like(id, title, author, img);
        view.toggle_like_btn(true);
        view.render_like(&like);
    } else {
        likes.delete_like(&id);
        view.toggle_like_btn(false);
        view.delete_like(&id);
    }
    view.toggle_like_menu(likes.num_likes() > 0);

    Outcome::Committed
}

/// Page load: bring back likes from storage and show them.
pub async fn control_restore_likes(ctx: &AppContext) -> Outcome {
    let likes = Likes::restore(ctx.storage.clone());

    let view = ctx.view();
    view.toggle_like_menu(likes.num_likes() > 0);
    for like in likes.likes() {
        view.render_like(like);
    }

    ctx.state.lock().await.likes = Some(likes);

    Outcome::Committed
}
