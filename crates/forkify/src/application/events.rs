use crate::{
    application::{
        AppContext, Outcome,
        controllers::{
            likes::{control_like, control_restore_likes},
            list::{control_delete_item, control_list, control_update_count},
            recipe::{control_recipe, control_servings},
            search::{control_search, control_search_page},
        },
    },
    domain::entities::recipe::ServingsDirection,
};

/// User and browser events the controllers react to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SearchSubmitted(String),
    ResultsPage(usize),
    HashChanged(String),
    /// Page load, with the location hash if there was one
    Load(Option<String>),
    ServingsDecreased,
    ServingsIncreased,
    AddToList,
    LikeToggled,
    ListItemDeleted(String),
    ListCountChanged(String, f64),
}

pub async fn dispatch(ctx: &AppContext, event: Event) -> Outcome {
    debug!("dispatch {event:?}");

    match event {
        Event::SearchSubmitted(query) => control_search(ctx, &query).await,
        Event::ResultsPage(page) => control_search_page(ctx, page).await,
        Event::HashChanged(hash) => control_recipe(ctx, &hash).await,
        Event::Load(hash) => {
            let outcome = control_restore_likes(ctx).await;
            match hash {
                Some(hash) => control_recipe(ctx, &hash).await,
                None => outcome,
            }
        }
        Event::ServingsDecreased => control_servings(ctx, ServingsDirection::Dec).await,
        Event::ServingsIncreased => control_servings(ctx, ServingsDirection::Inc).await,
        Event::AddToList => control_list(ctx).await,
        Event::LikeToggled => control_like(ctx).await,
        Event::ListItemDeleted(id) => control_delete_item(ctx, &id).await,
        Event::ListCountChanged(id, count) => control_update_count(ctx, &id, count).await,
    }
}
