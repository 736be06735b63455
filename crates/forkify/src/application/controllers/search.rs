use crate::{
    application::{AppContext, LoaderTarget, Outcome},
    domain::entities::search::Search,
};

pub async fn control_search(ctx: &AppContext, query: &str) -> Outcome {
    let query = query.trim();
    if query.is_empty() {
        return Outcome::Ignored;
    }

    let view = ctx.view();
    view.clear_input();
    view.clear_results();
    view.render_loader(LoaderTarget::Results);

    let ticket = ctx.search_generation.begin();
    let mut search = Search::new(query);
    let fetched = search.fetch_results(ctx.source.as_ref()).await;

    let mut state = ctx.state.lock().await;
    if !ctx.search_generation.is_current(ticket) {
        debug!("search for {query:?} was superseded, dropping its results");
        return Outcome::Superseded;
    }

    let outcome = match fetched {
        Ok(()) => {
            view.clear_loader();
            let per_page = ctx.results_per_page;
            view.render_results(search.page(1, per_page), 1, search.pages(per_page));
            Outcome::Committed
        }
        Err(e) => {
            error!("search for {query:?} failed: {e}");
            view.alert("Recipes loading error");
            view.clear_loader();
            Outcome::Failed
        }
    };
    state.search = Some(search);

    outcome
}

/// Re-render the current results at another page, without fetching.
pub async fn control_search_page(ctx: &AppContext, page: usize) -> Outcome {
    let state = ctx.state.lock().await;
    let Some(search) = state.search.as_ref() else {
        return Outcome::Ignored;
    };

    let per_page = ctx.results_per_page;
    let view = ctx.view();
    view.clear_results();
    view.render_results(search.page(page, per_page), page, search.pages(per_page));

    Outcome::Committed
}
