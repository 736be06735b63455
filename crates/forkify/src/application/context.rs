use std::sync::Arc;

use forkify_lib::prelude::RecipeSource;
use tokio::sync::Mutex;

use crate::{
    application::{generation::RequestGeneration, view::View},
    domain::{
        entities::{likes::Likes, list::List, recipe::Recipe, search::Search},
        repositories::storage::Storage,
    },
};

const DEFAULT_RESULTS_PER_PAGE: usize = 10;

/// Models owned for the lifetime of a session, each filled on first use.
#[derive(Default)]
pub struct State {
    pub search: Option<Search>,
    pub recipe: Option<Recipe>,
    pub list: Option<List>,
    pub likes: Option<Likes>,
}

/// Everything a controller needs, built once at startup and passed by
/// reference. `state` is never locked across a fetch.
pub struct AppContext {
    pub(crate) source: Arc<dyn RecipeSource>,
    pub(crate) storage: Arc<dyn Storage>,
    pub(crate) view: Arc<dyn View>,
    pub(crate) state: Mutex<State>,
    pub(crate) search_generation: RequestGeneration,
    pub(crate) recipe_generation: RequestGeneration,
    pub(crate) results_per_page: usize,
}

impl AppContext {
    pub fn new(
        source: Arc<dyn RecipeSource>,
        storage: Arc<dyn Storage>,
        view: Arc<dyn View>,
    ) -> Self {
        Self {
            source,
            storage,
            view,
            state: Mutex::new(State::default()),
            search_generation: RequestGeneration::new(),
            recipe_generation: RequestGeneration::new(),
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
        }
    }

    pub fn with_results_per_page(mut self, results_per_page: usize) -> Self {
        self.results_per_page = results_per_page.max(1);
        self
    }

    pub fn state(&self) -> &Mutex<State> {
        &self.state
    }

    pub fn view(&self) -> &dyn View {
        self.view.as_ref()
    }
}
