//! Stub collaborators shared by the unit tests.

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use forkify_lib::prelude::{Error, RecipeDetail, RecipeSource, RecipeSummary};
use rand::{Rng, distr::Alphanumeric};
use tokio::sync::Notify;

use crate::{
    application::{AppContext, LoaderTarget, View},
    domain::{
        entities::{likes::Like, list::Item, recipe::Recipe},
        repositories::storage::{Storage, StorageError},
    },
    infrastructure::repositories::storage::MemoryStorage,
};

#[derive(Default)]
pub(crate) struct StubSource {
    results: HashMap<String, Vec<RecipeSummary>>,
    recipes: HashMap<String, RecipeDetail>,
    gates: HashMap<String, Arc<Notify>>,
    failing: bool,
}

impl StubSource {
    pub fn with_results(mut self, query: &str, results: Vec<RecipeSummary>) -> Self {
        self.results.insert(query.to_string(), results);
        self
    }

    pub fn with_recipe(mut self, detail: RecipeDetail) -> Self {
        self.recipes.insert(detail.id.clone(), detail);
        self
    }

    /// Hold requests for `key` (query or recipe id) until `gate` is notified
    pub fn gated(mut self, key: &str, gate: Arc<Notify>) -> Self {
        self.gates.insert(key.to_string(), gate);
        self
    }

    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    async fn wait(&self, key: &str) -> Result<()> {
        if let Some(gate) = self.gates.get(key) {
            gate.notified().await;
        }
        if self.failing {
            return Err(anyhow!("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeSource for StubSource {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        self.wait(query).await?;
        Ok(self.results.get(query).cloned().unwrap_or_default())
    }

    async fn get_recipe(&self, id: &str) -> Result<RecipeDetail> {
        self.wait(id).await?;
        self.recipes
            .get(id)
            .cloned()
            .ok_or_else(|| Error::RecipeNotFound(id.to_string()).into())
    }
}

pub(crate) fn summaries(n: usize) -> Vec<RecipeSummary> {
    (0..n)
        .map(|i| RecipeSummary {
            id: format!("r{i}"),
            title: format!("Recipe {i}"),
            author: "Closet Cooking".to_string(),
            image_url: format!("http://img/{i}.jpg"),
        })
        .collect()
}

pub(crate) fn detail(id: &str, ingredients: &[&str]) -> RecipeDetail {
    RecipeDetail {
        id: id.to_string(),
        title: format!("Recipe {id}"),
        author: "The Pioneer Woman".to_string(),
        image_url: format!("http://img/{id}.jpg"),
        source_url: format!("http://src/{id}"),
        servings: None,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        cooking_time: None,
    }
}

/// Records every view call as a short string
#[derive(Default)]
pub(crate) struct RecordingView {
    calls: Mutex<Vec<String>>,
}

impl RecordingView {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl View for RecordingView {
    fn render_loader(&self, target: LoaderTarget) {
        self.record(format!("render_loader:{target:?}"));
    }

    fn clear_loader(&self) {
        self.record("clear_loader".to_string());
    }

    fn clear_input(&self) {
        self.record("clear_input".to_string());
    }

    fn clear_results(&self) {
        self.record("clear_results".to_string());
    }

    fn render_results(&self, results: &[RecipeSummary], page: usize, pages: usize) {
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        self.record(format!("render_results:{}:{page}/{pages}", ids.join(",")));
    }

    fn highlight_selected(&self, id: &str) {
        self.record(format!("highlight_selected:{id}"));
    }

    fn clear_recipe(&self) {
        self.record("clear_recipe".to_string());
    }

    fn render_recipe(&self, recipe: &Recipe, liked: bool) {
        self.record(format!(
            "render_recipe:{}:liked={liked}:servings={}",
            recipe.id,
            recipe.servings()
        ));
    }

    fn update_servings_ingredients(&self, recipe: &Recipe) {
        self.record(format!("update_servings:{}", recipe.servings()));
    }

    fn render_item(&self, item: &Item) {
        self.record(format!("render_item:{}", item.ingredient));
    }

    fn delete_item(&self, id: &str) {
        self.record(format!("delete_item:{id}"));
    }

    fn toggle_like_btn(&self, liked: bool) {
        self.record(format!("toggle_like_btn:{liked}"));
    }

    fn render_like(&self, like: &Like) {
        self.record(format!("render_like:{}", like.id));
    }

    fn delete_like(&self, id: &str) {
        self.record(format!("delete_like:{id}"));
    }

    fn toggle_like_menu(&self, visible: bool) {
        self.record(format!("toggle_like_menu:{visible}"));
    }

    fn alert(&self, message: &str) {
        self.record(format!("alert:{message}"));
    }
}

/// Storage whose writes always fail
pub(crate) struct FailingStorage;

impl Storage for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }
}

pub(crate) fn context(
    source: StubSource,
) -> (AppContext, Arc<RecordingView>, Arc<MemoryStorage>) {
    let view = Arc::new(RecordingView::default());
    let storage = Arc::new(MemoryStorage::default());
    let ctx = AppContext::new(Arc::new(source), storage.clone(), view.clone());

    (ctx, view, storage)
}

/// Fresh path inside a unique temporary directory
pub(crate) fn temp_path(name: &str) -> PathBuf {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();

    std::env::temp_dir()
        .join(format!("forkify-test-{suffix}"))
        .join(name)
}
