use forkify_lib::prelude::{RecipeSource, RecipeSummary};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("network error: {0:#}")]
    Network(anyhow::Error),
}

impl From<anyhow::Error> for SearchError {
    fn from(e: anyhow::Error) -> Self {
        Self::Network(e)
    }
}

/// One keyword query and the summaries it matched.
#[derive(Debug, Clone)]
pub struct Search {
    query: String,
    results: Vec<RecipeSummary>,
}

impl Search {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: vec![],
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    /// Single attempt against the source. On failure `results` stays empty.
    pub async fn fetch_results(&mut self, source: &dyn RecipeSource) -> Result<(), SearchError> {
        self.results.clear();

        let results = source.search(&self.query).await.inspect_err(|e| {
            warn!("search for {:?} failed: {e}", self.query);
        })?;
        debug!("search for {:?} matched {} recipes", self.query, results.len());

        self.results = results;

        Ok(())
    }

    /// Results on a 1-based page, empty when the page is out of range.
    pub fn page(&self, page: usize, per_page: usize) -> &[RecipeSummary] {
        if page == 0 || per_page == 0 {
            return &[];
        }

        let start = (page - 1).saturating_mul(per_page);
        if start >= self.results.len() {
            return &[];
        }
        let end = (start + per_page).min(self.results.len());

        &self.results[start..end]
    }

    pub fn pages(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        self.results.len().div_ceil(per_page)
    }
}
