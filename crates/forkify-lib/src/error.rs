use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("query is empty")]
    EmptyQuery,
    #[error("recipe {0} not found")]
    RecipeNotFound(String),
    #[error("source responded with status {0}")]
    Status(u16),
}
