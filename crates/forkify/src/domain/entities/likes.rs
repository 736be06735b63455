use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::repositories::storage::{Storage, StorageError};

/// Storage key holding the serialized likes
pub const LIKES_KEY: &str = "likes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

/// Bookmarked recipes, written through to [`Storage`] on every change.
pub struct Likes {
    likes: Vec<Like>,
    storage: Arc<dyn Storage>,
}

impl Likes {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            likes: vec![],
            storage,
        }
    }

    /// Likes as currently held by `storage`.
    pub fn restore(storage: Arc<dyn Storage>) -> Self {
        let mut likes = Self::new(storage);
        likes.read_storage();
        likes
    }

    pub fn likes(&self) -> &[Like] {
        &self.likes
    }

    /// Adding an id that is already liked returns the existing entry.
    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        img: impl Into<String>,
    ) -> Like {
        let id = id.into();
        if let Some(existing) = self.likes.iter().find(|like| like.id == id) {
            return existing.clone();
        }

        let like = Like {
            id,
            title: title.into(),
            author: author.into(),
            img: img.into(),
        };
        self.likes.push(like.clone());
        self.persist();

        like
    }

    /// Unknown ids are ignored and nothing is written.
    pub fn delete_like(&mut self, id: &str) -> Option<Like> {
        let index = self.likes.iter().position(|like| like.id == id)?;
        let like = self.likes.remove(index);
        self.persist();

        Some(like)
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    /// Replace the in-memory likes with what storage holds. Absent or
    /// unreadable data loads as an empty collection.
    pub fn read_storage(&mut self) {
        self.likes = match self.storage.get(LIKES_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("stored likes are corrupt, starting empty: {e}");
                vec![]
            }),
            Ok(None) => vec![],
            Err(e) => {
                warn!("failed to read likes: {e}");
                vec![]
            }
        };

        debug!("restored {} likes", self.likes.len());
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.likes)
            .map_err(StorageError::from)
            .and_then(|raw| self.storage.set(LIKES_KEY, &raw));

        if let Err(e) = result {
            warn!("failed to persist likes: {e}");
        }
    }
}
