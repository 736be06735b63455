pub mod likes;
pub mod list;
pub mod recipe;
pub mod search;
