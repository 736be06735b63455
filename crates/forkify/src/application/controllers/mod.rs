//! One procedure per kind of user or browser event. Each reads the event
//! payload, drives the models in [`State`](super::State) and tells the view.

pub mod likes;
pub mod list;
pub mod recipe;
pub mod search;
