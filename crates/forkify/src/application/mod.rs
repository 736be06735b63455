pub mod context;
pub mod controllers;
pub mod events;
pub mod generation;
pub mod view;

pub use context::{AppContext, State};
pub use events::{Event, dispatch};
pub use view::{LoaderTarget, View};

/// What a controller did with the event it was handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State was updated and the view told about it
    Committed,
    /// A newer request of the same kind started first, result dropped
    Superseded,
    /// The data source failed, user was alerted
    Failed,
    /// Nothing to do for this event in the current state
    Ignored,
}
