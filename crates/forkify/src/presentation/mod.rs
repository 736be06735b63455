pub mod shell;
pub mod terminal;
