pub mod editor;
pub mod state;
pub mod trigger;

pub use state::{ListState, LoadState};
