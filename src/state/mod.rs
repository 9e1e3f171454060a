//! Application state module

mod app_state;
pub mod content;
mod form;
mod submission;

pub use app_state::*;
pub use form::*;
pub use submission::*;
