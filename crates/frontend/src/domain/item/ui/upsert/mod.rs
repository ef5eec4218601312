//! Insert/update form.
//!
//! Simplified MVVM split:
//! - view_model.rs: form state, validation and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::UpsertForm;
pub use view_model::UpsertViewModel;
