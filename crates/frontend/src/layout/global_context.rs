use leptos::prelude::*;

use contracts::domain::item::{AdvanceQueryResponse, QueryResponse};

/// App-wide state shared between the forms and the result tables.
///
/// Each slot is owned by the form that writes it and replaced wholesale on a
/// successful request; the tables and the confirmation line only read.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Id returned by the most recent successful upsert. `None` while the
    /// form is dirty or after a failed save.
    pub last_item_id: RwSignal<Option<i64>>,
    /// Result of the most recent successful simple query.
    pub query_result: RwSignal<Option<QueryResponse>>,
    /// Result page of the most recent successful advanced query.
    pub advance_result: RwSignal<Option<AdvanceQueryResponse>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            last_item_id: RwSignal::new(None),
            query_result: RwSignal::new(None),
            advance_result: RwSignal::new(None),
        }
    }

    /// Record a successful save so the confirmation line and the
    /// category-refresh effects see the new id.
    pub fn record_saved_item(&self, id: i64) {
        self.last_item_id.set(Some(id));
    }

    /// Drop the saved-item confirmation. No-op when nothing is recorded,
    /// so per-keystroke calls do not re-notify subscribers.
    pub fn clear_saved_item(&self) {
        if self.last_item_id.with_untracked(|id| id.is_some()) {
            self.last_item_id.set(None);
        }
    }
}
