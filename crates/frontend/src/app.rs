use leptos::prelude::*;

use crate::domain::item::ui::{
    AdvanceQueryForm, AdvanceResultsTable, QueryForm, ResultsTable, UpsertForm,
};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::Header;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <Header />
        <UpsertForm />
        <QueryForm />
        <ResultsTable />
        <AdvanceQueryForm />
        <AdvanceResultsTable />
    }
}
