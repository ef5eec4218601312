use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::item::{QueryRequest, QueryResponse};

use crate::domain::item::api;
use crate::domain::item::ui::{refresh_category_options, ALL_CATEGORIES};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_error::ApiError;
use crate::shared::components::select::Select;
use crate::shared::date_utils::normalize_datetime;

/// Build the `/query` body from the raw form state.
///
/// Blank datetime bounds and the all-categories sentinel are left out of
/// the payload entirely; set bounds are reshaped to the server's format.
fn build_query_request(dt_from: &str, dt_to: &str, category: &str) -> QueryRequest {
    let bound = |raw: &str| {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| normalize_datetime(raw))
    };
    QueryRequest {
        dt_from: bound(dt_from),
        dt_to: bound(dt_to),
        category: (!category.is_empty() && category != ALL_CATEGORIES)
            .then(|| category.to_string()),
    }
}

/// Fold a finished `/query` call into the shared state: success replaces the
/// stored result, failure goes to the error line and leaves the previous
/// result in place.
fn apply_query_outcome(
    ctx: AppGlobalContext,
    set_error: WriteSignal<Option<String>>,
    outcome: Result<QueryResponse, ApiError>,
) {
    match outcome {
        Ok(response) => {
            ctx.query_result.set(Some(response));
        }
        Err(e) => {
            log::error!("query failed: {}", e);
            set_error.set(Some(e.to_string()));
        }
    }
}

/// Simple query form: optional datetime range plus a category dropdown.
/// Results land in the shared context for [`super::display::ResultsTable`].
#[component]
pub fn QueryForm() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let (dt_from, set_dt_from) = signal(String::new());
    let (dt_to, set_dt_to) = signal(String::new());
    let (category, set_category) = signal(ALL_CATEGORIES.to_string());
    let (categories, set_categories) = signal(vec![ALL_CATEGORIES.to_string()]);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Reload the category list on mount and again after every successful
    // save, so a category stored a moment ago shows up right away.
    Effect::new(move |_| {
        let _ = ctx.last_item_id.get();
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(list) => {
                    let (options, fallback) =
                        refresh_category_options(&category.get_untracked(), list);
                    if let Some(sentinel) = fallback {
                        set_category.set(sentinel);
                    }
                    set_categories.set(options);
                }
                Err(e) => {
                    log::error!("category fetch failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let run_query = move || {
        set_loading.set(true);
        set_error.set(None);

        let request = build_query_request(&dt_from.get(), &dt_to.get(), &category.get());
        spawn_local(async move {
            apply_query_outcome(ctx, set_error, api::query_items(&request).await);
            set_loading.set(false);
        });
    };

    view! {
        <div style="margin: 20px 20px 0;">
            <div style="border-bottom: 1px solid #e5e7eb; padding-bottom: 20px;">
                <h1 style="margin: 0; font-size: 1rem; font-weight: 600;">"Query Inventory"</h1>

                <div style="margin-top: 12px; max-width: 480px;">
                    <label for="dt_from" style="display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 4px;">
                        "Search by start date"
                    </label>
                    <input
                        id="dt_from"
                        type="datetime-local"
                        step="1"
                        prop:value=move || dt_from.get()
                        on:input=move |ev| set_dt_from.set(event_target_value(&ev))
                        style="width: 100%; padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 6px;"
                    />
                </div>

                <div style="margin-top: 12px; max-width: 480px;">
                    <label for="dt_to" style="display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 4px;">
                        "Search by end date"
                    </label>
                    <input
                        id="dt_to"
                        type="datetime-local"
                        step="1"
                        prop:value=move || dt_to.get()
                        on:input=move |ev| set_dt_to.set(event_target_value(&ev))
                        style="width: 100%; padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 6px;"
                    />
                </div>

                <Select
                    label="Category"
                    value=category
                    options=categories
                    on_change=Callback::new(move |value: String| set_category.set(value))
                />

                <button
                    on:click=move |_| run_query()
                    disabled=move || loading.get()
                    style="margin-top: 24px; padding: 8px 12px; background: #4f46e5; color: white; border: none; border-radius: 6px; font-weight: 600; cursor: pointer;"
                >
                    "Query"
                </button>

                // Request failures, shown with the server's wording
                {move || {
                    error.get().map(|err| {
                        view! {
                            <p style="margin-top: 16px; color: #f87171; font-weight: 600;">{err}</p>
                        }
                    })
                }}
            </div>
        </div>
    }
}
