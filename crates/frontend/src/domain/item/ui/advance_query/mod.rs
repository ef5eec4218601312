use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::item::{
    AdvanceFilters, AdvanceQueryRequest, AdvanceQueryResponse, Pagination, Sort, SortField,
    SortOrder,
};

use crate::domain::item::api;
use crate::domain::item::ui::{refresh_category_options, ALL_CATEGORIES};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_error::ApiError;
use crate::shared::components::select::Select;

/// Parse a price bound. Zero is allowed, negatives are not.
fn parse_price(raw: &str, required_msg: &str) -> Result<f64, String> {
    let value: f64 = raw.trim().parse().map_err(|_| required_msg.to_string())?;
    if !value.is_finite() {
        return Err(required_msg.to_string());
    }
    if value < 0.0 {
        return Err("Price must be positive".to_string());
    }
    Ok(value)
}

/// Parse a 1-based count (page number or page size).
fn parse_count(raw: &str, required_msg: &str, min_msg: &str) -> Result<u32, String> {
    let value: i64 = raw.trim().parse().map_err(|_| required_msg.to_string())?;
    if value < 1 {
        return Err(min_msg.to_string());
    }
    u32::try_from(value).map_err(|_| required_msg.to_string())
}

/// Build the `/advance-query` body. Name and category are dropped when
/// blank (or the sentinel); `price_range`, pagination and sort always go.
fn build_advance_request(
    name: &str,
    category: &str,
    price_range: [f64; 2],
    page: u32,
    limit: u32,
    field: SortField,
    order: SortOrder,
) -> AdvanceQueryRequest {
    AdvanceQueryRequest {
        filters: AdvanceFilters {
            name: (!name.is_empty()).then(|| name.to_string()),
            category: (!category.is_empty() && category != ALL_CATEGORIES)
                .then(|| category.to_string()),
            price_range,
        },
        pagination: Pagination { page, limit },
        sort: Sort { field, order },
    }
}

/// Same state policy as the simple form: replace `advance_result` on
/// success, surface the failure and keep the previous page otherwise.
fn apply_advance_outcome(
    ctx: AppGlobalContext,
    set_error: WriteSignal<Option<String>>,
    outcome: Result<AdvanceQueryResponse, ApiError>,
) {
    match outcome {
        Ok(response) => {
            ctx.advance_result.set(Some(response));
        }
        Err(e) => {
            log::error!("advance query failed: {}", e);
            set_error.set(Some(e.to_string()));
        }
    }
}

/// Advanced query form: name/category/price filters plus explicit paging
/// and sorting. One page of results lands in the shared context for
/// [`super::display::AdvanceResultsTable`].
#[component]
pub fn AdvanceQueryForm() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(ALL_CATEGORIES.to_string());
    let (categories, set_categories) = signal(vec![ALL_CATEGORIES.to_string()]);
    let (price_min, set_price_min) = signal("1".to_string());
    let (price_max, set_price_max) = signal("10".to_string());
    let (page, set_page) = signal("1".to_string());
    let (limit, set_limit) = signal("10".to_string());
    let (sort_field, set_sort_field) = signal(SortField::Price);
    let (sort_order, set_sort_order) = signal(SortOrder::Asc);

    let (price_min_error, set_price_min_error) = signal(None::<String>);
    let (price_max_error, set_price_max_error) = signal(None::<String>);
    let (page_error, set_page_error) = signal(None::<String>);
    let (limit_error, set_limit_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Same category source as the simple form: reload on mount and after
    // every successful save.
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

    let run_advance_query = move || {
        let parsed_min = parse_price(&price_min.get(), "Minimum price is required");
        let parsed_max = parse_price(&price_max.get(), "Maximum price is required");
        let parsed_page = parse_count(&page.get(), "Page is required", "Minimally need 1 page");
        let parsed_limit = parse_count(
            &limit.get(),
            "Items per page is required",
            "Must show at least 1 item",
        );

        set_price_min_error.set(parsed_min.as_ref().err().cloned());
        set_price_max_error.set(parsed_max.as_ref().err().cloned());
        set_page_error.set(parsed_page.as_ref().err().cloned());
        set_limit_error.set(parsed_limit.as_ref().err().cloned());

        let (min, max, page_no, per_page) =
            match (parsed_min, parsed_max, parsed_page, parsed_limit) {
                (Ok(min), Ok(max), Ok(page_no), Ok(per_page)) => (min, max, page_no, per_page),
                _ => return,
            };

        set_loading.set(true);
        set_error.set(None);

        let request = build_advance_request(
            &name.get(),
            &category.get(),
            [min, max],
            page_no,
            per_page,
            sort_field.get(),
            sort_order.get(),
        );
        spawn_local(async move {
            apply_advance_outcome(ctx, set_error, api::advance_query_items(&request).await);
            set_loading.set(false);
        });
    };

    let sort_field_options: Vec<String> = SortField::all()
        .iter()
        .map(|f| f.as_str().to_string())
        .collect();
    let sort_order_options: Vec<String> = SortOrder::all()
        .iter()
        .map(|o| o.as_str().to_string())
        .collect();

    view! {
        <div style="margin: 20px 20px 0;">
            <div style="border-bottom: 1px solid #e5e7eb; padding-bottom: 20px;">
                <h1 style="margin: 0; font-size: 1rem; font-weight: 600;">"Advanced Query Inventory"</h1>

                <div style="margin-top: 12px; max-width: 480px;">
                    <label for="advance_name" style="display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 4px;">
                        "Product Name"
                    </label>
                    <input
                        id="advance_name"
                        type="text"
                        placeholder="Enter product name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        style="width: 100%; padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 6px;"
                    />
                </div>

                <Select
                    label="Category"
                    value=category
                    options=categories
                    on_change=Callback::new(move |value: String| set_category.set(value))
                />

                <div style="margin-top: 12px; display: flex; gap: 16px; max-width: 480px;">
                    <div style="flex: 1;">
                        <label for="price_min" style="display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 4px;">
                            "Minimum Price"
                        </label>
                        <input
                            id="price_min"
                            type="number"
                            step="0.01"
                            prop:value=move || price_min.get()
                            on:input=move |ev| set_price_min.set(event_target_value(&ev))
                            style="width: 100%; padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 6px;"
                        />
                        {move || {
                            price_min_error.get().map(|msg| {
                                view! {
                                    <p style="margin-top: 4px; font-size: 0.875rem; color: #f87171; font-weight: 500;">{msg}</p>
                                }
                            })
                        }}
                    </div>
                    <div style="flex: 1;">
                        <label for="price_max" style="display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 4px;">
                            "Maximum Price"
                        </label>
                        <input
                            id="price_max"
                            type="number"
                            step="0.01"
                            prop:value=move || price_max.get()
                            on:input=move |ev| set_price_max.set(event_target_value(&ev))
                            style="width: 100%; padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 6px;"
                        />
                        {move || {
                            price_max_error.get().map(|msg| {
                                view! {
                                    <p style="margin-top: 4px; font-size: 0.875rem; color: #f87171; font-weight: 500;">{msg}</p>
                                }
                            })
                        }}
                    </div>
                </div>

                <div style="margin-top: 12px; display: flex; gap: 16px; max-width: 480px;">
                    <div style="flex: 1;">
                        <label for="page" style="display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 4px;">
                            "Page"
                        </label>
                        <input
                            id="page"
                            type="number"
                            prop:value=move || page.get()
                            on:input=move |ev| set_page.set(event_target_value(&ev))
                            style="width: 100%; padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 6px;"
                        />
                        {move || {
                            page_error.get().map(|msg| {
                                view! {
                                    <p style="margin-top: 4px; font-size: 0.875rem; color: #f87171; font-weight: 500;">{msg}</p>
                                }
                            })
                        }}
                    </div>
                    <div style="flex: 1;">
                        <label for="limit" style="display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 4px;">
                            "Items Per Page"
                        </label>
                        <input
                            id="limit"
                            type="number"
                            prop:value=move || limit.get()
                            on:input=move |ev| set_limit.set(event_target_value(&ev))
                            style="width: 100%; padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 6px;"
                        />
                        {move || {
                            limit_error.get().map(|msg| {
                                view! {
                                    <p style="margin-top: 4px; font-size: 0.875rem; color: #f87171; font-weight: 500;">{msg}</p>
                                }
                            })
                        }}
                    </div>
                </div>

                <div style="display: flex; gap: 16px; max-width: 480px;">
                    <div style="flex: 1;">
                        <Select
                            label="Sort By"
                            value=Signal::derive(move || sort_field.get().as_str().to_string())
                            options=Signal::derive(move || sort_field_options.clone())
                            on_change=Callback::new(move |value: String| {
                                if let Some(field) = SortField::parse(&value) {
                                    set_sort_field.set(field);
                                }
                            })
                        />
                    </div>
                    <div style="flex: 1;">
                        <Select
                            label="Sort Order"
                            value=Signal::derive(move || sort_order.get().as_str().to_string())
                            options=Signal::derive(move || sort_order_options.clone())
                            on_change=Callback::new(move |value: String| {
                                if let Some(order) = SortOrder::parse(&value) {
                                    set_sort_order.set(order);
                                }
                            })
                        />
                    </div>
                </div>

                <button
                    on:click=move |_| run_advance_query()
                    disabled=move || loading.get()
                    style="margin-top: 24px; padding: 8px 12px; background: #4f46e5; color: white; border: none; border-radius: 6px; font-weight: 600; cursor: pointer;"
                >
                    "Advance Query"
                </button>

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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_form_payload() {
        let request = build_advance_request(
            "",
            ALL_CATEGORIES,
            [1.0, 10.0],
            1,
            10,
            SortField::Price,
            SortOrder::Asc,
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "filters": {"price_range": [1.0, 10.0]},
                "pagination": {"page": 1, "limit": 10},
                "sort": {"field": "price", "order": "asc"},
            })
        );
    }

    #[test]
    fn test_paged_descending_name_sort_payload() {
        let request = build_advance_request(
            "",
            ALL_CATEGORIES,
            [1.0, 10.0],
            2,
            5,
            SortField::Name,
            SortOrder::Desc,
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "filters": {"price_range": [1.0, 10.0]},
                "pagination": {"page": 2, "limit": 5},
                "sort": {"field": "name", "order": "desc"},
            })
        );
    }

    #[test]
    fn test_name_and_category_filters_are_included_when_set() {
        let request = build_advance_request(
            "Pen",
            "Stationary",
            [0.0, 99.5],
            1,
            10,
            SortField::Category,
            SortOrder::Desc,
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "filters": {
                    "name": "Pen",
                    "category": "Stationary",
                    "price_range": [0.0, 99.5],
                },
                "pagination": {"page": 1, "limit": 10},
                "sort": {"field": "category", "order": "desc"},
            })
        );
    }

    #[test]
    fn test_parse_price_rules() {
        assert_eq!(parse_price("2.5", "required"), Ok(2.5));
        assert_eq!(parse_price("0", "required"), Ok(0.0));
        assert_eq!(parse_price("", "required"), Err("required".to_string()));
        assert_eq!(parse_price("abc", "required"), Err("required".to_string()));
        assert_eq!(
            parse_price("-1", "required"),
            Err("Price must be positive".to_string())
        );
    }

    #[test]
    fn test_parse_count_rules() {
        assert_eq!(parse_count("7", "required", "too small"), Ok(7));
        assert_eq!(parse_count("1", "required", "too small"), Ok(1));
        assert_eq!(
            parse_count("", "required", "too small"),
            Err("required".to_string())
        );
        assert_eq!(
            parse_count("0", "required", "too small"),
            Err("too small".to_string())
        );
        assert_eq!(
            parse_count("-3", "required", "too small"),
            Err("too small".to_string())
        );
    }

    #[test]
    fn test_failed_advance_query_keeps_prior_page() {
        let ctx = AppGlobalContext::new();
        let (error, set_error) = signal(None::<String>);
        ctx.advance_result.set(Some(AdvanceQueryResponse {
            items: vec![],
            count: 42,
            page: 2,
            limit: 5,
        }));

        apply_advance_outcome(ctx, set_error, Err(ApiError::Network));

        assert_eq!(
            error.get_untracked().as_deref(),
            Some("Error: No response from server")
        );
        let kept = ctx.advance_result.get_untracked().unwrap();
        assert_eq!(kept.count, 42);
        assert_eq!(kept.page, 2);
        assert_eq!(kept.limit, 5);
    }

    #[test]
    fn test_successful_advance_query_replaces_page() {
        let ctx = AppGlobalContext::new();
        let (error, set_error) = signal(None::<String>);
        ctx.advance_result.set(Some(AdvanceQueryResponse {
            items: vec![],
            count: 42,
            page: 2,
            limit: 5,
        }));

        apply_advance_outcome(
            ctx,
            set_error,
            Ok(AdvanceQueryResponse {
                items: vec![],
                count: 1,
                page: 1,
                limit: 10,
            }),
        );

        assert!(error.get_untracked().is_none());
        let stored = ctx.advance_result.get_untracked().unwrap();
        assert_eq!(stored.count, 1);
        assert_eq!(stored.page, 1);
    }
}
