use leptos::prelude::*;

use contracts::domain::item::{AdvanceQueryResponse, Item, QueryResponse};

use crate::layout::global_context::AppGlobalContext;
use crate::shared::format::format_price;

/// Rows for the simple result table, or `None` when the placeholder
/// should show instead.
fn simple_rows(result: Option<QueryResponse>) -> Option<QueryResponse> {
    result.filter(|r| !r.items.is_empty())
}

/// Rows for the advanced result table, or `None` for the placeholder.
fn advance_rows(result: Option<AdvanceQueryResponse>) -> Option<AdvanceQueryResponse> {
    result.filter(|r| !r.items.is_empty())
}

fn items_table(items: Vec<Item>) -> impl IntoView {
    view! {
        <table style="min-width: 100%; background: white; border: 1px solid #e5e7eb; border-collapse: collapse;">
            <thead style="background: #e5e7eb;">
                <tr>
                    <th style="padding: 8px 16px; border-bottom: 1px solid #d1d5db; text-align: left; color: #4b5563;">"Name"</th>
                    <th style="padding: 8px 16px; border-bottom: 1px solid #d1d5db; text-align: left; color: #4b5563;">"Category"</th>
                    <th style="padding: 8px 16px; border-bottom: 1px solid #d1d5db; text-align: left; color: #4b5563;">"Price"</th>
                </tr>
            </thead>
            <tbody>
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <tr>
                                <td style="padding: 8px 16px; border-bottom: 1px solid #d1d5db;">{item.name}</td>
                                <td style="padding: 8px 16px; border-bottom: 1px solid #d1d5db;">{item.category}</td>
                                <td style="padding: 8px 16px; border-bottom: 1px solid #d1d5db;">
                                    {format!("${}", format_price(item.price))}
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

fn empty_placeholder() -> impl IntoView {
    view! {
        <div style="text-align: center; padding: 16px; color: #6b7280;">
            "No items found matching your criteria"
        </div>
    }
}

/// Results of the simple query, with the aggregate price line underneath.
#[component]
pub fn ResultsTable() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div style="margin: 20px 20px 0; overflow-x: auto;">
            <div style="border-bottom: 1px solid #e5e7eb; padding-bottom: 20px; max-width: 640px;">
                {move || match simple_rows(ctx.query_result.get()) {
                    Some(result) => {
                        let total_line = format!("Total Price: SGD {}", format_price(result.total_price));
                        view! {
                            {items_table(result.items)}
                            <p style="margin-top: 16px; font-size: 0.875rem; font-weight: 700; text-align: right;">
                                {total_line}
                            </p>
                        }
                            .into_any()
                    }
                    None => empty_placeholder().into_any(),
                }}
            </div>
        </div>
    }
}

/// Results of the advanced query. Paging metadata stays in the context;
/// only the item rows are rendered.
#[component]
pub fn AdvanceResultsTable() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div style="margin: 20px 20px 0; overflow-x: auto;">
            <div style="border-bottom: 1px solid #e5e7eb; padding-bottom: 20px; max-width: 640px;">
                {move || match advance_rows(ctx.advance_result.get()) {
                    Some(result) => items_table(result.items).into_any(),
                    None => empty_placeholder().into_any(),
                }}
            </div>
        </div>
    }
}
