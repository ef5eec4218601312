use contracts::domain::item::{
    AdvanceQueryRequest, AdvanceQueryResponse, Item, QueryRequest, QueryResponse, UpsertRequest,
    UpsertResponse,
};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::post_json;

/// Create or update an item; the server decides which.
pub async fn upsert_item(request: &UpsertRequest) -> Result<UpsertResponse, ApiError> {
    post_json("/upsert", request).await
}

/// Fetch every item matching the datetime/category filters plus the
/// aggregate price.
pub async fn query_items(request: &QueryRequest) -> Result<QueryResponse, ApiError> {
    post_json("/query", request).await
}

/// Fetch one filtered, sorted page of items.
pub async fn advance_query_items(
    request: &AdvanceQueryRequest,
) -> Result<AdvanceQueryResponse, ApiError> {
    post_json("/advance-query", request).await
}

/// Distinct categories currently in the inventory, for the filter dropdowns.
///
/// The server has no dedicated category endpoint, so this runs an
/// unfiltered query and dedupes the result client-side.
pub async fn fetch_categories() -> Result<Vec<String>, ApiError> {
    let response = query_items(&QueryRequest::default()).await?;
    Ok(distinct_categories(&response.items))
}

/// First-occurrence order, matching the order items came back in.
fn distinct_categories(items: &[Item]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}
