use serde::{Deserialize, Serialize};

/// One inventory record as the server returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
}

/// Body of `POST /upsert`. The server decides whether this creates a new
/// record or updates an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsertRequest {
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// Reply to a successful upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertResponse {
    pub id: i64,
}

/// Body of `POST /query`. Filters the user left blank are omitted from the
/// JSON entirely, never sent as `null`.
///
/// Datetime bounds use the server's `YYYY-MM-DD HH:MM:SS` shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dt_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dt_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Reply to `POST /query`: every matching item plus the aggregate price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub items: Vec<Item>,
    pub total_price: f64,
}

/// Filter block of `POST /advance-query`. `price_range` is always present;
/// `name` and `category` only when the user narrowed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Inclusive `[min, max]` bounds.
    pub price_range: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub limit: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: SortField,
    pub order: SortOrder,
}

/// Server-side sort key of the advanced query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Category,
    Price,
}

impl SortField {
    /// Wire code, also what the UI shows in the sort dropdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Category => "category",
            SortField::Price => "price",
        }
    }

    pub fn all() -> Vec<SortField> {
        vec![SortField::Name, SortField::Category, SortField::Price]
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortField::Name),
            "category" => Some(SortField::Category),
            "price" => Some(SortField::Price),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn all() -> Vec<SortOrder> {
        vec![SortOrder::Asc, SortOrder::Desc]
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Body of `POST /advance-query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceQueryRequest {
    pub filters: AdvanceFilters,
    pub pagination: Pagination,
    pub sort: Sort,
}

/// Reply to `POST /advance-query`: one page of matches plus paging metadata.
/// `count` is the total number of matches, not the page size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceQueryResponse {
    pub items: Vec<Item>,
    pub count: u64,
    pub page: u32,
    pub limit: u32,
}

/// Body the server attaches to non-2xx replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upsert_request_serializes_flat() {
        let request = UpsertRequest {
            name: "Pen".to_string(),
            price: 1.5,
            category: "Stationary".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"name": "Pen", "price": 1.5, "category": "Stationary"})
        );
    }

    #[test]
    fn query_request_omits_blank_filters() {
        assert_eq!(
            serde_json::to_value(QueryRequest::default()).unwrap(),
            json!({})
        );

        let request = QueryRequest {
            dt_from: Some("2024-03-15 10:30:00".to_string()),
            dt_to: None,
            category: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"dt_from": "2024-03-15 10:30:00"})
        );
    }

    #[test]
    fn query_request_keeps_set_filters() {
        let request = QueryRequest {
            dt_from: Some("2024-01-01 00:00:00".to_string()),
            dt_to: Some("2024-12-31 23:59:59".to_string()),
            category: Some("Stationary".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "dt_from": "2024-01-01 00:00:00",
                "dt_to": "2024-12-31 23:59:59",
                "category": "Stationary",
            })
        );
    }

    #[test]
    fn advance_request_nests_filters_pagination_sort() {
        let request = AdvanceQueryRequest {
            filters: AdvanceFilters {
                name: None,
                category: None,
                price_range: [1.0, 10.0],
            },
            pagination: Pagination { page: 2, limit: 5 },
            sort: Sort {
                field: SortField::Name,
                order: SortOrder::Desc,
            },
        };
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
    fn sort_codes_match_serde_names() {
        for field in SortField::all() {
            let encoded = serde_json::to_value(field).unwrap();
            assert_eq!(encoded, json!(field.as_str()));
            assert_eq!(SortField::parse(field.as_str()), Some(field));
        }
        for order in SortOrder::all() {
            let encoded = serde_json::to_value(order).unwrap();
            assert_eq!(encoded, json!(order.as_str()));
            assert_eq!(SortOrder::parse(order.as_str()), Some(order));
        }
        assert_eq!(SortField::parse("total"), None);
        assert_eq!(SortOrder::parse("up"), None);
    }

    #[test]
    fn query_response_deserializes() {
        let response: QueryResponse = serde_json::from_str(
            r#"{"items":[{"id":7,"name":"Pen","category":"Stationary","price":1.5}],"total_price":1.5}"#,
        )
        .unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].id, 7);
        assert_eq!(response.items[0].category, "Stationary");
        assert_eq!(response.total_price, 1.5);
    }

    #[test]
    fn advance_response_deserializes_with_paging_metadata() {
        let response: AdvanceQueryResponse = serde_json::from_str(
            r#"{"items":[],"count":42,"page":2,"limit":5}"#,
        )
        .unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.count, 42);
        assert_eq!(response.page, 2);
        assert_eq!(response.limit, 5);
    }

    #[test]
    fn error_response_carries_detail() {
        let err: ErrorResponse =
            serde_json::from_str(r#"{"detail":"price must be positive"}"#).unwrap();
        assert_eq!(err.detail, "price must be positive");
    }
}
