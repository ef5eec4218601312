pub mod dto;

pub use dto::{
    AdvanceFilters, AdvanceQueryRequest, AdvanceQueryResponse, ErrorResponse, Item, Pagination,
    QueryRequest, QueryResponse, Sort, SortField, SortOrder, UpsertRequest, UpsertResponse,
};
