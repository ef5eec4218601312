pub mod advance_query;
pub mod display;
pub mod query;
pub mod upsert;

pub use advance_query::AdvanceQueryForm;
pub use display::{AdvanceResultsTable, ResultsTable};
pub use query::QueryForm;
pub use upsert::UpsertForm;

/// Dropdown entry meaning "no category filter". Never sent to the server.
pub const ALL_CATEGORIES: &str = "Select All Categories";

/// Assemble the category dropdown options from a fetched list: sentinel
/// first, then the categories in fetched order. The second value is the
/// fallback selection when `current` is gone from the new list; a `<select>`
/// left pointing at a missing value would display the first option while
/// still submitting the old string.
pub fn refresh_category_options(
    current: &str,
    list: Vec<String>,
) -> (Vec<String>, Option<String>) {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    options.extend(list);
    let fallback = (!options.iter().any(|o| o == current)).then(|| ALL_CATEGORIES.to_string());
    (options, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_lead_with_sentinel() {
        let (options, fallback) =
            refresh_category_options("Food", vec!["Stationary".to_string(), "Food".to_string()]);
        assert_eq!(options, vec![ALL_CATEGORIES, "Stationary", "Food"]);
        assert_eq!(fallback, None);
    }

    #[test]
    fn test_vanished_selection_falls_back_to_sentinel() {
        let (options, fallback) = refresh_category_options("Toys", vec!["Stationary".to_string()]);
        assert_eq!(options, vec![ALL_CATEGORIES, "Stationary"]);
        assert_eq!(fallback, Some(ALL_CATEGORIES.to_string()));
    }

    #[test]
    fn test_sentinel_selection_always_survives() {
        let (options, fallback) = refresh_category_options(ALL_CATEGORIES, vec![]);
        assert_eq!(options, vec![ALL_CATEGORIES]);
        assert_eq!(fallback, None);
    }
}
