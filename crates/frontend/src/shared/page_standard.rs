//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a101_article--detail"`) and a
//! `data-page-category` with one of the constants below.

/// List of records: table with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Overview of records with status summary.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Use-case action page (analysis runs, keyword selection).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Settings and option management.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a101_article--list"));
        assert!(is_valid_page_id("u102_integrated_analysis--usecase"));
        assert!(!is_valid_page_id("a101_article"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a101_article--"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_SYSTEM));
        assert!(!is_known_category("legacy"));
    }
}
