//! Feed paging constants and helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the store and feed layers.

/// Rows requested by the first feed page. Larger than follow-on pages so
/// the initial screen is filled.
pub const INITIAL_PAGE_SIZE: i64 = 9;

/// Rows requested by each follow-on feed page.
pub const FOLLOW_PAGE_SIZE: i64 = 6;

/// Maximum rows any single page may request.
pub const MAX_PAGE_SIZE: i64 = 50;

/// Upper bound on rows returned by an unpaginated listing query.
pub const MAX_LISTING_ROWS: i64 = 500;

/// Clamp a requested page size to valid bounds.
pub fn clamp_page_size(requested: i64, max: i64) -> i64 {
    requested.max(1).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_valid_sizes() {
        assert_eq!(clamp_page_size(INITIAL_PAGE_SIZE, MAX_PAGE_SIZE), 9);
        assert_eq!(clamp_page_size(FOLLOW_PAGE_SIZE, MAX_PAGE_SIZE), 6);
    }

    #[test]
    fn floors_at_one() {
        assert_eq!(clamp_page_size(0, MAX_PAGE_SIZE), 1);
        assert_eq!(clamp_page_size(-4, MAX_PAGE_SIZE), 1);
    }

    #[test]
    fn respects_max() {
        assert_eq!(clamp_page_size(500, MAX_PAGE_SIZE), MAX_PAGE_SIZE);
    }
}
