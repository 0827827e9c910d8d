//! Pagination cursor for the id-descending feed.

/// Marks the boundary of the last successfully fetched page.
///
/// The feed is ordered by id descending, so the id of the last appended
/// item is the minimum id observed and the next page is everything
/// strictly below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCursor<Id> {
    /// Id of the last item of the most recent page, if any page has
    /// completed since the last reset.
    pub last_seen_id: Option<Id>,
    /// Whether another page may exist. Starts true; cleared when a page
    /// comes back shorter than requested.
    pub has_more: bool,
}

impl<Id> FeedCursor<Id> {
    pub fn new() -> Self {
        Self {
            last_seen_id: None,
            has_more: true,
        }
    }

    /// Forget all progress, e.g. on refresh or filter change.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Record a successfully completed page.
    ///
    /// `page_tail` is the id of the last appended item (absent for an empty
    /// page, which leaves the cursor position unchanged). `has_more` is
    /// recomputed against the size requested for THIS page, since initial
    /// and follow-on pages may request different sizes.
    pub fn advance(&mut self, page_tail: Option<Id>, returned: i64, requested: i64) {
        if let Some(id) = page_tail {
            self.last_seen_id = Some(id);
        }
        self.has_more = returned == requested;
    }
}

impl<Id> Default for FeedCursor<Id> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_open_with_no_position() {
        let cursor: FeedCursor<i64> = FeedCursor::new();
        assert_eq!(cursor.last_seen_id, None);
        assert!(cursor.has_more);
    }

    #[test]
    fn advance_records_tail_and_recomputes_has_more() {
        let mut cursor = FeedCursor::new();
        cursor.advance(Some(101), 9, 9);
        assert_eq!(cursor.last_seen_id, Some(101));
        assert!(cursor.has_more);

        cursor.advance(Some(95), 6, 6);
        assert_eq!(cursor.last_seen_id, Some(95));
        assert!(cursor.has_more);
    }

    #[test]
    fn short_page_closes_the_feed() {
        let mut cursor = FeedCursor::new();
        cursor.advance(Some(4), 4, 9);
        assert_eq!(cursor.last_seen_id, Some(4));
        assert!(!cursor.has_more);
    }

    #[test]
    fn empty_page_keeps_position() {
        let mut cursor = FeedCursor::new();
        cursor.advance(Some(42), 6, 6);
        cursor.advance(None, 0, 6);
        assert_eq!(cursor.last_seen_id, Some(42));
        assert!(!cursor.has_more);
    }

    #[test]
    fn reset_reopens_the_feed() {
        let mut cursor = FeedCursor::new();
        cursor.advance(Some(4), 4, 9);
        cursor.reset();
        assert_eq!(cursor.last_seen_id, None);
        assert!(cursor.has_more);
    }
}
