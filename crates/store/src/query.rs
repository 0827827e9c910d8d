//! The query half of the remote store interface.
//!
//! Captures what every consumer in this workspace needs: a sort field and
//! direction, an optional row limit, and an optional exclusive id cursor
//! for paginated feeds (`id < before_id`).

/// Field a query is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    /// The record identifier. For relational stores this is also creation
    /// order (BIGSERIAL assignment).
    Id,
    /// The record creation timestamp, where the backing collection has one.
    CreatedAt,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A read query against one collection or table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<Id> {
    pub order_by: OrderField,
    pub direction: Direction,
    pub limit: Option<i64>,
    /// Exclusive upper bound on the record id: only records with
    /// `id < before_id` match. Used as the feed pagination cursor.
    pub before_id: Option<Id>,
}

impl<Id> Query<Id> {
    /// Records ordered by id descending (the public feed ordering).
    pub fn by_id_desc() -> Self {
        Self {
            order_by: OrderField::Id,
            direction: Direction::Descending,
            limit: None,
            before_id: None,
        }
    }

    /// Records ordered by creation time, newest first.
    pub fn newest_first() -> Self {
        Self {
            order_by: OrderField::CreatedAt,
            direction: Direction::Descending,
            limit: None,
            before_id: None,
        }
    }

    /// Limit the number of returned records.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Only return records with an id strictly below `id`.
    pub fn before(mut self, id: Id) -> Self {
        self.before_id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_composes() {
        let q = Query::<i64>::by_id_desc().limit(6).before(101);
        assert_eq!(q.order_by, OrderField::Id);
        assert_eq!(q.direction, Direction::Descending);
        assert_eq!(q.limit, Some(6));
        assert_eq!(q.before_id, Some(101));
    }

    #[test]
    fn newest_first_has_no_cursor() {
        let q = Query::<String>::newest_first();
        assert_eq!(q.order_by, OrderField::CreatedAt);
        assert_eq!(q.before_id, None);
        assert_eq!(q.limit, None);
    }
}
