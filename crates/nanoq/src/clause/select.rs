use super::condition::WhereClause;
use crate::arg::{Fragment, impl_tree_arg};
use crate::builder::QueryBuilder;
use crate::query::{Query, ToQuery};
use crate::value::Value;

/// A `SELECT` statement assembled from parts.
///
/// Renders `SELECT cols FROM src [joins] [WHERE ...] [GROUP BY ...]
/// [ORDER BY ...] [LIMIT ?] [OFFSET ?]`, space-separated. With no columns
/// it selects `*`. `LIMIT` and `OFFSET` are bound values.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct SelectStatement {
    columns: Vec<Fragment>,
    from: Option<Fragment>,
    joins: Vec<Fragment>,
    filter: WhereClause,
    group_by: Vec<Fragment>,
    order_by: Vec<Fragment>,
    limit: Option<Value>,
    offset: Option<Value>,
}

fn comma_list(items: &[Fragment]) -> Query {
    let mut list = QueryBuilder::joined(", ");
    list.raw_all(items.iter().cloned());
    list.into_query()
}

impl SelectStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column (or any select-list expression).
    pub fn select(mut self, column: impl Into<Fragment>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Set the `FROM` source: a table name, or a tree for sub-selects.
    pub fn from(mut self, source: impl Into<Fragment>) -> Self {
        self.from = Some(source.into());
        self
    }

    /// Add a join clause, e.g. `JOIN orders o ON o.user_id = u.id`.
    pub fn join(mut self, clause: impl Into<Fragment>) -> Self {
        self.joins.push(clause.into());
        self
    }

    /// Add a `WHERE` condition joined with `AND`.
    pub fn and_where(mut self, condition: impl Into<Fragment>) -> Self {
        self.filter = self.filter.and(condition);
        self
    }

    /// Add a `WHERE` condition joined with `OR`.
    pub fn or_where(mut self, condition: impl Into<Fragment>) -> Self {
        self.filter = self.filter.or(condition);
        self
    }

    pub fn group_by(mut self, expr: impl Into<Fragment>) -> Self {
        self.group_by.push(expr.into());
        self
    }

    pub fn order_by(mut self, expr: impl Into<Fragment>) -> Self {
        self.order_by.push(expr.into());
        self
    }

    pub fn limit(mut self, n: impl Into<Value>) -> Self {
        self.limit = Some(n.into());
        self
    }

    pub fn offset(mut self, n: impl Into<Value>) -> Self {
        self.offset = Some(n.into());
        self
    }
}

impl ToQuery for SelectStatement {
    fn to_query(&self) -> Query {
        let mut q = QueryBuilder::joined(" ");
        q.raw("SELECT");
        if self.columns.is_empty() {
            q.raw("*");
        } else {
            q.raw(comma_list(&self.columns));
        }
        if let Some(from) = &self.from {
            q.raw("FROM").raw(from.clone());
        }
        q.raw_all(self.joins.iter().cloned());
        if !self.filter.is_empty() {
            q.raw(&self.filter);
        }
        if !self.group_by.is_empty() {
            q.raw("GROUP BY").raw(comma_list(&self.group_by));
        }
        if !self.order_by.is_empty() {
            q.raw("ORDER BY").raw(comma_list(&self.order_by));
        }
        if let Some(limit) = &self.limit {
            q.raw("LIMIT").value(limit.clone());
        }
        if let Some(offset) = &self.offset {
            q.raw("OFFSET").value(offset.clone());
        }
        q.into_query()
    }
}

impl_tree_arg!(SelectStatement);
