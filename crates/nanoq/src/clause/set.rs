use super::group::GroupExpression;
use crate::arg::{Arg, Fragment, IntoArg, Sealed};
use crate::builder::QueryBuilder;
use crate::query::{Query, ToQuery};
use crate::value::Value;

/// A comma-separated list: `a,b,c`.
///
/// Used for value lists (`VALUES (...)`, `IN (...)`) and `SET a = ?, b = ?`
/// style assignments. A set appended to another set, through
/// [`raw`](SetExpression::raw) or [`nested`](SetExpression::nested), is
/// parenthesized, which is what multi-row `VALUES` needs. Anywhere else a set
/// is spliced as is.
#[must_use]
#[derive(Debug, Clone)]
pub struct SetExpression {
    items: QueryBuilder,
}

impl Default for SetExpression {
    fn default() -> Self {
        Self::new()
    }
}

impl SetExpression {
    pub fn new() -> Self {
        Self {
            items: QueryBuilder::joined(","),
        }
    }

    /// A set of bound values.
    pub fn values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut set = Self::new();
        for v in values {
            set.items.value(v);
        }
        set
    }

    /// Append a code item or tree. Another set is parenthesized.
    pub fn raw(mut self, item: impl Into<Fragment>) -> Self {
        match item.into() {
            Fragment::List(list) => self.items.raw(GroupExpression::new(list)),
            other => self.items.raw(other),
        };
        self
    }

    /// Append a bound value.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.items.value(value);
        self
    }

    /// Append another set, wrapped in parentheses.
    pub fn nested(self, set: SetExpression) -> Self {
        self.raw(set)
    }

    /// Wrap the whole set in parentheses.
    pub fn with_parenthesis(self) -> GroupExpression {
        GroupExpression::new(self)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ToQuery for SetExpression {
    fn to_query(&self) -> Query {
        self.items.build()
    }
}

impl From<SetExpression> for Fragment {
    fn from(set: SetExpression) -> Self {
        Fragment::List(set.to_query())
    }
}

impl From<&SetExpression> for Fragment {
    fn from(set: &SetExpression) -> Self {
        Fragment::List(set.to_query())
    }
}

impl Sealed for SetExpression {}

impl IntoArg for SetExpression {
    fn into_arg(self) -> Arg {
        Arg::Query(self.to_query())
    }
}

impl Sealed for &SetExpression {}

impl IntoArg for &SetExpression {
    fn into_arg(self) -> Arg {
        Arg::Query(self.to_query())
    }
}
