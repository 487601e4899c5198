use crate::arg::{Fragment, impl_tree_arg};
use crate::builder::QueryBuilder;
use crate::query::{Query, ToQuery};

/// A parenthesized fragment: `(inner)`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupExpression {
    inner: Fragment,
}

impl GroupExpression {
    pub fn new(inner: impl Into<Fragment>) -> Self {
        Self {
            inner: inner.into(),
        }
    }
}

/// Wrap `inner` in parentheses.
pub fn group(inner: impl Into<Fragment>) -> GroupExpression {
    GroupExpression::new(inner)
}

impl ToQuery for GroupExpression {
    fn to_query(&self) -> Query {
        QueryBuilder::new()
            .with_raw("(")
            .with_raw(self.inner.clone())
            .with_raw(")")
            .into_query()
    }
}

impl_tree_arg!(GroupExpression);
