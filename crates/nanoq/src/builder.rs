//! Mutable construction surface for fragment trees.

use crate::arg::{Arg, Fragment, IntoArg, impl_tree_arg};
use crate::query::{Query, Segment, ToQuery};
use crate::value::Value;
use serde::Deserialize;

/// Options recognized when constructing a [`QueryBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Separator inserted between successive top-level appends.
    ///
    /// `None` means items are appended back to back.
    pub join: Option<String>,
}

impl QueryOptions {
    /// Options with no separator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator.
    pub fn join(mut self, sep: impl Into<String>) -> Self {
        self.join = Some(sep.into());
        self
    }
}

/// A fluent, mutable builder for [`Query`] trees.
///
/// Each append records one top-level segment. When a `join` separator is
/// configured, it is recorded as its own literal segment before every append
/// except the first. The separator only applies to this builder's own
/// appends; nested trees keep whatever they were built with.
///
/// # Example
/// ```
/// use nanoq::{Compiler, QueryBuilder};
///
/// let mut q = QueryBuilder::new();
/// q.raw("SELECT * FROM foo WHERE foo=").value(1).raw(" LIMIT 2");
///
/// let compiled = Compiler::new().compile(&q);
/// assert_eq!(compiled.command, "SELECT * FROM foo WHERE foo=? LIMIT 2");
/// ```
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    segments: Vec<Segment>,
    join: Option<String>,
}

impl QueryBuilder {
    /// Create an empty builder with no separator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder that joins appends with `sep`.
    pub fn joined(sep: impl Into<String>) -> Self {
        Self {
            segments: Vec::new(),
            join: Some(sep.into()),
        }
    }

    /// Create an empty builder from [`QueryOptions`].
    pub fn with_options(options: QueryOptions) -> Self {
        Self {
            segments: Vec::new(),
            join: options.join,
        }
    }

    /// The configured separator, if any.
    pub fn join_separator(&self) -> Option<&str> {
        self.join.as_deref()
    }

    fn push_segment(&mut self, segment: Segment) {
        if let Some(sep) = &self.join
            && !self.segments.is_empty()
        {
            self.segments.push(Segment::Literal(sep.clone()));
        }
        self.segments.push(segment);
    }

    /// Append trusted code or a nested tree.
    pub fn raw(&mut self, item: impl Into<Fragment>) -> &mut Self {
        let segment = match item.into() {
            Fragment::Code(code) => Segment::Literal(code),
            Fragment::Query(query) | Fragment::List(query) => Segment::Subtree(query),
        };
        self.push_segment(segment);
        self
    }

    /// Append several items in order, each one a separate append.
    pub fn raw_all<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        for item in items {
            self.raw(item);
        }
        self
    }

    /// Append a bound value.
    pub fn value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.push_segment(Segment::Value(value.into()));
        self
    }

    /// Append an interpolated item: trees are spliced, scalars are bound.
    pub fn arg(&mut self, arg: impl IntoArg) -> &mut Self {
        match arg.into_arg() {
            Arg::Query(query) => self.push_segment(Segment::Subtree(query)),
            Arg::Value(value) => self.push_segment(Segment::Value(value)),
        }
        self
    }

    // ==================== Consuming convenience APIs ====================

    /// Consuming version of [`raw`](QueryBuilder::raw).
    pub fn with_raw(mut self, item: impl Into<Fragment>) -> Self {
        self.raw(item);
        self
    }

    /// Consuming version of [`value`](QueryBuilder::value).
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value(value);
        self
    }

    /// Consuming version of [`arg`](QueryBuilder::arg).
    pub fn with_arg(mut self, arg: impl IntoArg) -> Self {
        self.arg(arg);
        self
    }

    /// The ordered segments appended so far.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Snapshot the current segments as an immutable [`Query`].
    ///
    /// The builder stays usable; later appends do not affect the snapshot.
    pub fn build(&self) -> Query {
        Query::from_segments(self.segments.clone())
    }

    /// Turn the builder into a [`Query`] without copying.
    pub fn into_query(self) -> Query {
        Query::from_segments(self.segments)
    }
}

impl ToQuery for QueryBuilder {
    fn to_query(&self) -> Query {
        self.build()
    }

    fn borrowed_segments(&self) -> Option<&[Segment]> {
        Some(&self.segments)
    }
}

impl From<QueryBuilder> for Query {
    fn from(builder: QueryBuilder) -> Self {
        builder.into_query()
    }
}

impl_tree_arg!(QueryBuilder);
