//! The fragment tree.
//!
//! A [`Query`] is an immutable, ordered sequence of [`Segment`]s. It is cheap
//! to clone (the segments live behind an `Arc`), so one tree may be embedded
//! in any number of parents without copying.
//!
//! Because a `Query` can only embed trees that already exist when it is
//! built, a tree can never contain itself: cyclic composition is impossible
//! by construction and the compiler needs no cycle check.

use crate::value::Value;
use std::sync::Arc;

/// One element of a fragment tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Verbatim code, never escaped or inspected.
    Literal(String),
    /// A bound parameter.
    Value(Value),
    /// Another tree, spliced in at this position.
    Subtree(Query),
}

/// An immutable fragment tree.
///
/// Build one with [`QueryBuilder`](crate::QueryBuilder), the
/// [`sql!`](crate::sql) macro, [`template`](crate::template) or the
/// [`clause`](crate::clause) composers, then hand it to a
/// [`Compiler`](crate::Compiler).
#[derive(Clone, Default, PartialEq)]
pub struct Query {
    segments: Arc<[Segment]>,
}

impl Query {
    /// An empty tree. Compiles to an empty command with no bindings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A tree holding a single literal.
    pub fn raw(code: impl Into<String>) -> Self {
        Self::from_segments(vec![Segment::Literal(code.into())])
    }

    /// A tree holding a single bound value.
    pub fn value(value: impl Into<Value>) -> Self {
        Self::from_segments(vec![Segment::Value(value.into())])
    }

    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        Self {
            segments: segments.into(),
        }
    }

    /// The ordered segments of this tree.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of top-level segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the tree has no top-level segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total number of values in this tree, nested trees included.
    pub fn value_count(&self) -> usize {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Literal(_) => 0,
                Segment::Value(_) => 1,
                Segment::Subtree(q) => q.value_count(),
            })
            .sum()
    }

    /// Whether compiling this tree would produce no text at all.
    pub(crate) fn is_blank(&self) -> bool {
        self.segments.iter().all(|s| match s {
            Segment::Literal(code) => code.is_empty(),
            Segment::Value(_) => false,
            Segment::Subtree(q) => q.is_blank(),
        })
    }

    /// Whether `self` and `other` share the same segment storage.
    pub fn ptr_eq(&self, other: &Query) -> bool {
        Arc::ptr_eq(&self.segments, &other.segments)
    }
}

impl std::fmt::Debug for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.segments.iter()).finish()
    }
}

/// Anything that can be turned into a fragment tree.
///
/// Implemented by [`Query`], [`QueryBuilder`](crate::QueryBuilder) and every
/// composer in [`clause`](crate::clause). The compiler and the builders accept
/// any `ToQuery`, so callers rarely need to call `build()` themselves.
pub trait ToQuery {
    /// Snapshot `self` as an immutable tree.
    fn to_query(&self) -> Query;

    /// The top-level segments, when `self` already holds them.
    ///
    /// Lets the compiler read a tree or builder in place instead of
    /// snapshotting it first. Composers assemble their tree on demand and
    /// keep the default.
    fn borrowed_segments(&self) -> Option<&[Segment]> {
        None
    }
}

impl ToQuery for Query {
    fn to_query(&self) -> Query {
        self.clone()
    }

    fn borrowed_segments(&self) -> Option<&[Segment]> {
        Some(&self.segments)
    }
}

impl<T: ToQuery + ?Sized> ToQuery for &T {
    fn to_query(&self) -> Query {
        (**self).to_query()
    }

    fn borrowed_segments(&self) -> Option<&[Segment]> {
        (**self).borrowed_segments()
    }
}
