//! Classification of items appended to a tree.
//!
//! Two closed sets decide how an item enters a tree:
//!
//! - [`Fragment`]: what `raw()` accepts, either trusted code text or a tree.
//! - [`Arg`]: what template interpolation accepts, either a tree (spliced as code)
//!   or a scalar (bound as a value).
//!
//! Only types that are trees (`Query`, builders, composers) classify as code
//! in an [`Arg`]. Everything else is a bound value. [`IntoArg`] is sealed so
//! that no outside type can opt itself into the "code" side.

use crate::query::Query;
use crate::value::Value;

/// A trusted item for [`QueryBuilder::raw`](crate::QueryBuilder::raw).
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Verbatim code.
    Code(String),
    /// A nested tree.
    Query(Query),
    /// A comma-separated list from a
    /// [`SetExpression`](crate::clause::SetExpression). Spliced like
    /// [`Fragment::Query`], except that a list appended to another list is
    /// parenthesized.
    List(Query),
}

impl Fragment {
    /// Whether this item would render as nothing.
    pub(crate) fn is_blank(&self) -> bool {
        match self {
            Fragment::Code(code) => code.is_empty(),
            Fragment::Query(q) | Fragment::List(q) => q.is_blank(),
        }
    }
}

impl From<&str> for Fragment {
    fn from(code: &str) -> Self {
        Fragment::Code(code.to_string())
    }
}

impl From<String> for Fragment {
    fn from(code: String) -> Self {
        Fragment::Code(code)
    }
}

impl From<&String> for Fragment {
    fn from(code: &String) -> Self {
        Fragment::Code(code.clone())
    }
}

/// An interpolated template item, classified once at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A tree: spliced into the command as code.
    Query(Query),
    /// A scalar: bound as a parameter.
    Value(Value),
}

mod private {
    pub trait Sealed {}
}

pub(crate) use private::Sealed;

/// Conversion into an [`Arg`].
///
/// Trees become [`Arg::Query`]; scalars (and [`Value`]) become [`Arg::Value`].
/// This trait is sealed.
pub trait IntoArg: Sealed {
    fn into_arg(self) -> Arg;
}

impl Sealed for Arg {}

impl IntoArg for Arg {
    fn into_arg(self) -> Arg {
        self
    }
}

impl Sealed for Value {}

impl IntoArg for Value {
    fn into_arg(self) -> Arg {
        Arg::Value(self)
    }
}

impl<T: Into<Value>> Sealed for Option<T> {}

impl<T: Into<Value>> IntoArg for Option<T> {
    fn into_arg(self) -> Arg {
        Arg::Value(self.into())
    }
}

macro_rules! impl_scalar_arg {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sealed for $t {}

            impl IntoArg for $t {
                fn into_arg(self) -> Arg {
                    Arg::Value(Value::from(self))
                }
            }
        )*
    };
}

impl_scalar_arg!(i8, i16, i32, i64, u8, u16, u32, f32, f64, bool, char, String, &str, &String);

/// Implement `Fragment`/`Arg` conversions for a tree-like type.
///
/// The type must implement [`ToQuery`](crate::ToQuery).
macro_rules! impl_tree_arg {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for $crate::arg::Fragment {
                fn from(tree: $t) -> Self {
                    $crate::arg::Fragment::Query($crate::query::ToQuery::to_query(&tree))
                }
            }

            impl From<&$t> for $crate::arg::Fragment {
                fn from(tree: &$t) -> Self {
                    $crate::arg::Fragment::Query($crate::query::ToQuery::to_query(tree))
                }
            }

            impl $crate::arg::Sealed for $t {}

            impl $crate::arg::IntoArg for $t {
                fn into_arg(self) -> $crate::arg::Arg {
                    $crate::arg::Arg::Query($crate::query::ToQuery::to_query(&self))
                }
            }

            impl $crate::arg::Sealed for &$t {}

            impl $crate::arg::IntoArg for &$t {
                fn into_arg(self) -> $crate::arg::Arg {
                    $crate::arg::Arg::Query($crate::query::ToQuery::to_query(self))
                }
            }
        )*
    };
}

pub(crate) use impl_tree_arg;

impl_tree_arg!(Query);
