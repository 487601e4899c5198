//! Clause-shaped composers.
//!
//! Everything here is a thin arrangement of [`QueryBuilder`](crate::QueryBuilder)
//! calls: the composers produce ordinary fragment trees and add no compiler
//! behavior. Values stay values and code stays code.
//!
//! # Example
//!
//! ```
//! use nanoq::clause::{SelectStatement, eq, gt};
//! use nanoq::Compiler;
//!
//! let q = SelectStatement::new()
//!     .select("id")
//!     .select("title")
//!     .from("movies")
//!     .and_where(eq("genre", "drama")?)
//!     .and_where(gt("score", 7)?)
//!     .order_by("score DESC")
//!     .limit(10);
//!
//! let compiled = Compiler::numbered().compile(&q);
//! assert_eq!(
//!     compiled.command,
//!     "SELECT id, title FROM movies WHERE genre = $1 AND score > $2 ORDER BY score DESC LIMIT $3"
//! );
//! # Ok::<(), nanoq::QueryError>(())
//! ```

mod condition;
mod group;
mod predicate;
mod select;
mod set;

pub use condition::{ConditionClause, Connective, WhereClause};
pub use group::{GroupExpression, group};
pub use predicate::{
    between, eq, gt, gte, ilike, in_list, is_not_null, is_null, like, lt, lte, ne, not_in,
};
pub use select::SelectStatement;
pub use set::SetExpression;
