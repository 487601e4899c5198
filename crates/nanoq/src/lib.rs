//! # nanoq
//!
//! Compose SQL from fragments without ever interpolating user data.
//!
//! A [`Query`] is a tree of literal code, bound values and nested queries.
//! A [`Compiler`] flattens it into a command string with placeholders plus
//! the bindings in placeholder order, ready for a driver's parameterized
//! execution API.
//!
//! ## Features
//!
//! - **Code/data separation**: only text passed as code (or trees) becomes SQL;
//!   every value is a binding
//! - **Composable**: trees embed trees at any depth; placeholders stay
//!   numbered in document order
//! - **Dialect-agnostic**: `?`, `$n`, `:n`, `@pn` or a custom placeholder function
//! - **Template macro**: `sql!("... {expr} ...")` classifies each interpolation
//!   at compile time
//!
//! ## Example
//!
//! ```
//! use nanoq::{Compiler, QueryBuilder, sql};
//!
//! let id = 1;
//! let order = sql!("ORDER BY score * {}", 2.5);
//! let q = sql!("SELECT * FROM movies WHERE id = {id} {&order} LIMIT 2");
//!
//! let compiled = Compiler::numbered().compile(&q);
//! assert_eq!(compiled.command, "SELECT * FROM movies WHERE id = $1 ORDER BY score * $2 LIMIT 2");
//! assert_eq!(compiled.bindings.len(), 2);
//!
//! // The same tree, built by hand.
//! let q = QueryBuilder::new()
//!     .with_raw("SELECT * FROM movies WHERE id = ")
//!     .with_value(id)
//!     .with_raw(" ")
//!     .with_raw(order)
//!     .with_raw(" LIMIT 2");
//! assert_eq!(Compiler::numbered().compile(&q), compiled);
//! ```
//!
//! ## Safety boundary
//!
//! Interpolating a tree splices it as code. This is the intended way to
//! compose queries, and it is the only path by which an interpolated item
//! becomes code: [`IntoArg`] is sealed and implemented for trees and scalars
//! only.

extern crate self as nanoq;

mod arg;
mod builder;
pub mod clause;
pub mod compiler;
pub mod error;
pub mod ident;
mod query;
mod template;
pub mod value;

#[cfg(feature = "postgres")]
mod pg;

pub use arg::{Arg, Fragment, IntoArg};
pub use builder::{QueryBuilder, QueryOptions};
pub use compiler::{Compiled, Compiler, CompilerConfig, Placeholder};
pub use error::{QueryError, QueryResult};
pub use ident::{Ident, IntoIdent};
pub use query::{Query, Segment, ToQuery};
pub use template::template;
pub use value::Value;

#[cfg(feature = "macros")]
pub use nanoq_macros::sql;
