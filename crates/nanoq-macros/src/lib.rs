//! Template macros for nanoq
//!
//! Provides the `sql!` macro. Use it through the `nanoq` crate, which
//! re-exports it.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod sql;
mod template;

/// Build a `nanoq::Query` from a template string.
///
/// Text outside braces is code. Each `{expr}` hole is an interpolation:
/// trees (`Query`, builders, composers) are spliced as code, every other
/// value is bound as a parameter. `{}` holes take the trailing arguments in
/// order. `{{` and `}}` are literal braces.
///
/// # Example
///
/// ```ignore
/// use nanoq::{Compiler, sql};
///
/// let id = 7;
/// let order = sql!("ORDER BY created_at DESC");
/// let q = sql!("SELECT * FROM users WHERE id = {id} {order} LIMIT {}", 10);
///
/// let c = Compiler::numbered().compile(&q);
/// assert_eq!(c.command, "SELECT * FROM users WHERE id = $1 ORDER BY created_at DESC LIMIT $2");
/// ```
///
/// Holes take their expression by value, like a function argument; write
/// `{&tree}` to keep using a tree afterwards.
#[proc_macro]
pub fn sql(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as sql::SqlInput);
    sql::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
