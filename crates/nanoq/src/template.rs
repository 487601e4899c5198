//! Runtime template front-end.
//!
//! A template is a list of literal chunks with one interpolated item between
//! each pair of neighbours. Chunks are appended as code; items go through
//! [`IntoArg`], so only trees are spliced as code and everything else is
//! bound. The [`sql!`](crate::sql) macro produces the same tree at compile
//! time from a single string literal.

use crate::arg::{Arg, IntoArg};
use crate::builder::QueryBuilder;
use crate::error::{QueryError, QueryResult};
use crate::query::Query;

/// Interleave `chunks` and `args` into a tree.
///
/// Requires exactly one more chunk than arguments.
///
/// # Example
/// ```
/// use nanoq::{Compiler, IntoArg, template};
///
/// let q = template(
///     &["SELECT * FROM foo WHERE foo=", " LIMIT 2"],
///     [1_i32.into_arg()],
/// )?;
/// assert_eq!(Compiler::new().compile(&q).command, "SELECT * FROM foo WHERE foo=? LIMIT 2");
/// # Ok::<(), nanoq::QueryError>(())
/// ```
pub fn template<I>(chunks: &[&str], args: I) -> QueryResult<Query>
where
    I: IntoIterator,
    I::Item: IntoArg,
{
    let args: Vec<Arg> = args.into_iter().map(IntoArg::into_arg).collect();
    if chunks.len() != args.len() + 1 {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            chunks = chunks.len(),
            args = args.len(),
            "template chunks and arguments do not interleave"
        );
        return Err(QueryError::TemplateArity {
            chunks: chunks.len(),
            args: args.len(),
        });
    }

    let mut query = QueryBuilder::new();
    let mut args = args.into_iter();
    for chunk in chunks {
        if !chunk.is_empty() {
            query.raw(*chunk);
        }
        if let Some(arg) = args.next() {
            query.arg(arg);
        }
    }
    Ok(query.into_query())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::Compiler;
    use crate::value::Value;

    #[test]
    fn interleaves_chunks_and_values() {
        let q = template(
            &["SELECT * FROM foo WHERE foo=", " bar=", " LIMIT 2"],
            [1_i32.into_arg(), "hello world".into_arg()],
        )
        .unwrap();

        let compiled = Compiler::new().compile(&q);
        assert_eq!(compiled.command, "SELECT * FROM foo WHERE foo=? bar=? LIMIT 2");
        assert_eq!(
            compiled.bindings,
            vec![Value::Int(1), Value::Text("hello world".into())]
        );
    }

    #[test]
    fn trees_are_spliced_as_code() {
        let order = template(&["ORDER BY x * ", ""], [2.5]).unwrap();
        let q = template(
            &["SELECT * FROM foo WHERE foo=", " ", " LIMIT 2"],
            [1_i32.into_arg(), order.into_arg()],
        )
        .unwrap();

        let compiled = Compiler::new().compile(&q);
        assert_eq!(
            compiled.command,
            "SELECT * FROM foo WHERE foo=? ORDER BY x * ? LIMIT 2"
        );
        assert_eq!(compiled.bindings, vec![Value::Int(1), Value::Float(2.5)]);
    }

    #[test]
    fn sql_looking_strings_are_still_bound() {
        let q = template(&["SELECT * FROM t WHERE name = ", ""], ["x'; DROP TABLE t; --"]).unwrap();
        let compiled = Compiler::new().compile(&q);
        assert_eq!(compiled.command, "SELECT * FROM t WHERE name = ?");
        assert_eq!(compiled.bindings.len(), 1);
    }

    #[test]
    fn single_chunk_needs_no_args() {
        let q = template(&["SELECT 1"], Vec::<Arg>::new()).unwrap();
        assert_eq!(Compiler::new().compile(&q).command, "SELECT 1");
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let err = template(&["a", "b"], Vec::<Arg>::new()).unwrap_err();
        assert!(matches!(err, QueryError::TemplateArity { chunks: 2, args: 0 }));
        assert_eq!(err.to_string(), "Template expects 1 argument(s) for 2 chunk(s), got 0");

        assert!(template(&[], [1]).is_err());
    }
}
