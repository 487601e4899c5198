//! Column predicates over validated identifiers.
//!
//! Each function checks the column name with [`Ident`](crate::Ident) and
//! returns a small tree `column <op> <value>`. Values are always bound.

use super::set::SetExpression;
use crate::builder::QueryBuilder;
use crate::error::QueryResult;
use crate::ident::IntoIdent;
use crate::query::Query;
use crate::value::Value;

fn compare(column: impl IntoIdent, op: &str, value: Value) -> QueryResult<Query> {
    let column = column.into_ident()?;
    Ok(QueryBuilder::new()
        .with_raw(column)
        .with_raw(format!(" {op} "))
        .with_value(value)
        .into_query())
}

/// `column = value`
pub fn eq(column: impl IntoIdent, value: impl Into<Value>) -> QueryResult<Query> {
    compare(column, "=", value.into())
}

/// `column != value`
pub fn ne(column: impl IntoIdent, value: impl Into<Value>) -> QueryResult<Query> {
    compare(column, "!=", value.into())
}

/// `column > value`
pub fn gt(column: impl IntoIdent, value: impl Into<Value>) -> QueryResult<Query> {
    compare(column, ">", value.into())
}

/// `column >= value`
pub fn gte(column: impl IntoIdent, value: impl Into<Value>) -> QueryResult<Query> {
    compare(column, ">=", value.into())
}

/// `column < value`
pub fn lt(column: impl IntoIdent, value: impl Into<Value>) -> QueryResult<Query> {
    compare(column, "<", value.into())
}

/// `column <= value`
pub fn lte(column: impl IntoIdent, value: impl Into<Value>) -> QueryResult<Query> {
    compare(column, "<=", value.into())
}

/// `column LIKE pattern`
pub fn like(column: impl IntoIdent, pattern: impl Into<Value>) -> QueryResult<Query> {
    compare(column, "LIKE", pattern.into())
}

/// `column ILIKE pattern`
pub fn ilike(column: impl IntoIdent, pattern: impl Into<Value>) -> QueryResult<Query> {
    compare(column, "ILIKE", pattern.into())
}

/// `column IS NULL`
pub fn is_null(column: impl IntoIdent) -> QueryResult<Query> {
    let column = column.into_ident()?;
    Ok(QueryBuilder::new()
        .with_raw(column)
        .with_raw(" IS NULL")
        .into_query())
}

/// `column IS NOT NULL`
pub fn is_not_null(column: impl IntoIdent) -> QueryResult<Query> {
    let column = column.into_ident()?;
    Ok(QueryBuilder::new()
        .with_raw(column)
        .with_raw(" IS NOT NULL")
        .into_query())
}

fn membership<I>(column: impl IntoIdent, op: &str, values: I, when_empty: &str) -> QueryResult<Query>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let column = column.into_ident()?;
    let set = SetExpression::values(values);
    // An empty list has no valid SQL form; fall back to a constant predicate.
    if set.is_empty() {
        return Ok(Query::raw(when_empty));
    }
    Ok(QueryBuilder::new()
        .with_raw(column)
        .with_raw(format!(" {op} "))
        .with_raw(set.with_parenthesis())
        .into_query())
}

/// `column IN (v1,v2,...)`; an empty list renders `1=0`.
pub fn in_list<I>(column: impl IntoIdent, values: I) -> QueryResult<Query>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    membership(column, "IN", values, "1=0")
}

/// `column NOT IN (v1,v2,...)`; an empty list renders `1=1`.
pub fn not_in<I>(column: impl IntoIdent, values: I) -> QueryResult<Query>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    membership(column, "NOT IN", values, "1=1")
}

/// `column BETWEEN from AND to`
pub fn between(
    column: impl IntoIdent,
    from: impl Into<Value>,
    to: impl Into<Value>,
) -> QueryResult<Query> {
    let column = column.into_ident()?;
    Ok(QueryBuilder::new()
        .with_raw(column)
        .with_raw(" BETWEEN ")
        .with_value(from)
        .with_raw(" AND ")
        .with_value(to)
        .into_query())
}
