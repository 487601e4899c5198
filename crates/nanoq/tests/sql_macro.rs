#![cfg(feature = "macros")]

use nanoq::clause::{ConditionClause, SelectStatement, eq};
use nanoq::{Compiler, Query, QueryBuilder, Value, sql};

#[test]
fn inline_holes_bind_scalars() {
    let id = 7;
    let name = "alice";
    let q = sql!("SELECT * FROM users WHERE id = {id} AND name = {name}");

    let c = Compiler::numbered().compile(&q);
    assert_eq!(c.command, "SELECT * FROM users WHERE id = $1 AND name = $2");
    assert_eq!(c.bindings, vec![Value::Int(7), Value::from("alice")]);
}

#[test]
fn positional_holes_take_trailing_args() {
    let q = sql!("SELECT * FROM t LIMIT {} OFFSET {}", 10, 20);

    let c = Compiler::new().compile(&q);
    assert_eq!(c.command, "SELECT * FROM t LIMIT ? OFFSET ?");
    assert_eq!(c.bindings, vec![Value::Int(10), Value::Int(20)]);
}

#[test]
fn strings_are_never_spliced() {
    let evil = String::from("'; DROP TABLE users; --");
    let q = sql!("SELECT * FROM users WHERE name = {&evil}");

    let c = Compiler::new().compile(&q);
    assert_eq!(c.command, "SELECT * FROM users WHERE name = ?");
    assert_eq!(c.bindings, vec![Value::Text(evil)]);
}

#[test]
fn trees_are_spliced_as_code() {
    let order = sql!("ORDER BY score * {}", 2.5);
    let q = sql!("SELECT * FROM movies WHERE id = {} {&order} LIMIT 2", 1);

    let c = Compiler::numbered().compile(&q);
    assert_eq!(
        c.command,
        "SELECT * FROM movies WHERE id = $1 ORDER BY score * $2 LIMIT 2"
    );
    assert_eq!(c.bindings, vec![Value::Int(1), Value::Float(2.5)]);

    // Still usable after a by-reference hole.
    assert_eq!(order.value_count(), 1);
}

#[test]
fn builders_and_composers_are_trees() {
    let mut filter = QueryBuilder::joined(" AND ");
    filter.raw(sql!("a = {}", 1)).raw(sql!("b = {}", 2));

    let stmt = SelectStatement::new()
        .from("t")
        .and_where(eq("c", 3).unwrap());

    let q = sql!("SELECT * FROM ({stmt}) s WHERE {filter}");
    let c = Compiler::numbered().compile(&q);
    assert_eq!(
        c.command,
        "SELECT * FROM (SELECT * FROM t WHERE c = $1) s WHERE a = $2 AND b = $3"
    );
    assert_eq!(c.bindings, vec![Value::Int(3), Value::Int(1), Value::Int(2)]);
}

#[test]
fn doubled_braces_are_literal() {
    let key = "tags";
    let q = sql!("SELECT '{{}}'::jsonb ? {key}");

    let c = Compiler::new()
        .placeholder(nanoq::Placeholder::Dollar)
        .compile(&q);
    assert_eq!(c.command, "SELECT '{}'::jsonb ? $1");
    assert_eq!(c.bindings, vec![Value::from("tags")]);
}

#[test]
fn none_binds_null() {
    let deleted_at: Option<i64> = None;
    let q = sql!("UPDATE t SET deleted_at = {deleted_at}");

    let c = Compiler::new().compile(&q);
    assert_eq!(c.command, "UPDATE t SET deleted_at = ?");
    assert_eq!(c.bindings, vec![Value::Null]);
}

#[test]
fn block_expressions_in_holes() {
    let desc = true;
    let q = sql!("SELECT * FROM t ORDER BY id {if desc { sql!(\"DESC\") } else { sql!(\"ASC\") }}");

    assert_eq!(
        Compiler::new().compile(&q).command,
        "SELECT * FROM t ORDER BY id DESC"
    );
}

#[test]
fn empty_and_code_only_templates() {
    let empty: Query = sql!("");
    assert!(empty.is_empty());

    let q = sql!("SELECT 1");
    let c = Compiler::new().compile(&q);
    assert_eq!(c.command, "SELECT 1");
    assert!(c.bindings.is_empty());
}

#[test]
fn matches_the_runtime_template_builder() {
    let inner = sql!("x * {}", 3);
    let from_macro = sql!("SELECT {} + {&inner}", 1);
    let from_fn = nanoq::template(
        &["SELECT ", " + ", ""],
        [nanoq::Arg::Value(Value::Int(1)), nanoq::Arg::Query(inner)],
    )
    .unwrap();

    let compiler = Compiler::numbered();
    assert_eq!(compiler.compile(&from_macro), compiler.compile(&from_fn));
}

#[test]
fn condition_clauses_interpolate_by_reference() {
    let either = ConditionClause::new()
        .or(eq("role", "admin").unwrap())
        .or(eq("role", "owner").unwrap());
    let q = sql!("SELECT * FROM users WHERE active = {} AND {&either}", true);

    let c = Compiler::numbered().compile(&q);
    assert_eq!(
        c.command,
        "SELECT * FROM users WHERE active = $1 AND (role = $2 OR role = $3)"
    );
    assert_eq!(either.len(), 2);
}
