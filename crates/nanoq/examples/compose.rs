//! Composing queries from fragments
//!
//! Run with: cargo run --example compose -p nanoq

use nanoq::clause::{
    ConditionClause, SelectStatement, SetExpression, WhereClause, eq, group, gt, in_list,
};
use nanoq::{Compiled, Compiler, Placeholder, QueryBuilder, QueryResult, sql};

fn show(title: &str, compiled: &Compiled) {
    println!("=== {title} ===");
    println!("{}", compiled.command);
    println!("{:?}\n", compiled.bindings);
}

fn main() -> QueryResult<()> {
    let pg = Compiler::numbered();

    // ============================================
    // Example 1: template macro
    // ============================================
    let title = "Spider Man";
    let q = sql!("SELECT * FROM movies WHERE title = {title} LIMIT {}", 1);
    show("sql! template", &pg.compile(&q));

    // ============================================
    // Example 2: multi-row insert
    // ============================================
    let movies = [("Spider Man", 6), ("Spider Man 2", 7), ("The Matrix", 9)];
    let mut rows = SetExpression::new();
    for (title, score) in movies {
        rows = rows.nested(SetExpression::new().value(title).value(score));
    }
    let insert = sql!("INSERT INTO movies (title, score) VALUES {rows}");
    show("multi-row insert", &pg.compile(&insert));

    // ============================================
    // Example 3: update with a filter
    // ============================================
    let assignments = SetExpression::new()
        .raw(eq("score", 8)?)
        .raw(eq("title", "Spider Man 2")?);
    let update = sql!(
        "UPDATE movies SET {assignments} {}",
        WhereClause::new().and(eq("title", "Spider Man 2")?)
    );
    show("update", &pg.compile(&update));

    // ============================================
    // Example 4: statement composer with a sub-select
    // ============================================
    let top = SelectStatement::new()
        .select("movie_id")
        .from("ratings")
        .and_where(gt("stars", 4)?);
    let either = ConditionClause::new()
        .or(in_list("id", [1, 2, 3])?)
        .or(sql!("id IN {}", group(top)));
    let q = SelectStatement::new()
        .select("title")
        .select("score")
        .from("movies")
        .and_where(either)
        .order_by("score DESC")
        .limit(10);
    show("select", &pg.compile(&q));

    // ============================================
    // Example 5: other dialects
    // ============================================
    let q = QueryBuilder::joined(" ")
        .with_raw("SELECT * FROM t WHERE a =")
        .with_value(1)
        .with_raw("AND b =")
        .with_value(2)
        .into_query();
    for style in [Placeholder::QuestionMark, Placeholder::Colon, Placeholder::AtP] {
        show(&format!("{style:?}"), &Compiler::new().placeholder(style).compile(&q));
    }

    Ok(())
}
