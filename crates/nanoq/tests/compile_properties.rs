//! End-to-end checks of the compiler's ordering and nesting guarantees.

#![allow(clippy::approx_constant)]

use nanoq::{Arg, Compiler, Placeholder, Query, QueryBuilder, Segment, Value, template};

// ── Deterministic tree generator ─────────────────────────────────────────────

struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

/// A random tree plus the same content with every subtree spliced in place.
fn random_tree(rng: &mut Lcg, depth: usize, counter: &mut i64) -> (Query, Vec<Segment>) {
    let mut q = QueryBuilder::new();
    let mut flat = Vec::new();
    for _ in 0..rng.below(6) {
        match rng.below(3) {
            0 => {
                let text = format!(" t{} ", rng.below(100));
                q.raw(text.as_str());
                flat.push(Segment::Literal(text));
            }
            1 => {
                *counter += 1;
                q.value(*counter);
                flat.push(Segment::Value(Value::Int(*counter)));
            }
            _ if depth > 0 => {
                let (sub, sub_flat) = random_tree(rng, depth - 1, counter);
                q.raw(sub);
                flat.extend(sub_flat);
            }
            _ => {}
        }
    }
    (q.into_query(), flat)
}

fn literal_text(segments: &[Segment]) -> String {
    let mut out = String::new();
    for s in segments {
        match s {
            Segment::Literal(t) => out.push_str(t),
            Segment::Subtree(q) => out.push_str(&literal_text(q.segments())),
            Segment::Value(_) => {}
        }
    }
    out
}

#[test]
fn placeholders_match_bindings_in_order() {
    let mut rng = Lcg(7);
    for _ in 0..200 {
        let mut counter = 0;
        let (tree, _) = random_tree(&mut rng, 4, &mut counter);
        let compiled = Compiler::new()
            .placeholder_fn(|i| format!("<{}>", i + 1))
            .compile(&tree);

        // Values were numbered 1..=n in document order, so the i-th token
        // must carry binding i.
        assert_eq!(compiled.bindings.len() as i64, counter);
        for (i, binding) in compiled.bindings.iter().enumerate() {
            assert_eq!(binding, &Value::Int(i as i64 + 1));
        }
        let tokens: Vec<&str> = compiled
            .command
            .match_indices('<')
            .map(|(start, _)| {
                let end = start + compiled.command[start..].find('>').unwrap();
                &compiled.command[start + 1..end]
            })
            .collect();
        let expected: Vec<String> = (1..=counter).map(|i| i.to_string()).collect();
        assert_eq!(tokens, expected);
    }
}

#[test]
fn nesting_matches_splicing() {
    let mut rng = Lcg(42);
    let compiler = Compiler::numbered();
    for _ in 0..200 {
        let mut counter = 0;
        let (tree, flat) = random_tree(&mut rng, 5, &mut counter);
        let spliced = tree_from_segments(flat);
        assert_eq!(compiler.compile(&tree), compiler.compile(&spliced));
    }
}

fn tree_from_segments(segments: Vec<Segment>) -> Query {
    let mut q = QueryBuilder::new();
    for s in segments {
        match s {
            Segment::Literal(t) => q.raw(t),
            Segment::Value(v) => q.value(v),
            Segment::Subtree(sub) => q.raw(sub),
        };
    }
    q.into_query()
}

#[test]
fn literal_only_trees_concatenate() {
    let mut rng = Lcg(3);
    for _ in 0..100 {
        let mut q = QueryBuilder::joined(",");
        let mut inner = QueryBuilder::new();
        for _ in 0..rng.below(4) {
            inner.raw(format!("x{}", rng.below(10)));
        }
        q.raw("a").raw(&inner).raw("c");

        let tree = q.build();
        let compiled = Compiler::new().compile(&tree);
        assert!(compiled.bindings.is_empty());
        assert_eq!(compiled.command, literal_text(tree.segments()));
    }
}

#[test]
fn compiling_twice_is_identical() {
    let mut rng = Lcg(99);
    let mut counter = 0;
    let (tree, _) = random_tree(&mut rng, 6, &mut counter);
    let compiler = Compiler::new().placeholder(Placeholder::AtP);
    assert_eq!(compiler.compile(&tree), compiler.compile(&tree));
}

// ── Worked examples ──────────────────────────────────────────────────────────

#[test]
fn join_separator() {
    let q = QueryBuilder::joined(",").with_raw("a").with_raw("b").with_raw("c");
    assert_eq!(Compiler::new().compile(&q).command, "a,b,c");
}

#[test]
fn select_with_default_placeholder() {
    let q = QueryBuilder::new()
        .with_raw("SELECT * FROM foo WHERE foo=")
        .with_value(1)
        .with_raw(" LIMIT 2");

    let compiled = Compiler::new().compile(&q);
    assert_eq!(compiled.command, "SELECT * FROM foo WHERE foo=? LIMIT 2");
    assert_eq!(compiled.bindings, vec![Value::Int(1)]);
}

#[test]
fn nested_order_by() {
    let raw_query = QueryBuilder::new().with_raw("ORDER BY x * ").with_value(3.14);
    let q = template(
        &["SELECT * FROM foo WHERE foo=", " ", " LIMIT 2"],
        [Arg::Value(Value::Int(1)), Arg::Query(raw_query.build())],
    )
    .unwrap();

    let compiled = Compiler::new().compile(&q);
    assert_eq!(
        compiled.command,
        "SELECT * FROM foo WHERE foo=? ORDER BY x * ? LIMIT 2"
    );
    assert_eq!(compiled.bindings, vec![Value::Int(1), Value::Float(3.14)]);
}

#[test]
fn numbered_placeholders_ignore_structure() {
    let deep = QueryBuilder::new()
        .with_raw(QueryBuilder::new().with_raw(QueryBuilder::new().with_value("b")));
    let q = QueryBuilder::joined(" -- ")
        .with_value("a")
        .with_raw("lit")
        .with_raw(Query::empty())
        .with_raw(deep);

    let compiled = Compiler::new()
        .placeholder_fn(|i| format!("${}", i + 1))
        .compile(&q);
    assert_eq!(compiled.command, "$1 -- lit --  -- $2");
    assert_eq!(compiled.bindings, vec![Value::from("a"), Value::from("b")]);
}

#[test]
fn compiled_trees_are_shareable_across_threads() {
    let tree = QueryBuilder::new()
        .with_raw("SELECT ")
        .with_value(1)
        .into_query();
    let compiler = Compiler::numbered();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| compiler.compile(&tree)))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap().command, "SELECT $1");
        }
    });
}
