//! Flattening fragment trees into parameterized commands.
//!
//! The compiler walks a tree depth-first, left to right, in a single pass:
//!
//! - literals are copied verbatim,
//! - nested trees are walked in place,
//! - every value gets the next placeholder and its payload is pushed onto
//!   the bindings.
//!
//! The value counter lives in the walk state of one `compile` call, so
//! placeholders are numbered contiguously across nesting levels and the
//! compiler itself holds no mutable state. A single `Compiler` can be shared
//! across threads.
//!
//! # Example
//!
//! ```
//! use nanoq::{Compiler, Placeholder, QueryBuilder};
//!
//! let order = QueryBuilder::new().with_raw("ORDER BY x * ").with_value(2.5);
//! let q = QueryBuilder::joined(" ")
//!     .with_raw("SELECT * FROM foo WHERE foo =")
//!     .with_value(1)
//!     .with_raw(&order);
//!
//! let compiled = Compiler::new().placeholder(Placeholder::Dollar).compile(&q);
//! assert_eq!(compiled.command, "SELECT * FROM foo WHERE foo = $1 ORDER BY x * $2");
//! assert_eq!(compiled.bindings.len(), 2);
//! ```

mod config;


pub use config::{CompilerConfig, Placeholder, PlaceholderFn, PostProcessFn};

use crate::query::{Segment, ToQuery};
use crate::value::Value;
use serde::Serialize;

/// A compiled statement: command text plus bindings in placeholder order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compiled {
    /// Command text with placeholders in place of values.
    pub command: String,
    /// Bound values; `bindings[i]` belongs to the i-th placeholder.
    pub bindings: Vec<Value>,
}

impl Compiled {
    /// The command text.
    pub fn sql(&self) -> &str {
        &self.command
    }

    /// Split into command and bindings.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.command, self.bindings)
    }
}

/// Turns fragment trees into [`Compiled`] statements.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    /// Create a compiler with `?` placeholders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compiler from a configuration.
    pub fn with_config(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Create a compiler with `$1, $2, ...` placeholders.
    pub fn numbered() -> Self {
        Self::new().placeholder(Placeholder::Dollar)
    }

    /// Set the placeholder scheme.
    pub fn placeholder(mut self, placeholder: Placeholder) -> Self {
        self.config.placeholder = placeholder;
        self
    }

    /// Name placeholders with a custom function of the 0-based value index.
    pub fn placeholder_fn(self, f: impl Fn(usize) -> String + Send + Sync + 'static) -> Self {
        self.placeholder(Placeholder::custom(f))
    }

    /// Enable or disable whitespace normalization of the final command.
    pub fn normalize_whitespace(mut self, enabled: bool) -> Self {
        self.config.normalize_whitespace = enabled;
        self
    }

    /// Apply `f` once to the assembled command.
    pub fn post_process(mut self, f: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        self.config = self.config.post_process(f);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile a tree into a command string and its bindings.
    ///
    /// Compilation does not modify the tree and always yields the same
    /// output for the same tree.
    pub fn compile<Q: ToQuery + ?Sized>(&self, query: &Q) -> Compiled {
        let owned;
        let segments = match query.borrowed_segments() {
            Some(segments) => segments,
            None => {
                owned = query.to_query();
                owned.segments()
            }
        };

        let mut walk = Walk {
            placeholder: &self.config.placeholder,
            command: String::new(),
            bindings: Vec::new(),
        };
        walk.segments(segments);

        let Walk {
            command, bindings, ..
        } = walk;
        let command = self.config.finish(command);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            placeholders = bindings.len(),
            command_len = command.len(),
            "compiled query"
        );

        Compiled { command, bindings }
    }
}

/// State of one compilation.
///
/// The value index is `bindings.len()`: a value's placeholder is named after
/// the number of values already bound, which keeps numbering contiguous
/// across subtrees.
struct Walk<'a> {
    placeholder: &'a Placeholder,
    command: String,
    bindings: Vec<Value>,
}

impl Walk<'_> {
    fn segments(&mut self, segments: &[Segment]) {
        for segment in segments {
            match segment {
                Segment::Literal(code) => self.command.push_str(code),
                Segment::Subtree(query) => self.segments(query.segments()),
                Segment::Value(value) => {
                    let value_index = self.bindings.len();
                    self.placeholder.write_token(value_index, &mut self.command);
                    self.bindings.push(value.clone());
                }
            }
        }
    }
}
