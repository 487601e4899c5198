use crate::error::QueryResult;
use serde::Deserialize;
use std::fmt::{self, Write};
use std::sync::Arc;

/// Caller-supplied placeholder naming function.
pub type PlaceholderFn = Arc<dyn Fn(usize) -> String + Send + Sync>;

/// Caller-supplied transform applied once to the assembled command.
pub type PostProcessFn = Arc<dyn Fn(String) -> String + Send + Sync>;

/// How value placeholders are written into the command.
///
/// The index passed to the naming function is 0-based and counts values in
/// document order across the whole tree.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// `?` for every value (SQLite, MySQL).
    #[default]
    QuestionMark,
    /// `$1, $2, ...` (PostgreSQL).
    Dollar,
    /// `:1, :2, ...` (Oracle).
    Colon,
    /// `@p1, @p2, ...` (SQL Server).
    AtP,
    /// Any other scheme.
    ///
    /// The compiler does not check what this returns. A function that yields
    /// duplicate or malformed tokens produces a command the driver cannot
    /// bind correctly.
    #[serde(skip)]
    Custom(PlaceholderFn),
}

impl Placeholder {
    /// Wrap a naming function.
    pub fn custom(f: impl Fn(usize) -> String + Send + Sync + 'static) -> Self {
        Placeholder::Custom(Arc::new(f))
    }

    /// The token for the value at `index`.
    pub fn token(&self, index: usize) -> String {
        let mut out = String::new();
        self.write_token(index, &mut out);
        out
    }

    pub(crate) fn write_token(&self, index: usize, out: &mut String) {
        let prefix = match self {
            Placeholder::QuestionMark => {
                out.push('?');
                return;
            }
            Placeholder::Custom(f) => {
                out.push_str(&f(index));
                return;
            }
            Placeholder::Dollar => "$",
            Placeholder::Colon => ":",
            Placeholder::AtP => "@p",
        };
        out.push_str(prefix);
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", index + 1);
    }
}

impl fmt::Debug for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::QuestionMark => f.write_str("QuestionMark"),
            Placeholder::Dollar => f.write_str("Dollar"),
            Placeholder::Colon => f.write_str("Colon"),
            Placeholder::AtP => f.write_str("AtP"),
            Placeholder::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

/// Configuration for a [`Compiler`](super::Compiler).
///
/// The declarative part (`placeholder`, `normalize_whitespace`) can be loaded
/// from TOML; a post-processing function can only be set in code.
///
/// ```toml
/// placeholder = "dollar"
/// normalize_whitespace = true
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Placeholder naming scheme.
    pub placeholder: Placeholder,
    /// Collapse whitespace runs into single spaces and trim the ends.
    ///
    /// This runs over the whole command, including any quoted text inside
    /// literals.
    pub normalize_whitespace: bool,
    /// Transform applied after normalization.
    #[serde(skip)]
    pub post_process: Option<PostProcessFn>,
}

impl CompilerConfig {
    /// Create a new configuration with defaults (`?` placeholders, no post-processing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the declarative configuration from TOML.
    pub fn from_toml_str(s: &str) -> QueryResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Set the placeholder scheme.
    pub fn placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Enable or disable whitespace normalization.
    pub fn normalize_whitespace(mut self, enabled: bool) -> Self {
        self.normalize_whitespace = enabled;
        self
    }

    /// Set the post-processing function.
    pub fn post_process(mut self, f: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        self.post_process = Some(Arc::new(f));
        self
    }

    pub(crate) fn finish(&self, mut command: String) -> String {
        if self.normalize_whitespace {
            command = collapse_whitespace(&command);
        }
        match &self.post_process {
            Some(f) => f(command),
            None => command,
        }
    }
}

impl fmt::Debug for CompilerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompilerConfig")
            .field("placeholder", &self.placeholder)
            .field("normalize_whitespace", &self.normalize_whitespace)
            .field("post_process", &self.post_process.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
