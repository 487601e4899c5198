//! Validated SQL identifiers.
//!
//! Identifiers cannot be bound as parameters, so when a column or table name
//! comes from outside the program it has to enter the command as code. An
//! [`Ident`] is the safe way to do that: it only accepts
//!
//! - unquoted parts matching `[A-Za-z_][A-Za-z0-9_$]*`,
//! - quoted parts (`"..."`) with any character except NUL, `""` escaping `"`,
//!
//! joined by dots.
//!
//! # Example
//! ```
//! use nanoq::Ident;
//!
//! let t = Ident::parse(r#"public."UserTable""#)?;
//! assert_eq!(t.to_sql(), r#"public."UserTable""#);
//! assert!(Ident::parse("users; DROP TABLE users").is_err());
//! # Ok::<(), nanoq::QueryError>(())
//! ```

use crate::arg::Fragment;
use crate::error::{QueryError, QueryResult};

/// One dot-separated part of an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentPart {
    Unquoted(String),
    Quoted(String),
}

/// A validated, possibly dotted, SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    parts: Vec<IdentPart>,
}

impl Ident {
    /// A single quoted identifier from arbitrary text (NUL excluded).
    pub fn quoted(name: &str) -> QueryResult<Self> {
        if name.is_empty() {
            return Err(QueryError::invalid_ident("empty quoted identifier"));
        }
        if name.contains('\0') {
            return Err(QueryError::invalid_ident("identifier cannot contain NUL"));
        }
        Ok(Self {
            parts: vec![IdentPart::Quoted(name.to_string())],
        })
    }

    /// Parse dotted/quoted identifier syntax.
    pub fn parse(s: &str) -> QueryResult<Self> {
        if s.is_empty() {
            return Err(QueryError::invalid_ident("identifier cannot be empty"));
        }
        if s.contains('\0') {
            return Err(QueryError::invalid_ident("identifier cannot contain NUL"));
        }

        let mut parts = Vec::new();
        let mut chars = s.chars().peekable();

        loop {
            if chars.peek() == Some(&'"') {
                chars.next();
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('"') if chars.peek() == Some(&'"') => {
                            chars.next();
                            name.push('"');
                        }
                        Some('"') => break,
                        Some(c) => name.push(c),
                        None => {
                            return Err(QueryError::invalid_ident(format!(
                                "unclosed quoted identifier in '{s}'"
                            )));
                        }
                    }
                }
                if name.is_empty() {
                    return Err(QueryError::invalid_ident("empty quoted identifier"));
                }
                parts.push(IdentPart::Quoted(name));
            } else {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if c == '.' {
                        break;
                    }
                    let ok = if name.is_empty() {
                        c == '_' || c.is_ascii_alphabetic()
                    } else {
                        c == '_' || c == '$' || c.is_ascii_alphanumeric()
                    };
                    if !ok {
                        return Err(QueryError::invalid_ident(format!(
                            "invalid character '{c}' in '{s}'"
                        )));
                    }
                    name.push(c);
                    chars.next();
                }
                if name.is_empty() {
                    return Err(QueryError::invalid_ident(format!("empty part in '{s}'")));
                }
                parts.push(IdentPart::Unquoted(name));
            }

            match chars.next() {
                None => break,
                Some('.') if chars.peek().is_some() => continue,
                Some('.') => {
                    return Err(QueryError::invalid_ident(format!("trailing '.' in '{s}'")));
                }
                Some(c) => {
                    return Err(QueryError::invalid_ident(format!(
                        "expected '.' between parts of '{s}', got '{c}'"
                    )));
                }
            }
        }

        Ok(Self { parts })
    }

    /// The parts of this identifier.
    pub fn parts(&self) -> &[IdentPart] {
        &self.parts
    }

    /// Render as SQL.
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match part {
                IdentPart::Unquoted(s) => out.push_str(s),
                IdentPart::Quoted(s) => {
                    out.push('"');
                    out.push_str(&s.replace('"', "\"\""));
                    out.push('"');
                }
            }
        }
    }
}

impl From<Ident> for Fragment {
    fn from(ident: Ident) -> Self {
        Fragment::Code(ident.to_sql())
    }
}

impl From<&Ident> for Fragment {
    fn from(ident: &Ident) -> Self {
        Fragment::Code(ident.to_sql())
    }
}

/// Conversion into an [`Ident`], for builder APIs taking column names.
pub trait IntoIdent {
    fn into_ident(self) -> QueryResult<Ident>;
}

impl IntoIdent for Ident {
    fn into_ident(self) -> QueryResult<Ident> {
        Ok(self)
    }
}

impl IntoIdent for &Ident {
    fn into_ident(self) -> QueryResult<Ident> {
        Ok(self.clone())
    }
}

impl IntoIdent for &str {
    fn into_ident(self) -> QueryResult<Ident> {
        Ident::parse(self)
    }
}

impl IntoIdent for String {
    fn into_ident(self) -> QueryResult<Ident> {
        Ident::parse(&self)
    }
}
