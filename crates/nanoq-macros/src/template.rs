//! Template string parsing for `sql!`.

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece {
    /// Literal code between holes, with `{{`/`}}` already unescaped.
    Code(String),
    /// A `{expr}` hole, holding the expression source.
    Inline(String),
    /// A `{}` hole, filled from the trailing arguments.
    Positional,
}

/// Split `template` into code and holes.
///
/// Braces inside a hole are balanced, so block expressions like
/// `{ if a { x } else { y } }` work. Braces inside string literals in a hole
/// are not special-cased and must be balanced as well.
pub(crate) fn parse_template(template: &str) -> Result<Vec<Piece>, String> {
    let mut pieces = Vec::new();
    let mut code = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                code.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                code.push('}');
            }
            '}' => return Err("unmatched `}` in template; use `}}` for a literal brace".into()),
            '{' => {
                let mut depth = 1usize;
                let mut hole = String::new();
                loop {
                    match chars.next() {
                        Some('{') => {
                            depth += 1;
                            hole.push('{');
                        }
                        Some('}') => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                            hole.push('}');
                        }
                        Some(ch) => hole.push(ch),
                        None => {
                            return Err(
                                "unclosed `{` in template; use `{{` for a literal brace".into()
                            );
                        }
                    }
                }

                if !code.is_empty() {
                    pieces.push(Piece::Code(std::mem::take(&mut code)));
                }
                let hole = hole.trim();
                if hole.is_empty() {
                    pieces.push(Piece::Positional);
                } else {
                    pieces.push(Piece::Inline(hole.to_string()));
                }
            }
            other => code.push(other),
        }
    }

    if !code.is_empty() {
        pieces.push(Piece::Code(code));
    }
    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Piece {
        Piece::Code(s.to_string())
    }

    fn inline(s: &str) -> Piece {
        Piece::Inline(s.to_string())
    }

    #[test]
    fn splits_code_and_holes() {
        let pieces = parse_template("SELECT * FROM foo WHERE foo={id} LIMIT {}").unwrap();
        assert_eq!(
            pieces,
            vec![
                code("SELECT * FROM foo WHERE foo="),
                inline("id"),
                code(" LIMIT "),
                Piece::Positional,
            ]
        );
    }

    #[test]
    fn doubled_braces_are_literal() {
        let pieces = parse_template("SELECT '{{a}}'::json").unwrap();
        assert_eq!(pieces, vec![code("SELECT '{a}'::json")]);
    }

    #[test]
    fn nested_braces_stay_in_the_hole() {
        let pieces = parse_template("x = { if a { 1 } else { 2 } }").unwrap();
        assert_eq!(pieces, vec![code("x = "), inline("if a { 1 } else { 2 }")]);
    }

    #[test]
    fn adjacent_holes() {
        let pieces = parse_template("{a}{b}").unwrap();
        assert_eq!(pieces, vec![inline("a"), inline("b")]);
    }

    #[test]
    fn empty_template() {
        assert!(parse_template("").unwrap().is_empty());
    }

    #[test]
    fn unbalanced_braces_are_errors() {
        assert!(parse_template("a = {id").is_err());
        assert!(parse_template("a = }").is_err());
        assert!(parse_template("a = {{id}").is_err());
    }
}
