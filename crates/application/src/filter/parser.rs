//! Placeholder parser for `${variable}` syntax
//!
//! Splits a template into literal text, `$$` escapes and placeholders, with
//! byte positions into the original string.
//!
//! Rules:
//! - `${name}` is a placeholder; surrounding whitespace in `name` is trimmed
//! - `$$` produces a literal `$`
//! - `${}`, a name containing `{`, and an unterminated `${...` are literal text
//! - any other `$` is literal

use std::ops::Range;

/// A placeholder found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderReference {
    /// The variable name (without `${` `}`).
    pub name: String,

    /// Byte range in the original string where this placeholder appears.
    pub span: Range<usize>,
}

impl PlaceholderReference {
    /// Creates a new placeholder reference.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// One piece of a tokenized template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text, copied through unchanged.
    Text(Range<usize>),
    /// A `$$` escape, rendered as a single `$`.
    Escape(Range<usize>),
    /// A placeholder to resolve.
    Placeholder(PlaceholderReference),
}

/// Splits `input` into tokens.
///
/// Adjacent literal characters are merged into a single `Text` token and
/// the tokens cover the whole input in order.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    let flush = |tokens: &mut Vec<Token>, start: usize, end: usize| {
        if start < end {
            tokens.push(Token::Text(start..end));
        }
    };

    while i < bytes.len() {
        if bytes[i] != b'$' {
            i += 1;
            continue;
        }

        match bytes.get(i + 1) {
            Some(b'$') => {
                flush(&mut tokens, text_start, i);
                tokens.push(Token::Escape(i..i + 2));
                i += 2;
                text_start = i;
            }
            Some(b'{') => {
                let body_start = i + 2;
                let Some(offset) = input[body_start..].find('}') else {
                    // Unterminated, the rest is literal
                    break;
                };
                let end = body_start + offset;
                let raw = &input[body_start..end];
                let name = raw.trim();

                if raw.contains('{') {
                    // Rescan from the next byte so an inner placeholder is still found
                    i += 1;
                } else if name.is_empty() {
                    i = end + 1;
                } else {
                    flush(&mut tokens, text_start, i);
                    tokens.push(Token::Placeholder(PlaceholderReference::new(
                        name,
                        i..end + 1,
                    )));
                    i = end + 1;
                    text_start = i;
                }
            }
            _ => i += 1,
        }
    }

    flush(&mut tokens, text_start, bytes.len());
    tokens
}

/// Parses a string and extracts all placeholder references.
///
/// # Examples
///
/// ```
/// use varfilter_application::filter::parser::parse_placeholders;
///
/// let refs = parse_placeholders("-I${projectdir}/include -L${buildir}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "projectdir");
/// assert_eq!(refs[1].name, "buildir");
/// ```
#[must_use]
pub fn parse_placeholders(input: &str) -> Vec<PlaceholderReference> {
    tokenize(input)
        .into_iter()
        .filter_map(|token| match token {
            Token::Placeholder(reference) => Some(reference),
            _ => None,
        })
        .collect()
}

/// Returns true if the input string contains any placeholder.
#[must_use]
pub fn has_placeholders(input: &str) -> bool {
    input.contains("${") && !parse_placeholders(input).is_empty()
}

/// Extracts just the variable names from the input without span info.
#[must_use]
pub fn extract_variable_names(input: &str) -> Vec<String> {
    parse_placeholders(input)
        .into_iter()
        .map(|r| r.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_placeholder() {
        let refs = parse_placeholders("${host}");
        assert_eq!(refs, vec![PlaceholderReference::new("host", 0..7)]);
    }

    #[test]
    fn test_parse_multiple_placeholders() {
        let refs = parse_placeholders("${projectdir}/build/${host}/${mode}");
        let names: Vec<_> = refs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["projectdir", "host", "mode"]);
    }

    #[test]
    fn test_parse_with_whitespace() {
        let refs = parse_placeholders("${ version }");
        assert_eq!(refs[0].name, "version");
    }

    #[test]
    fn test_no_placeholders() {
        assert!(parse_placeholders("plain text").is_empty());
        assert_eq!(tokenize("plain text"), vec![Token::Text(0..10)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_unclosed_placeholder_is_text() {
        let input = "a ${host";
        assert!(parse_placeholders(input).is_empty());
        assert_eq!(tokenize(input), vec![Token::Text(0..8)]);
    }

    #[test]
    fn test_empty_placeholder_is_text() {
        assert!(parse_placeholders("${}").is_empty());
        assert!(parse_placeholders("${   }").is_empty());
        assert_eq!(tokenize("${}"), vec![Token::Text(0..3)]);
    }

    #[test]
    fn test_escape() {
        let tokens = tokenize("$${x}");
        assert_eq!(tokens, vec![Token::Escape(0..2), Token::Text(2..5)]);
        assert!(parse_placeholders("$${x}").is_empty());
    }

    #[test]
    fn test_escape_followed_by_placeholder() {
        let tokens = tokenize("$$${x}");
        assert_eq!(
            tokens,
            vec![
                Token::Escape(0..2),
                Token::Placeholder(PlaceholderReference::new("x", 2..6)),
            ]
        );
    }

    #[test]
    fn test_lone_dollar_is_text() {
        assert_eq!(tokenize("cost $5"), vec![Token::Text(0..7)]);
        assert_eq!(tokenize("end$"), vec![Token::Text(0..4)]);
    }

    #[test]
    fn test_single_brace_is_text() {
        assert!(parse_placeholders("{host}").is_empty());
        assert!(parse_placeholders("$(host)").is_empty());
    }

    #[test]
    fn test_nested_open_brace_finds_inner() {
        let refs = parse_placeholders("${a${b}");
        assert_eq!(refs, vec![PlaceholderReference::new("b", 3..7)]);
    }

    #[test]
    fn test_adjacent_placeholders() {
        let refs = parse_placeholders("${a}${b}${c}");
        let names: Vec<_> = refs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_prefixed_names() {
        let refs = parse_placeholders("${env:HOME}/${package.version}");
        assert_eq!(refs[0].name, "env:HOME");
        assert_eq!(refs[1].name, "package.version");
    }

    #[test]
    fn test_tokens_cover_input() {
        let input = "x=${a}, y=$$, z=${ }";
        let tokens = tokenize(input);
        assert_eq!(
            tokens,
            vec![
                Token::Text(0..2),
                Token::Placeholder(PlaceholderReference::new("a", 2..6)),
                Token::Text(6..10),
                Token::Escape(10..12),
                Token::Text(12..20),
            ]
        );
    }

    #[test]
    fn test_multibyte_text() {
        let input = "répertoire=${curdir}/données";
        let refs = parse_placeholders(input);
        assert_eq!(&input[refs[0].span.clone()], "${curdir}");
    }

    #[test]
    fn test_has_placeholders() {
        assert!(has_placeholders("${host}"));
        assert!(has_placeholders("-L ${buildir}/lib"));
        assert!(!has_placeholders("no vars"));
        assert!(!has_placeholders("${unclosed"));
        assert!(!has_placeholders("$${escaped}"));
    }

    #[test]
    fn test_extract_variable_names() {
        let names = extract_variable_names("${a} and ${b} and ${c}");
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
