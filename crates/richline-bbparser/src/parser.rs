//! Tag scanning and the style stack.
//!
//! Input is split on `[`. Everything before the first `[` is copied through.
//! Every later piece is a tag body up to the first `]`, followed by literal
//! text. Tokens in the body update the stack, then the literal text is
//! emitted behind one escape carrying the whole stack.

use std::fmt;

use crate::registry::StyleRegistry;

/// What the parser does with recognised tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagTransform {
    /// Replace tags with ANSI escapes.
    #[default]
    Apply,
    /// Drop tags, keep the literal text.
    Remove,
    /// Return the input untouched.
    Keep,
}

/// One tag segment: the styles active after its tag body and the text that
/// follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub codes: Vec<String>,
    pub text: String,
}

impl Segment {
    /// Number of styles on the stack for this segment.
    pub fn depth(&self) -> usize {
        self.codes.len()
    }
}

/// A non-fatal problem found while scanning markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A tag token that names no registered style.
    UnknownTag { tag: String },
    /// A close token seen while nothing was open.
    UnexpectedClose { tag: String },
    /// A `[` with no matching `]`.
    Unterminated { fragment: String },
    /// Styles left open at the end of the input.
    Unclosed { depth: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownTag { tag } => write!(f, "unknown tag '{}'", tag),
            Diagnostic::UnexpectedClose { tag } => {
                write!(f, "unexpected close tag '{}' with no open styles", tag)
            }
            Diagnostic::Unterminated { fragment } => {
                write!(f, "unterminated tag '[{}'", fragment)
            }
            Diagnostic::Unclosed { depth } => write!(
                f,
                "unbalanced markup: {} style(s) still open at end of input",
                depth
            ),
        }
    }
}

/// All diagnostics from one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

enum Piece<'t, 'r> {
    Head(&'t str),
    Unterminated(&'t str),
    Tag { codes: Vec<&'r str>, text: &'t str },
}

/// Converts markup such as `[red b]hi[/]` into ANSI-escaped text.
///
/// The parser never fails. Unknown names are ignored, closes on an empty
/// stack do nothing and a `[` without a closing `]` is copied through as-is.
///
/// # Example
///
/// ```rust
/// use richline_bbparser::{BBParser, StyleRegistry, TagTransform};
///
/// let parser = BBParser::new(StyleRegistry::global(), TagTransform::Apply);
/// assert_eq!(parser.parse("[red b]hi[/]"), "\x1b[31;1mhi\x1b[m");
///
/// let plain = BBParser::new(StyleRegistry::global(), TagTransform::Remove);
/// assert_eq!(plain.parse("[red b]hi[/]"), "hi");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BBParser<'r> {
    registry: &'r StyleRegistry,
    transform: TagTransform,
}

impl<'r> BBParser<'r> {
    pub fn new(registry: &'r StyleRegistry, transform: TagTransform) -> Self {
        Self {
            registry,
            transform,
        }
    }

    pub fn registry(&self) -> &'r StyleRegistry {
        self.registry
    }

    pub fn transform(&self) -> TagTransform {
        self.transform
    }

    /// Renders `text` according to the parser's [`TagTransform`].
    pub fn parse(&self, text: &str) -> String {
        let mut diagnostics = Diagnostics::default();
        self.parse_into(text, &mut diagnostics)
    }

    /// Like [`parse`](Self::parse), also reporting what was malformed.
    pub fn parse_with_diagnostics(&self, text: &str) -> (String, Diagnostics) {
        let mut diagnostics = Diagnostics::default();
        let output = self.parse_into(text, &mut diagnostics);
        (output, diagnostics)
    }

    /// Returns every tag segment with the stack that applies to it.
    ///
    /// Text before the first `[` and unterminated fragments carry no tag and
    /// are not included.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let mut diagnostics = Diagnostics::default();
        self.scan(text, &mut diagnostics)
            .into_iter()
            .filter_map(|piece| match piece {
                Piece::Tag { codes, text } => Some(Segment {
                    codes: codes.into_iter().map(str::to_string).collect(),
                    text: text.to_string(),
                }),
                _ => None,
            })
            .collect()
    }

    fn parse_into(&self, text: &str, diagnostics: &mut Diagnostics) -> String {
        let pieces = self.scan(text, diagnostics);
        if self.transform == TagTransform::Keep {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len() + pieces.len() * 6);
        for piece in pieces {
            match piece {
                Piece::Head(head) => out.push_str(head),
                Piece::Unterminated(fragment) => {
                    out.push('[');
                    out.push_str(fragment);
                }
                Piece::Tag { codes, text } => {
                    if self.transform == TagTransform::Apply {
                        out.push_str("\x1b[");
                        out.push_str(&codes.join(";"));
                        out.push('m');
                    }
                    out.push_str(text);
                }
            }
        }
        out
    }

    fn scan<'t>(&self, text: &'t str, diagnostics: &mut Diagnostics) -> Vec<Piece<'t, 'r>> {
        let registry: &'r StyleRegistry = self.registry;
        let mut pieces = Vec::new();
        let mut stack: Vec<&'r str> = Vec::new();
        let mut parts = text.split('[');

        if let Some(head) = parts.next() {
            pieces.push(Piece::Head(head));
        }

        for part in parts {
            let Some((body, rest)) = part.split_once(']') else {
                diagnostics.push(Diagnostic::Unterminated {
                    fragment: part.to_string(),
                });
                pieces.push(Piece::Unterminated(part));
                continue;
            };

            for token in body.split_whitespace() {
                let token = token.to_lowercase();
                if token == "/" {
                    if stack.is_empty() {
                        diagnostics.push(Diagnostic::UnexpectedClose { tag: token });
                    }
                    stack.clear();
                } else if token.starts_with('/') {
                    // Positional: pops the top whatever name is given.
                    if stack.pop().is_none() {
                        diagnostics.push(Diagnostic::UnexpectedClose { tag: token });
                    }
                } else if let Some(style) = registry.lookup(&token) {
                    stack.push(style.code.as_str());
                } else {
                    diagnostics.push(Diagnostic::UnknownTag { tag: token });
                }
            }

            pieces.push(Piece::Tag {
                codes: stack.clone(),
                text: rest,
            });
        }

        if !stack.is_empty() {
            diagnostics.push(Diagnostic::Unclosed { depth: stack.len() });
        }
        pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply() -> BBParser<'static> {
        BBParser::new(StyleRegistry::global(), TagTransform::Apply)
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(apply().parse("no markup here"), "no markup here");
        assert_eq!(apply().parse(""), "");
    }

    #[test]
    fn test_single_tag() {
        assert_eq!(apply().parse("[red]hi[/red]"), "\x1b[31mhi\x1b[m");
    }

    #[test]
    fn test_head_before_first_tag_is_unchanged() {
        assert_eq!(apply().parse("a [b]b[/b]"), "a \x1b[1mb\x1b[m");
    }

    #[test]
    fn test_multiple_tokens_in_one_body() {
        assert_eq!(apply().parse("[red b u]x"), "\x1b[31;1;4mx");
    }

    #[test]
    fn test_names_are_case_insensitive() {
        assert_eq!(apply().parse("[RED]x[/Red]"), "\x1b[31mx\x1b[m");
    }

    #[test]
    fn test_nested_stack_per_segment() {
        let segments = apply().segments("[red][b]X[/b][/red]");
        let depths: Vec<usize> = segments.iter().map(Segment::depth).collect();
        assert_eq!(depths, vec![1, 2, 1, 0]);
        assert_eq!(segments[1].codes, vec!["31", "1"]);
        assert_eq!(segments[1].text, "X");
        assert_eq!(segments[2].codes, vec!["31"]);
    }

    #[test]
    fn test_nested_output() {
        assert_eq!(
            apply().parse("[red][b]X[/b][/red]"),
            "\x1b[31m\x1b[31;1mX\x1b[31m\x1b[m"
        );
    }

    #[test]
    fn test_slash_alone_clears_everything() {
        let segments = apply().segments("[red][b][u]deep[/]flat");
        assert_eq!(segments.last().unwrap().depth(), 0);
        assert_eq!(segments.last().unwrap().text, "flat");
    }

    #[test]
    fn test_close_on_empty_stack_is_noop() {
        assert_eq!(apply().parse("[/b]text"), "\x1b[mtext");
        assert_eq!(apply().parse("[/][/][/x]ok"), "\x1b[m\x1b[m\x1b[mok");
    }

    // Intentional: closes are positional, not matched by name.
    #[test]
    fn test_close_pops_top_regardless_of_name() {
        let segments = apply().segments("[b][red]x[/b]y");
        assert_eq!(segments[2].codes, vec!["1"]);
        assert_eq!(segments[2].text, "y");
    }

    #[test]
    fn test_unknown_tag_is_ignored() {
        assert_eq!(apply().parse("[foo]text[/foo]"), "\x1b[mtext\x1b[m");
    }

    #[test]
    fn test_unterminated_tag_is_literal() {
        assert_eq!(apply().parse("a [red b"), "a [red b");
        assert_eq!(
            apply().parse("[red]x [not closed"),
            "\x1b[31mx [not closed"
        );
    }

    #[test]
    fn test_unterminated_does_not_touch_stack() {
        let segments = apply().segments("[red]a [oops[b]d");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].codes, vec!["31", "1"]);
        assert_eq!(apply().parse("[red]a [oops[b]d"), "\x1b[31ma [oops\x1b[31;1md");
    }

    #[test]
    fn test_remove_transform() {
        let parser = BBParser::new(StyleRegistry::global(), TagTransform::Remove);
        assert_eq!(parser.parse("[red]a[/] [b]b[/b] [oops"), "a b [oops");
    }

    #[test]
    fn test_keep_transform() {
        let parser = BBParser::new(StyleRegistry::global(), TagTransform::Keep);
        assert_eq!(parser.parse("[red]a[/]"), "[red]a[/]");
    }

    #[test]
    fn test_diagnostics_collects_every_problem() {
        let (_, diagnostics) = apply().parse_with_diagnostics("[/b][foo]x[red]y [z");
        let kinds: Vec<_> = diagnostics.iter().cloned().collect();
        assert_eq!(
            kinds,
            vec![
                Diagnostic::UnexpectedClose { tag: "/b".into() },
                Diagnostic::UnknownTag { tag: "foo".into() },
                Diagnostic::Unterminated { fragment: "z".into() },
                Diagnostic::Unclosed { depth: 1 },
            ]
        );
    }

    #[test]
    fn test_diagnostics_empty_for_balanced_markup() {
        let (_, diagnostics) = apply().parse_with_diagnostics("[red]a[/red] [b i]b[/]");
        assert!(diagnostics.is_empty(), "{}", diagnostics);
    }

    #[test]
    fn test_clear_and_pop_on_empty_stack_both_reported() {
        let (output, diagnostics) = apply().parse_with_diagnostics("[/]a[/x]b");
        assert_eq!(output, "\x1b[ma\x1b[mb");
        let kinds: Vec<_> = diagnostics.iter().cloned().collect();
        assert_eq!(
            kinds,
            vec![
                Diagnostic::UnexpectedClose { tag: "/".into() },
                Diagnostic::UnexpectedClose { tag: "/x".into() },
            ]
        );
    }

    #[test]
    fn test_diagnostics_display_joins() {
        let (_, diagnostics) = apply().parse_with_diagnostics("[foo][bar]");
        assert_eq!(diagnostics.to_string(), "unknown tag 'foo'; unknown tag 'bar'");
    }
}
