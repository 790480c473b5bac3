//! Recursive, shape-driven value rendering.

use std::io;

use console::Term;
use richline_bbparser::{BBParser, StyleRegistry, TagTransform};

use super::detect::{classify, highlight_keywords, StringShape, MAIL_ICON};
use super::error::{FormatError, Result};
use super::options::FormatOptions;
use crate::theme::{Role, Theme};
use crate::value::{Record, Value};

/// Marker emitted in place of composites nested deeper than the limit.
pub const TRUNCATED: &str = "…";

/// Turns [`Value`]s into styled terminal text.
///
/// Every scalar is wrapped in its theme role's markup and handed to the tag
/// parser; composites are laid out around their recursively formatted
/// children. Formatted pieces are never parsed a second time.
///
/// # Example
///
/// ```rust
/// use richline::{Formatter, FormatOptions, Record, TagTransform};
///
/// let formatter = Formatter::new()
///     .with_options(FormatOptions::default().with_transform(TagTransform::Remove));
///
/// let person = Record::new().field("Name", "Ann").field("Age", 30);
/// assert_eq!(
///     formatter.format(&person.into()),
///     "{\n  Name: Ann,\n  Age: 30,\n}"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Formatter<'r> {
    registry: &'r StyleRegistry,
    theme: Theme,
    options: FormatOptions,
}

impl Formatter<'static> {
    /// Creates a formatter over the global style registry.
    pub fn new() -> Self {
        Self::with_registry(StyleRegistry::global())
    }
}

impl Default for Formatter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Formatter<'r> {
    /// Creates a formatter over a caller-owned registry.
    pub fn with_registry(registry: &'r StyleRegistry) -> Self {
        Self {
            registry,
            theme: Theme::default(),
            options: FormatOptions::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn registry(&self) -> &'r StyleRegistry {
        self.registry
    }

    /// Parser configured with this formatter's registry and transform.
    pub fn parser(&self) -> BBParser<'r> {
        BBParser::new(self.registry, self.options.transform)
    }

    /// Runs tag interpretation over caller-written markup.
    pub fn markup(&self, text: &str) -> String {
        self.parser().parse(text)
    }

    /// Wraps already-rendered `inner` text in a role's style.
    ///
    /// `inner` is not parsed, so it may contain escapes or literal brackets.
    pub fn styled(&self, role: Role, inner: &str) -> String {
        let parser = self.parser();
        let mut out = parser.parse(&self.theme.open_tag(role));
        out.push_str(inner);
        out.push_str(&parser.parse("[/]"));
        out
    }

    /// Formats a value. Composites nested past `max_depth` are replaced by
    /// [`TRUNCATED`].
    pub fn format(&self, value: &Value) -> String {
        match self.walk(value, 0, false) {
            Ok(text) => text,
            Err(_) => self.styled(Role::Null, TRUNCATED),
        }
    }

    /// Formats a value, failing instead of truncating past `max_depth`.
    pub fn try_format(&self, value: &Value) -> Result<String> {
        self.walk(value, 0, true)
    }

    /// Formats each value on its own and joins them with single spaces.
    pub fn format_line(&self, values: &[Value]) -> String {
        values
            .iter()
            .map(|value| self.format(value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Writes [`format_line`](Self::format_line) to stdout as one line.
    pub fn print(&self, values: &[Value]) -> io::Result<()> {
        Term::stdout().write_line(&self.format_line(values))
    }

    fn walk(&self, value: &Value, depth: usize, strict: bool) -> Result<String> {
        if value.is_composite() && depth >= self.options.max_depth {
            if strict {
                return Err(FormatError::DepthExceeded {
                    limit: self.options.max_depth,
                });
            }
            return Ok(self.styled(Role::Null, TRUNCATED));
        }

        let text = match value {
            Value::Null => self.styled(Role::Null, "null"),
            Value::Bool(true) => self.styled(Role::BoolTrue, "true"),
            Value::Bool(false) => self.styled(Role::BoolFalse, "false"),
            Value::Number(n) => self.styled(Role::Number, &n.to_string()),
            Value::Str(s) => self.format_str(s),
            Value::Mapping(entries) => self.format_mapping(entries, depth, strict)?,
            Value::Sequence(items) => self.format_sequence(items, depth, strict)?,
            Value::Record(record) => self.format_record(record, depth, strict)?,
            Value::Other(text) => self.markup(text),
        };
        Ok(text)
    }

    fn format_str(&self, text: &str) -> String {
        if self.options.detect_links {
            match classify(text) {
                StringShape::Url { icon } => {
                    return self.styled(Role::Link, &format!("{} {}", icon, text));
                }
                StringShape::Email => {
                    return self.styled(Role::Link, &format!("{} {}", MAIL_ICON, text));
                }
                StringShape::Plain => {}
            }
        }

        let rendered = self.markup(text);
        if self.options.highlight_keywords && self.options.transform == TagTransform::Apply {
            highlight_keywords(&rendered, self.registry)
        } else {
            rendered
        }
    }

    fn format_mapping(
        &self,
        entries: &[(Value, Value)],
        depth: usize,
        strict: bool,
    ) -> Result<String> {
        let (pad, close_pad) = self.pads(depth);
        let mut out = String::from("{\n");
        for (key, value) in entries {
            // Keyword resets would end the key role early.
            let key = match key {
                Value::Str(text) => self.markup(text),
                other => self.walk(other, depth + 1, strict)?,
            };
            let value = self.walk(value, depth + 1, strict)?;
            out.push_str(&pad);
            out.push_str(&self.styled(Role::Key, &format!("\"{}\"", key)));
            out.push_str(": ");
            out.push_str(&value);
            out.push_str(",\n");
        }
        out.push_str(&close_pad);
        out.push('}');
        Ok(out)
    }

    fn format_sequence(&self, items: &[Value], depth: usize, strict: bool) -> Result<String> {
        if items.is_empty() {
            return Ok("[]".to_string());
        }
        let rendered = items
            .iter()
            .map(|item| self.walk(item, depth + 1, strict))
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("[ {} ]", rendered.join(", ")))
    }

    fn format_record(&self, record: &Record, depth: usize, strict: bool) -> Result<String> {
        let (pad, close_pad) = self.pads(depth);
        let mut out = String::new();
        if let Some(name) = record.name() {
            out.push_str(&self.styled(Role::Type, name));
            out.push(' ');
        }
        out.push_str("{\n");
        for (field, value) in record.fields() {
            let value = self.walk(value, depth + 1, strict)?;
            out.push_str(&pad);
            out.push_str(&self.styled(Role::Field, field));
            out.push_str(": ");
            out.push_str(&value);
            out.push_str(",\n");
        }
        out.push_str(&close_pad);
        out.push('}');
        Ok(out)
    }

    fn pads(&self, depth: usize) -> (String, String) {
        (
            " ".repeat(self.options.indent * (depth + 1)),
            " ".repeat(self.options.indent * depth),
        )
    }
}
