//! BBCode-style tag parser for terminal styling.
//!
//! Markup such as `[red][b]warning[/b][/red]` is turned into ANSI SGR escapes.
//! Styles nest on a stack: every tag segment is emitted behind one escape that
//! carries the whole stack, so `[red][b]X` yields `ESC[31m` then `ESC[31;1mX`.
//!
//! - `[name]` (or several names, `[red b]`) pushes styles
//! - `[/name]` pops one style off the top, whatever its name
//! - `[/]` clears every open style
//!
//! Parsing is total: unknown names are skipped, closes on an empty stack do
//! nothing and an unterminated `[` is copied through literally. Use
//! [`BBParser::parse_with_diagnostics`] to find out what was skipped.
//!
//! ```rust
//! assert_eq!(richline_bbparser::render("[green]ok[/]"), "\x1b[32mok\x1b[m");
//! assert_eq!(richline_bbparser::strip_tags("[green]ok[/]"), "ok");
//! ```

mod parser;
mod registry;

pub use parser::{BBParser, Diagnostic, Diagnostics, Segment, TagTransform};
pub use registry::{Style, StyleRegistry, DEFAULT_STYLES, FALLBACK_CODE};

/// Renders markup with the global registry.
pub fn render(text: &str) -> String {
    BBParser::new(StyleRegistry::global(), TagTransform::Apply).parse(text)
}

/// Removes markup, keeping the literal text.
pub fn strip_tags(text: &str) -> String {
    BBParser::new(StyleRegistry::global(), TagTransform::Remove).parse(text)
}
