//! # Richline - styled single-line terminal output
//!
//! Richline renders values and inline markup into one ANSI-escaped line:
//!
//! - Tag-based styling: `[red][b]text[/b][/red]`, `[/]` clears everything
//! - A shape-driven [`Formatter`] for scalars, mappings, sequences and records
//! - Severity-prefixed helpers: [`info`], [`success`], [`warning`], [`error`], [`debug`]
//! - A [`bridge`] so the `log` facade prints through the same formatter
//!
//! ## Quick Start
//!
//! ```rust
//! use richline::{Formatter, Record, Value};
//!
//! let person = Record::named("Person")
//!     .field("Name", "Ann")
//!     .field("Age", 30)
//!     .field("Active", true);
//!
//! let line = Formatter::new().format(&person.into());
//! assert!(line.contains("\x1b[36;1m30\x1b[m"));
//!
//! // Or print straight away:
//! richline::rich!("[green]ready[/]", 3, "workers");
//! richline::info!("listening on", "https://github.com/richline");
//! ```
//!
//! ## Markup
//!
//! Names are case-insensitive and come from the style registry: `reset`,
//! `unstyle`, `b`, `i`, `u`, `s`, `blink`, `x` (modifiers) and `white`, `gray`,
//! `red`, `green`, `cyan`, `blue`, `yellow` (colors). A tag body may hold
//! several names (`[red b]`). Closing tags pop the top of the stack by
//! position. Malformed markup never fails: unknown names are ignored and an
//! unterminated `[` is printed as-is.
//!
//! ## Themes
//!
//! What each value shape looks like is set by a [`Theme`], which maps a
//! [`Role`] to markup and can be loaded from YAML or JSON:
//!
//! ```rust
//! use richline::{Formatter, Role, Theme};
//!
//! let theme = Theme::from_yaml("number: yellow\nbool_true: green u\n").unwrap();
//! let formatter = Formatter::new().with_theme(theme);
//! assert_eq!(formatter.format(&7.into()), "\x1b[33m7\x1b[m");
//! ```

pub mod bridge;
pub mod format;
pub mod logger;
pub mod theme;
mod util;
mod value;

pub use format::{FormatError, FormatOptions, Formatter};
pub use logger::{debug, error, info, print, success, warning, PrefixLogger, Severity};
pub use richline_bbparser::{
    BBParser, Diagnostic, Diagnostics, Segment, Style, StyleRegistry, TagTransform,
};
pub use theme::{Role, StyleValidationError, Theme, ThemeError};
pub use util::pad_to_width;
pub use value::{Number, Record, SerializeError, Value};

/// Renders markup with the global style registry.
pub fn render(text: &str) -> String {
    richline_bbparser::render(text)
}

/// Prints values on one line, each converted with `Value::from`.
#[macro_export]
macro_rules! rich {
    ($($arg:expr),* $(,)?) => {
        $crate::print(&[$($crate::Value::from($arg)),*])
    };
}

/// Prints an `INFO:` line.
#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => {
        $crate::info(&[$($crate::Value::from($arg)),*])
    };
}

/// Prints a `SUCC:` line.
#[macro_export]
macro_rules! success {
    ($($arg:expr),* $(,)?) => {
        $crate::success(&[$($crate::Value::from($arg)),*])
    };
}

/// Prints a `WARN:` line.
#[macro_export]
macro_rules! warning {
    ($($arg:expr),* $(,)?) => {
        $crate::warning(&[$($crate::Value::from($arg)),*])
    };
}

/// Prints an `ERRR:` line.
#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => {
        $crate::error(&[$($crate::Value::from($arg)),*])
    };
}

/// Prints a `DEBUG:` line.
#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {
        $crate::debug(&[$($crate::Value::from($arg)),*])
    };
}
