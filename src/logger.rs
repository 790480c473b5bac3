//! Severity-prefixed output lines.
//!
//! A [`PrefixLogger`] puts a padded, styled label such as `INFO: ` in front of
//! the caller's values and hands the lot to the [`Formatter`]. The free
//! functions ([`info`], [`error`], ...) use a lazily built default logger.

use std::fmt;
use std::io;

use once_cell::sync::Lazy;

use crate::format::Formatter;
use crate::theme::Role;
use crate::util::pad_to_width;
use crate::value::Value;

/// Width labels are padded to by default (the length of `DEBUG:`).
pub const DEFAULT_LABEL_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
    Debug,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
        Severity::Debug,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO:",
            Severity::Success => "SUCC:",
            Severity::Warning => "WARN:",
            Severity::Error => "ERRR:",
            Severity::Debug => "DEBUG:",
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Severity::Info => Role::Info,
            Severity::Success => Role::Success,
            Severity::Warning => Role::Warning,
            Severity::Error => Role::Error,
            Severity::Debug => Role::Debug,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end_matches(':'))
    }
}

/// Prints lines prefixed with a severity label.
///
/// # Example
///
/// ```rust
/// use richline::{FormatOptions, Formatter, PrefixLogger, Severity, TagTransform, Value};
///
/// let logger = PrefixLogger::new().with_formatter(
///     Formatter::new().with_options(FormatOptions::default().with_transform(TagTransform::Remove)),
/// );
///
/// let line = logger.line(Severity::Warning, &[Value::from("disk at"), Value::from(91)]);
/// assert_eq!(line, "WARN:  disk at 91");
/// ```
#[derive(Debug, Clone)]
pub struct PrefixLogger<'r> {
    formatter: Formatter<'r>,
    label_width: usize,
}

impl PrefixLogger<'static> {
    pub fn new() -> Self {
        Self {
            formatter: Formatter::new(),
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

impl Default for PrefixLogger<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> PrefixLogger<'r> {
    pub fn with_formatter<'s>(self, formatter: Formatter<'s>) -> PrefixLogger<'s> {
        PrefixLogger {
            formatter,
            label_width: self.label_width,
        }
    }

    pub fn with_label_width(mut self, label_width: usize) -> Self {
        self.label_width = label_width;
        self
    }

    pub fn formatter(&self) -> &Formatter<'r> {
        &self.formatter
    }

    /// The styled label as a value that only gets tag interpretation.
    pub fn label(&self, severity: Severity) -> Value {
        let theme = self.formatter.theme();
        Value::Other(format!(
            "{}{}[/]",
            theme.open_tag(severity.role()),
            pad_to_width(severity.label(), self.label_width)
        ))
    }

    /// Renders one line without printing it.
    pub fn line(&self, severity: Severity, values: &[Value]) -> String {
        self.formatter.format_line(&self.prefixed(severity, values))
    }

    /// Renders one line and writes it to stdout.
    pub fn log(&self, severity: Severity, values: &[Value]) -> io::Result<()> {
        self.formatter.print(&self.prefixed(severity, values))
    }

    fn prefixed(&self, severity: Severity, values: &[Value]) -> Vec<Value> {
        let mut all = Vec::with_capacity(values.len() + 1);
        all.push(self.label(severity));
        all.extend_from_slice(values);
        all
    }
}

static DEFAULT_LOGGER: Lazy<PrefixLogger<'static>> = Lazy::new(PrefixLogger::new);

// A closed stdout leaves nothing useful to do with the error.
fn emit(severity: Severity, values: &[Value]) {
    let _ = DEFAULT_LOGGER.log(severity, values);
}

/// Formats each value, joins them with spaces and prints one line.
pub fn print(values: &[Value]) {
    let _ = DEFAULT_LOGGER.formatter().print(values);
}

pub fn info(values: &[Value]) {
    emit(Severity::Info, values);
}

pub fn success(values: &[Value]) {
    emit(Severity::Success, values);
}

pub fn warning(values: &[Value]) {
    emit(Severity::Warning, values);
}

pub fn error(values: &[Value]) {
    emit(Severity::Error, values);
}

pub fn debug(values: &[Value]) {
    emit(Severity::Debug, values);
}
