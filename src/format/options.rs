//! Formatter configuration.

use richline_bbparser::TagTransform;

/// Nesting limit used by [`FormatOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Knobs for the [`Formatter`](super::Formatter).
///
/// # Example
///
/// ```rust
/// use richline::{FormatOptions, TagTransform};
///
/// let options = FormatOptions::default()
///     .with_max_depth(4)
///     .with_transform(TagTransform::Remove);
/// assert_eq!(options.indent, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Deepest composite nesting rendered before truncating.
    pub max_depth: usize,
    /// Spaces per nesting level in mapping and record blocks.
    pub indent: usize,
    /// How markup is turned into output.
    pub transform: TagTransform,
    /// Color `success`/`error`/`warning`/`info` inside plain strings.
    pub highlight_keywords: bool,
    /// Decorate URLs and e-mail addresses.
    pub detect_links: bool,
}

impl FormatOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_transform(mut self, transform: TagTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_highlight_keywords(mut self, enabled: bool) -> Self {
        self.highlight_keywords = enabled;
        self
    }

    pub fn with_detect_links(mut self, enabled: bool) -> Self {
        self.detect_links = enabled;
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            indent: 2,
            transform: TagTransform::Apply,
            highlight_keywords: true,
            detect_links: true,
        }
    }
}
