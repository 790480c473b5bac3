//! Value formatting.
//!
//! | Shape | Rendering |
//! |-------|-----------|
//! | `Null` | `null` in the `null` role |
//! | `Bool` | `true` / `false` in the `bool_true` / `bool_false` roles |
//! | `Number` | `Display` text in the `number` role |
//! | `Str` | URL or e-mail → icon + text in the `link` role; otherwise tag interpretation plus keyword highlighting |
//! | `Mapping` | `{` block, one `"key": value,` line per entry |
//! | `Sequence` | `[ a, b, c ]` |
//! | `Record` | optional type name, `{` block, one `field: value,` line per field |
//! | `Other` | tag interpretation only |

mod detect;
mod error;
mod formatter;
mod options;

pub use detect::{classify, icon_for, StringShape, DOMAIN_ICONS, KEYWORDS, LINK_ICON, MAIL_ICON};
pub use error::{FormatError, Result};
pub use formatter::{Formatter, TRUNCATED};
pub use options::{FormatOptions, DEFAULT_MAX_DEPTH};
