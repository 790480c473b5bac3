//! Semantic roles and the markup that styles them.
//!
//! - [`Theme`]: role → markup table with a fluent builder and YAML/JSON loading
//! - [`Role`]: the slots the formatter and logger style
//! - [`StyleValidationError`], [`ThemeError`]: validation and loading failures

mod error;
#[allow(clippy::module_inception)]
mod theme;

pub use error::{StyleValidationError, ThemeError};
pub use theme::{Role, Theme};
