//! Theme struct mapping semantic roles to markup.

use std::collections::HashMap;
use std::fmt;

use richline_bbparser::StyleRegistry;
use serde::Deserialize;

use super::error::{StyleValidationError, ThemeError};

/// A semantic slot the formatter or logger styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    BoolTrue,
    BoolFalse,
    Number,
    Null,
    /// Mapping keys.
    Key,
    /// Record field names.
    Field,
    /// Record type names.
    Type,
    /// URLs and e-mail addresses.
    Link,
    Info,
    Success,
    Warning,
    Error,
    Debug,
}

impl Role {
    pub const ALL: [Role; 13] = [
        Role::BoolTrue,
        Role::BoolFalse,
        Role::Number,
        Role::Null,
        Role::Key,
        Role::Field,
        Role::Type,
        Role::Link,
        Role::Info,
        Role::Success,
        Role::Warning,
        Role::Error,
        Role::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::BoolTrue => "bool_true",
            Role::BoolFalse => "bool_false",
            Role::Number => "number",
            Role::Null => "null",
            Role::Key => "key",
            Role::Field => "field",
            Role::Type => "type",
            Role::Link => "link",
            Role::Info => "info",
            Role::Success => "success",
            Role::Warning => "warning",
            Role::Error => "error",
            Role::Debug => "debug",
        }
    }

    fn default_markup(&self) -> &'static str {
        match self {
            Role::BoolTrue => "green b",
            Role::BoolFalse => "red b",
            Role::Number => "cyan b",
            Role::Null => "gray",
            Role::Key => "yellow",
            Role::Field => "yellow",
            Role::Type => "white b",
            Role::Link => "blue u",
            Role::Info => "blue b",
            Role::Success => "green b",
            Role::Warning => "yellow b",
            Role::Error => "red b",
            Role::Debug => "gray b",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role → markup tag body, e.g. `Role::Number` → `"cyan b"`.
///
/// # Example
///
/// ```rust
/// use richline::{Role, Theme};
///
/// let theme = Theme::new()
///     .add(Role::Number, "yellow")
///     .add(Role::Key, "cyan i");
///
/// assert_eq!(theme.get(Role::Number), "yellow");
/// assert_eq!(theme.open_tag(Role::Key), "[cyan i]");
/// // Untouched roles keep the built-in look.
/// assert_eq!(theme.get(Role::BoolTrue), "green b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    roles: HashMap<Role, String>,
}

impl Theme {
    /// Creates the built-in theme.
    pub fn new() -> Self {
        Self {
            roles: Role::ALL
                .iter()
                .map(|role| (*role, role.default_markup().to_string()))
                .collect(),
        }
    }

    /// Creates a theme where every role is unstyled.
    pub fn plain() -> Self {
        Self {
            roles: HashMap::new(),
        }
    }

    /// Sets the markup for a role, returning the theme for chaining.
    pub fn add(mut self, role: Role, markup: impl Into<String>) -> Self {
        self.roles.insert(role, markup.into());
        self
    }

    /// Returns the markup for a role (empty when unstyled).
    pub fn get(&self, role: Role) -> &str {
        self.roles.get(&role).map(String::as_str).unwrap_or("")
    }

    /// Returns `[markup]` for a role.
    pub fn open_tag(&self, role: Role) -> String {
        format!("[{}]", self.get(role))
    }

    /// Loads role overrides from YAML on top of the built-in theme.
    ///
    /// ```yaml
    /// number: yellow b
    /// bool_true: green
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let overrides: HashMap<Role, String> = serde_yaml::from_str(source)?;
        Ok(Self::new().merge(overrides))
    }

    /// Loads role overrides from JSON on top of the built-in theme.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let overrides: HashMap<Role, String> = serde_json::from_str(source)?;
        Ok(Self::new().merge(overrides))
    }

    fn merge(mut self, overrides: HashMap<Role, String>) -> Self {
        self.roles.extend(overrides);
        self
    }

    /// Checks every role against `registry`.
    ///
    /// Rendering never fails on bad markup, so this is the place to catch
    /// typos early.
    pub fn validate(&self, registry: &StyleRegistry) -> Result<(), StyleValidationError> {
        for role in Role::ALL {
            for token in self.get(role).split_whitespace() {
                if token.starts_with('/') {
                    return Err(StyleValidationError::CloseInRole {
                        role: role.to_string(),
                        token: token.to_string(),
                    });
                }
                if !registry.has(token) {
                    return Err(StyleValidationError::UnknownStyle {
                        role: role.to_string(),
                        token: token.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
