//! Field metadata: which attributes to set, and to what
//!
//! Metadata is an ordered list of entries. Each entry names one or more target
//! attributes and a single value, so `name` and `id` can be bound together:
//!
//! ```
//! use jumplinks_config::{Attr, FieldMeta};
//!
//! let meta = FieldMeta::new()
//!     .set_all([Attr::Name, Attr::Id], "legacyDomain")
//!     .set(Attr::ColumnWidth, 50);
//! assert_eq!(meta.len(), 2);
//! ```

use crate::error::{Error, Result};
use crate::fields::descriptor::{Collapse, SelectOption};
use serde_json::Value;
use std::str::FromStr;

/// Separator for alias lists in string-keyed metadata (`"name+id"`)
pub const ALIAS_SEPARATOR: char = '+';

// =============================================================================
// Attributes
// =============================================================================

/// Closed set of descriptor attributes the factory knows how to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    Name,
    Id,
    Label,
    Label2,
    Description,
    Notes,
    Options,
    ColumnWidth,
    Collapsed,
    SkipLabel,
    Autocheck,
    Placeholder,
    Spellcheck,
    Value,
}

impl Attr {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Id => "id",
            Self::Label => "label",
            Self::Label2 => "label2",
            Self::Description => "description",
            Self::Notes => "notes",
            Self::Options => "options",
            Self::ColumnWidth => "columnWidth",
            Self::Collapsed => "collapsed",
            Self::SkipLabel => "skipLabel",
            Self::Autocheck => "autocheck",
            Self::Placeholder => "placeholder",
            Self::Spellcheck => "spellcheck",
            Self::Value => "value",
        }
    }
}

impl FromStr for Attr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let attr = match s {
            "name" => Self::Name,
            "id" => Self::Id,
            "label" => Self::Label,
            "label2" => Self::Label2,
            "description" => Self::Description,
            "notes" => Self::Notes,
            "options" => Self::Options,
            "columnWidth" => Self::ColumnWidth,
            "collapsed" => Self::Collapsed,
            "skipLabel" => Self::SkipLabel,
            "autocheck" => Self::Autocheck,
            "placeholder" => Self::Placeholder,
            "spellcheck" => Self::Spellcheck,
            "value" => Self::Value,
            other => return Err(Error::UnknownAttribute(other.to_string())),
        };
        Ok(attr)
    }
}

impl std::fmt::Display for Attr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Attribute Values
// =============================================================================

/// Value assigned to one or more attributes
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Bool(bool),
    Int(i64),
    Collapse(Collapse),
    Options(Vec<SelectOption>),
}

impl AttrValue {
    /// Short type name for error messages
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Collapse(_) => "collapse state",
            Self::Options(_) => "option list",
        }
    }

    /// Convert a JSON value
    ///
    /// Arrays must hold `{ "value": .., "label": .. }` objects and become
    /// option lists. Objects and non-integer numbers are rejected.
    pub fn from_json(attr: Attr, value: Value) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidAttributeValue {
            attr: attr.as_str().to_string(),
            reason,
        };
        match value {
            Value::String(s) => Ok(Self::Text(s)),
            Value::Bool(b) => Ok(Self::Bool(b)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .ok_or_else(|| invalid(format!("expected an integer, got {n}"))),
            Value::Array(_) => serde_json::from_value::<Vec<SelectOption>>(value)
                .map(Self::Options)
                .map_err(|e| invalid(e.to_string())),
            other => Err(invalid(format!("unsupported value {other}"))),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for AttrValue {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<Collapse> for AttrValue {
    fn from(value: Collapse) -> Self {
        Self::Collapse(value)
    }
}

impl From<Vec<SelectOption>> for AttrValue {
    fn from(value: Vec<SelectOption>) -> Self {
        Self::Options(value)
    }
}

// =============================================================================
// Metadata
// =============================================================================

/// One metadata entry: a value and every attribute it targets
#[derive(Debug, Clone, PartialEq)]
pub struct MetaEntry {
    pub targets: Vec<Attr>,
    pub value: AttrValue,
}

/// Ordered metadata for building one field or group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMeta {
    entries: Vec<MetaEntry>,
}

impl FieldMeta {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single attribute
    #[must_use]
    pub fn set(self, attr: Attr, value: impl Into<AttrValue>) -> Self {
        self.set_all([attr], value)
    }

    /// Set several attributes to the same value
    #[must_use]
    pub fn set_all(
        mut self,
        attrs: impl IntoIterator<Item = Attr>,
        value: impl Into<AttrValue>,
    ) -> Self {
        self.entries.push(MetaEntry {
            targets: attrs.into_iter().collect(),
            value: value.into(),
        });
        self
    }

    /// Build metadata from string-keyed pairs
    ///
    /// A key may list several attributes joined by `+`. Unknown attribute
    /// names fail here rather than when the field is built.
    ///
    /// ```
    /// use jumplinks_config::{Attr, FieldMeta};
    /// use serde_json::json;
    ///
    /// let meta = FieldMeta::from_pairs([
    ///     ("name+id", json!("statusCodes")),
    ///     ("spellcheck", json!(false)),
    /// ])?;
    /// assert_eq!(meta.entries()[0].targets, vec![Attr::Name, Attr::Id]);
    /// # Ok::<(), jumplinks_config::Error>(())
    /// ```
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut meta = Self::new();
        for (key, value) in pairs {
            let targets = key
                .as_ref()
                .split(ALIAS_SEPARATOR)
                .map(|name| name.trim().parse::<Attr>())
                .collect::<Result<Vec<_>>>()?;
            let first = targets
                .first()
                .copied()
                .ok_or_else(|| Error::UnknownAttribute(key.as_ref().to_string()))?;
            let value = AttrValue::from_json(first, value)?;
            meta.entries.push(MetaEntry { targets, value });
        }
        Ok(meta)
    }

    /// Entries in application order
    #[must_use]
    pub fn entries(&self) -> &[MetaEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
