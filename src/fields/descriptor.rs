//! Field descriptors and their presentation attributes

use crate::error::{Error, Result};
use crate::fields::kind::FieldKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

// =============================================================================
// Collapse State
// =============================================================================

/// Initial visibility of a field or group
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Collapse {
    /// Always open, cannot be collapsed
    Never,
    /// Collapsed by default
    Yes,
    /// Open by default
    #[default]
    No,
    /// Collapsed until it has a value or is toggled
    Blank,
}

impl Collapse {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Yes => "yes",
            Self::No => "no",
            Self::Blank => "blank",
        }
    }
}

impl FromStr for Collapse {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "never" => Ok(Self::Never),
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "blank" => Ok(Self::Blank),
            other => Err(Error::InvalidAttributeValue {
                attr: "collapsed".into(),
                reason: format!("unknown collapse state '{other}'"),
            }),
        }
    }
}

// =============================================================================
// Select Option
// =============================================================================

/// One choice of a select-style field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    /// Value that gets persisted
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Shorthand for creating a `SelectOption`
///
/// # Example
/// ```rust
/// use jumplinks_config::opt;
/// let options = vec![opt("fullClean", "Full Clean"), opt("noClean", "No Clean")];
/// ```
pub fn opt(value: impl Into<String>, label: impl Into<String>) -> SelectOption {
    SelectOption::new(value, label)
}

// =============================================================================
// Field Descriptor
// =============================================================================

/// One renderable settings element
///
/// Built by [`FieldFactory`](crate::FieldFactory). A descriptor binds to its
/// setting through `name` and `id`; markup leaves only carry an `id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub kind: FieldKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Text next to the checkbox itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,

    /// Percentage of the row this field takes up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_width: Option<u8>,

    pub collapsed: Collapse,

    pub skip_label_header: bool,

    pub autocheck: bool,

    /// Current value, or the markup body for markup leaves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Pass-through attributes such as `placeholder` and `spellcheck`
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl FieldDescriptor {
    /// Create an empty descriptor of the given kind
    #[must_use]
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            name: None,
            id: None,
            label: None,
            label2: None,
            description: None,
            notes: None,
            options: Vec::new(),
            column_width: None,
            collapsed: Collapse::default(),
            skip_label_header: false,
            autocheck: false,
            value: None,
            extra: BTreeMap::new(),
        }
    }

    /// Identifier this descriptor is addressed by (`name`, falling back to `id`)
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.name.as_deref().or(self.id.as_deref())
    }

    /// All names this descriptor binds to, in `name`, `id` order
    #[must_use]
    pub fn bindings(&self) -> Vec<&str> {
        self.name.iter().chain(self.id.iter()).map(String::as_str).collect()
    }

    /// Look up a pass-through attribute
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Option values in display order
    #[must_use]
    pub fn option_values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collapse_parse() {
        assert_eq!("blank".parse::<Collapse>().unwrap(), Collapse::Blank);
        assert_eq!("never".parse::<Collapse>().unwrap(), Collapse::Never);
        assert!(matches!(
            "sometimes".parse::<Collapse>(),
            Err(Error::InvalidAttributeValue { .. })
        ));
        assert_eq!(Collapse::Yes.as_str(), "yes");
    }

    #[test]
    fn test_bindings_and_key() {
        let mut field = FieldDescriptor::new(FieldKind::Text);
        assert!(field.bindings().is_empty());
        assert_eq!(field.key(), None);

        field.id = Some("docsSupport".into());
        assert_eq!(field.key(), Some("docsSupport"));

        field.name = Some("legacyDomain".into());
        assert_eq!(field.bindings(), vec!["legacyDomain", "docsSupport"]);
        assert_eq!(field.key(), Some("legacyDomain"));
    }

    #[test]
    fn test_serialization_skips_empty_attributes() {
        let mut field = FieldDescriptor::new(FieldKind::Checkbox);
        field.name = Some("moduleDebug".into());
        field.collapsed = Collapse::Blank;

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(
            json,
            json!({
                "kind": "InputfieldCheckbox",
                "name": "moduleDebug",
                "collapsed": "blank",
                "skipLabelHeader": false,
                "autocheck": false
            })
        );
    }
}
