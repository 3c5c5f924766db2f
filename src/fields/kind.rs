//! Field kinds and the host's kind registry

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of input field, as understood by the rendering host
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Container for other fields
    #[serde(rename = "InputfieldFieldset")]
    Fieldset,
    /// Single-select radio buttons
    #[serde(rename = "InputfieldRadios")]
    Radios,
    /// Boolean checkbox
    #[serde(rename = "InputfieldCheckbox")]
    Checkbox,
    /// Single-line text input
    #[serde(rename = "InputfieldText")]
    Text,
    /// Static markup, carries no persisted value
    #[serde(rename = "InputfieldMarkup")]
    Markup,
}

impl FieldKind {
    /// Every kind this crate builds
    pub const ALL: [FieldKind; 5] = [
        Self::Fieldset,
        Self::Radios,
        Self::Checkbox,
        Self::Text,
        Self::Markup,
    ];

    /// Host identifier for this kind
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fieldset => "InputfieldFieldset",
            Self::Radios => "InputfieldRadios",
            Self::Checkbox => "InputfieldCheckbox",
            Self::Text => "InputfieldText",
            Self::Markup => "InputfieldMarkup",
        }
    }

    /// Whether fields of this kind bind to a persisted setting
    #[must_use]
    pub fn holds_setting(&self) -> bool {
        !matches!(self, Self::Fieldset | Self::Markup)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a host field-kind identifier
///
/// This is the host's field registry. Returning `None` means the host does not
/// provide the kind, which the factory treats as a fatal lookup error.
pub trait FieldKindResolver {
    fn resolve(&self, name: &str) -> Option<FieldKind>;
}

impl<F> FieldKindResolver for F
where
    F: Fn(&str) -> Option<FieldKind>,
{
    fn resolve(&self, name: &str) -> Option<FieldKind> {
        self(name)
    }
}

/// In-memory kind registry
///
/// # Example
///
/// ```
/// use jumplinks_config::{FieldKind, FieldKindResolver, KindRegistry};
///
/// let registry = KindRegistry::standard();
/// assert_eq!(registry.resolve("InputfieldRadios"), Some(FieldKind::Radios));
/// assert_eq!(registry.resolve("InputfieldColor"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KindRegistry {
    kinds: HashMap<String, FieldKind>,
}

impl KindRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every kind this crate builds, under its host identifier
    #[must_use]
    pub fn standard() -> Self {
        FieldKind::ALL
            .into_iter()
            .fold(Self::new(), |registry, kind| registry.with(kind.as_str(), kind))
    }

    /// Register a kind under a host identifier
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.register(name, kind);
        self
    }

    /// Register a kind under a host identifier
    pub fn register(&mut self, name: impl Into<String>, kind: FieldKind) {
        self.kinds.insert(name.into(), kind);
    }

    /// Remove a host identifier, returning the kind it mapped to
    pub fn unregister(&mut self, name: &str) -> Option<FieldKind> {
        self.kinds.remove(name)
    }

    /// Number of registered identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl FieldKindResolver for KindRegistry {
    fn resolve(&self, name: &str) -> Option<FieldKind> {
        self.kinds.get(name).copied()
    }
}
