//! Field descriptor factory
//!
//! Turns a field-kind identifier plus [`FieldMeta`] into a descriptor. The
//! kind is resolved through the host's [`FieldKindResolver`] before any
//! attribute is touched, so an unknown kind never yields a partial result.
//!
//! ```
//! use jumplinks_config::{Attr, FieldFactory, FieldMeta, KindRegistry};
//!
//! let registry = KindRegistry::standard();
//! let factory = FieldFactory::new(&registry);
//!
//! let field = factory.build(
//!     "InputfieldText",
//!     &FieldMeta::new()
//!         .set_all([Attr::Name, Attr::Id], "legacyDomain")
//!         .set(Attr::ColumnWidth, 50),
//! )?;
//! assert_eq!(field.name, field.id);
//! assert_eq!(field.column_width, Some(50));
//! # Ok::<(), jumplinks_config::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::fields::descriptor::{Collapse, FieldDescriptor, SelectOption};
use crate::fields::kind::{FieldKind, FieldKindResolver};
use crate::fields::meta::{Attr, AttrValue, FieldMeta};
use crate::fields::tree::FieldGroup;
use log::debug;
use serde_json::Value;

/// Builds descriptors and groups against a host kind registry
pub struct FieldFactory<'a, R: FieldKindResolver + ?Sized> {
    resolver: &'a R,
}

impl<'a, R: FieldKindResolver + ?Sized> FieldFactory<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        Self { resolver }
    }

    fn resolve(&self, kind: &str) -> Result<FieldKind> {
        self.resolver
            .resolve(kind)
            .ok_or_else(|| Error::UnknownFieldKind(kind.to_string()))
    }

    /// Build one field descriptor
    ///
    /// Entries apply in order; every target of an entry receives the same
    /// value, and a later entry overwrites an earlier one.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownFieldKind`] if the host does not register `kind`
    /// - [`Error::InvalidAttributeValue`] if a value has the wrong shape for its attribute
    pub fn build(&self, kind: &str, meta: &FieldMeta) -> Result<FieldDescriptor> {
        let resolved = self.resolve(kind)?;
        let mut field = FieldDescriptor::new(resolved);

        for entry in meta.entries() {
            for &attr in &entry.targets {
                apply_field(&mut field, attr, &entry.value)?;
            }
        }

        debug!("Built {} field {:?}", resolved, field.key().unwrap_or("<anonymous>"));
        Ok(field)
    }

    /// Build an empty fieldset
    ///
    /// Only `label`, `description`, `collapsed` and `skipLabel` apply to groups.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownFieldKind`] if the host has no fieldset kind
    /// - [`Error::UnsupportedAttribute`] for any other attribute
    pub fn group(&self, meta: &FieldMeta) -> Result<FieldGroup> {
        let name = FieldKind::Fieldset.as_str();
        if self.resolve(name)? != FieldKind::Fieldset {
            return Err(Error::UnknownFieldKind(name.to_string()));
        }

        let mut group = FieldGroup::new();
        for entry in meta.entries() {
            for &attr in &entry.targets {
                apply_group(&mut group, attr, &entry.value)?;
            }
        }

        debug!("Built fieldset {:?}", group.label.as_deref().unwrap_or(""));
        Ok(group)
    }
}

// =============================================================================
// Attribute Application
// =============================================================================

fn apply_field(field: &mut FieldDescriptor, attr: Attr, value: &AttrValue) -> Result<()> {
    match attr {
        Attr::Name => field.name = Some(text(attr, value)?),
        Attr::Id => field.id = Some(text(attr, value)?),
        Attr::Label => field.label = Some(text(attr, value)?),
        Attr::Label2 => field.label2 = Some(text(attr, value)?),
        Attr::Description => field.description = Some(text(attr, value)?),
        Attr::Notes => field.notes = Some(text(attr, value)?),
        Attr::Options => field.options = options(attr, value)?,
        Attr::ColumnWidth => field.column_width = Some(width(attr, value)?),
        Attr::Collapsed => field.collapsed = collapse(attr, value)?,
        Attr::SkipLabel => field.skip_label_header = flag(attr, value)?,
        Attr::Autocheck => field.autocheck = flag(attr, value)?,
        Attr::Placeholder => {
            field
                .extra
                .insert(attr.as_str().into(), Value::String(text(attr, value)?));
        }
        Attr::Spellcheck => {
            // Hosts commonly pass the HTML attribute string ("false")
            let enabled = match value {
                AttrValue::Text(s) if s == "true" => true,
                AttrValue::Text(s) if s == "false" => false,
                other => flag(attr, other)?,
            };
            field.extra.insert(attr.as_str().into(), Value::Bool(enabled));
        }
        Attr::Value => field.value = Some(to_json(value)?),
    }
    Ok(())
}

fn apply_group(group: &mut FieldGroup, attr: Attr, value: &AttrValue) -> Result<()> {
    match attr {
        Attr::Label => group.label = Some(text(attr, value)?),
        Attr::Description => group.description = Some(text(attr, value)?),
        Attr::Collapsed => group.collapsed = collapse(attr, value)?,
        Attr::SkipLabel => group.skip_label_header = flag(attr, value)?,
        other => {
            return Err(Error::UnsupportedAttribute {
                kind: FieldKind::Fieldset.as_str().into(),
                attr: other.as_str().into(),
            });
        }
    }
    Ok(())
}

fn mismatch(attr: Attr, expected: &str, value: &AttrValue) -> Error {
    Error::InvalidAttributeValue {
        attr: attr.as_str().into(),
        reason: format!("expected {expected}, got {}", value.type_name()),
    }
}

fn text(attr: Attr, value: &AttrValue) -> Result<String> {
    match value {
        AttrValue::Text(s) => Ok(s.clone()),
        other => Err(mismatch(attr, "text", other)),
    }
}

fn flag(attr: Attr, value: &AttrValue) -> Result<bool> {
    match value {
        AttrValue::Bool(b) => Ok(*b),
        other => Err(mismatch(attr, "boolean", other)),
    }
}

/// Column widths are percentages of the row
const MAX_COLUMN_WIDTH: u8 = 100;

fn width(attr: Attr, value: &AttrValue) -> Result<u8> {
    match value {
        AttrValue::Int(n) => u8::try_from(*n)
            .ok()
            .filter(|w| *w <= MAX_COLUMN_WIDTH)
            .ok_or_else(|| Error::InvalidAttributeValue {
                attr: attr.as_str().into(),
                reason: format!("{n} is outside 0..={MAX_COLUMN_WIDTH}"),
            }),
        other => Err(mismatch(attr, "integer", other)),
    }
}

fn collapse(attr: Attr, value: &AttrValue) -> Result<Collapse> {
    match value {
        AttrValue::Collapse(c) => Ok(*c),
        AttrValue::Text(s) => s.parse(),
        other => Err(mismatch(attr, "collapse state", other)),
    }
}

fn options(attr: Attr, value: &AttrValue) -> Result<Vec<SelectOption>> {
    match value {
        AttrValue::Options(list) => Ok(list.clone()),
        other => Err(mismatch(attr, "option list", other)),
    }
}

fn to_json(value: &AttrValue) -> Result<Value> {
    Ok(match value {
        AttrValue::Text(s) => Value::String(s.clone()),
        AttrValue::Bool(b) => Value::Bool(*b),
        AttrValue::Int(n) => Value::from(*n),
        AttrValue::Collapse(c) => Value::String(c.as_str().into()),
        AttrValue::Options(list) => serde_json::to_value(list)?,
    })
}

// =============================================================================
// Tests
// =============================================================================
