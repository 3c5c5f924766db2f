//! Field groups: ordered, nestable containers of descriptors

use crate::fields::descriptor::{Collapse, FieldDescriptor};
use crate::fields::kind::FieldKind;
use serde::Serialize;
use serde_json::{Map, Value};

/// One child of a group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldNode {
    Field(FieldDescriptor),
    Group(FieldGroup),
}

impl FieldNode {
    #[must_use]
    pub fn as_field(&self) -> Option<&FieldDescriptor> {
        match self {
            Self::Field(field) => Some(field),
            Self::Group(_) => None,
        }
    }

    #[must_use]
    pub fn as_group(&self) -> Option<&FieldGroup> {
        match self {
            Self::Group(group) => Some(group),
            Self::Field(_) => None,
        }
    }

    /// Label of the field or group
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Field(field) => field.label.as_deref(),
            Self::Group(group) => group.label.as_deref(),
        }
    }

    #[must_use]
    pub fn collapsed(&self) -> Collapse {
        match self {
            Self::Field(field) => field.collapsed,
            Self::Group(group) => group.collapsed,
        }
    }
}

impl From<FieldDescriptor> for FieldNode {
    fn from(field: FieldDescriptor) -> Self {
        Self::Field(field)
    }
}

impl From<FieldGroup> for FieldNode {
    fn from(group: FieldGroup) -> Self {
        Self::Group(group)
    }
}

/// Ordered container of fields and nested groups
///
/// Children render in insertion order. Once added, a child cannot be removed
/// or reordered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldGroup {
    pub kind: FieldKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub collapsed: Collapse,

    pub skip_label_header: bool,

    children: Vec<FieldNode>,
}

impl FieldGroup {
    /// Create an empty fieldset
    #[must_use]
    pub fn new() -> Self {
        Self {
            kind: FieldKind::Fieldset,
            label: None,
            description: None,
            collapsed: Collapse::default(),
            skip_label_header: false,
            children: Vec::new(),
        }
    }

    /// Append a field or group
    pub fn add(&mut self, node: impl Into<FieldNode>) -> &mut Self {
        self.children.push(node.into());
        self
    }

    /// Children in render order
    #[must_use]
    pub fn children(&self) -> &[FieldNode] {
        &self.children
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Every field in the tree, depth-first in render order
    #[must_use]
    pub fn fields(&self) -> Vec<&FieldDescriptor> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a FieldDescriptor>) {
        for child in &self.children {
            match child {
                FieldNode::Field(field) => out.push(field),
                FieldNode::Group(group) => group.collect_fields(out),
            }
        }
    }

    /// Find a field anywhere in the tree by name or id
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields()
            .into_iter()
            .find(|field| field.bindings().contains(&key))
    }

    /// Find a nested group by label
    #[must_use]
    pub fn find_group(&self, label: &str) -> Option<&FieldGroup> {
        self.children.iter().find_map(|child| {
            let group = child.as_group()?;
            if group.label.as_deref() == Some(label) {
                Some(group)
            } else {
                group.find_group(label)
            }
        })
    }

    /// Copy current setting values into every field bound by `name`
    ///
    /// Markup leaves and keys missing from `values` are left alone. Returns the
    /// number of fields that received a value.
    pub fn populate(&mut self, values: &Map<String, Value>) -> usize {
        let mut filled = 0;
        for child in &mut self.children {
            match child {
                FieldNode::Field(field) if field.kind.holds_setting() => {
                    let value = field.name.as_ref().and_then(|name| values.get(name));
                    if let Some(value) = value {
                        field.value = Some(value.clone());
                        filled += 1;
                    }
                }
                FieldNode::Field(_) => {}
                FieldNode::Group(group) => filled += group.populate(values),
            }
        }
        filled
    }
}

impl Default for FieldGroup {
    fn default() -> Self {
        Self::new()
    }
}
