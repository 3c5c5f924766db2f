//! Documentation generator for the settings page
//!
//! Generates a markdown settings reference from a composed field tree.

use crate::fields::{Collapse, FieldDescriptor, FieldGroup, FieldKind, FieldNode};
use std::fmt::Write;

/// Configuration for docs generation
#[derive(Debug, Clone, Default)]
pub struct DocsConfig {
    /// Title for the documentation
    pub title: Option<String>,
    /// Description/introduction text
    pub description: Option<String>,
    /// Whether to include static markup leaves
    pub include_markup: bool,
}

impl DocsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    #[must_use]
    pub fn include_markup(mut self) -> Self {
        self.include_markup = true;
        self
    }
}

/// Generate markdown documentation from a field tree
///
/// Groups become headings, fields become entries in render order. Field
/// values (if the tree was populated) are shown as the current value.
#[must_use]
pub fn generate_docs(tree: &FieldGroup, config: DocsConfig) -> String {
    let mut output = String::new();

    let title = config
        .title
        .clone()
        .unwrap_or_else(|| "Settings Reference".to_string());
    writeln!(output, "# {title}\n").unwrap();

    if let Some(desc) = &config.description {
        writeln!(output, "{desc}\n").unwrap();
    }

    format_group(&mut output, tree, 2, &config);
    output
}

fn format_group(out: &mut String, group: &FieldGroup, depth: usize, config: &DocsConfig) {
    for child in group.children() {
        match child {
            FieldNode::Group(inner) => {
                let hashes = "#".repeat(depth.min(6));
                let label = inner.label.as_deref().unwrap_or("Settings");
                writeln!(out, "{hashes} {label}\n").unwrap();
                if let Some(desc) = &inner.description {
                    writeln!(out, "{desc}\n").unwrap();
                }
                format_group(out, inner, depth + 1, config);
            }
            FieldNode::Field(field) if field.kind == FieldKind::Markup => {
                if config.include_markup {
                    format_markup(out, field, depth);
                }
            }
            FieldNode::Field(field) => format_field(out, field, depth),
        }
    }
}

fn format_field(out: &mut String, field: &FieldDescriptor, depth: usize) {
    let hashes = "#".repeat(depth.min(6));
    let key = field.key().unwrap_or("(unnamed)");
    writeln!(out, "{hashes} `{key}`\n").unwrap();

    if let Some(label) = &field.label {
        writeln!(out, "**{label}**\n").unwrap();
    }

    let mut badges = Vec::new();
    match field.collapsed {
        Collapse::Yes => badges.push("Collapsed"),
        Collapse::Blank => badges.push("Collapsed Until Set"),
        Collapse::Never | Collapse::No => {}
    }
    if field.autocheck {
        badges.push("Autocheck");
    }
    if !badges.is_empty() {
        writeln!(out, "{}\n", badges.join(" • ")).unwrap();
    }

    if let Some(desc) = &field.description {
        writeln!(out, "{desc}\n").unwrap();
    }

    out.push_str("| Property | Value |\n");
    out.push_str("|----------|-------|\n");
    writeln!(out, "| **Type** | {} |", format_type(field.kind)).unwrap();
    if let Some(value) = &field.value {
        writeln!(out, "| **Value** | `{}` |", format_value(value)).unwrap();
    }
    if let Some(width) = field.column_width {
        writeln!(out, "| **Width** | {width}% |").unwrap();
    }
    out.push('\n');

    if !field.options.is_empty() {
        out.push_str("**Options:**\n\n");
        for opt in &field.options {
            writeln!(out, "- `{}` - {}", opt.value, opt.label).unwrap();
        }
        out.push('\n');
    }

    if let Some(notes) = &field.notes {
        writeln!(out, "> {}\n", notes.replace('\n', "\n> ")).unwrap();
    }

    out.push_str("---\n\n");
}

fn format_markup(out: &mut String, field: &FieldDescriptor, depth: usize) {
    let hashes = "#".repeat(depth.min(6));
    let label = field.label.as_deref().or(field.key()).unwrap_or("Information");
    writeln!(out, "{hashes} {label}\n").unwrap();
    writeln!(out, "_{}_\n", format_type(field.kind)).unwrap();
    out.push_str("---\n\n");
}

fn format_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Fieldset => "Group",
        FieldKind::Radios => "Select",
        FieldKind::Checkbox => "Boolean",
        FieldKind::Text => "String",
        FieldKind::Markup => "Info (Read-only)",
    }
}

fn format_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => format!("\"{s}\""),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Null => "null".to_string(),
        _ => v.to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================
