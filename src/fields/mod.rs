//! Presentation fields for the settings page
//!
//! - `FieldKind` / `FieldKindResolver` - host field kinds and their registry
//! - `FieldMeta` - ordered attribute assignments, with explicit alias lists
//! - `FieldFactory` - builds descriptors and groups from metadata
//! - `FieldDescriptor` / `FieldGroup` - the tree handed to the host

mod descriptor;
mod factory;
mod kind;
mod meta;
mod tree;

pub use descriptor::{Collapse, FieldDescriptor, SelectOption, opt};
pub use factory::FieldFactory;
pub use kind::{FieldKind, FieldKindResolver, KindRegistry};
pub use meta::{ALIAS_SEPARATOR, Attr, AttrValue, FieldMeta, MetaEntry};
pub use tree::{FieldGroup, FieldNode};
