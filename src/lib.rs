//! # jumplinks-config - Jumplinks settings schema
//!
//! Default settings and the settings-page field tree for the Jumplinks
//! redirect manager. The redirect engine itself lives elsewhere and only
//! consumes the values defined here.
//!
//! ## Features
//!
//! - **Versioned Defaults**: Nine default values tagged with a schema version
//! - **Typed Settings**: `JumplinksSettings` for typed access to merged values
//! - **Field Factory**: Builds field descriptors from a closed attribute set, with
//!   explicit alias lists instead of string-keyed property assignment
//! - **Composer**: Lays out the fixed settings page as an ordered tree
//! - **Docs**: Markdown reference generated from the tree
//!
//! ## Quick Start
//!
//! ```rust
//! use jumplinks_config::{Composer, KindRegistry, ModuleConfig, RenderContext};
//! use serde_json::json;
//!
//! # fn main() -> jumplinks_config::Result<()> {
//! let config = ModuleConfig::builder()
//!     .assets_url("/site/modules/ProcessJumplinks/Assets")
//!     .build();
//!
//! // Whatever the host has persisted for the module
//! let persisted = json!({ "_schemaVersion": 1, "moduleDebug": true });
//! let values = config.merge_persisted(persisted.as_object().unwrap().clone());
//!
//! // The host's field registry and module list
//! let registry = KindRegistry::standard();
//! let installed = |module: &str| module == "ProcessRedirects";
//!
//! let mut ctx = RenderContext::new();
//! let tree = Composer::new(&config, &registry).input_fields(&values, &installed, &mut ctx)?;
//!
//! assert_eq!(tree.find("moduleDebug").unwrap().value, Some(json!(true)));
//! assert_eq!(ctx.flag("pjOldRedirectsInstalled"), Some(true));
//! # Ok(())
//! # }
//! ```
//!
//! ## Building Fields
//!
//! ```rust
//! use jumplinks_config::{Attr, Collapse, FieldFactory, FieldMeta, KindRegistry};
//!
//! # fn main() -> jumplinks_config::Result<()> {
//! let registry = KindRegistry::standard();
//! let factory = FieldFactory::new(&registry);
//!
//! let field = factory.build(
//!     "InputfieldCheckbox",
//!     &FieldMeta::new()
//!         .set_all([Attr::Name, Attr::Id], "enable404Monitor")
//!         .set(Attr::Label, "404 Monitor")
//!         .set(Attr::Collapsed, Collapse::Blank),
//! )?;
//! assert_eq!(field.bindings(), vec!["enable404Monitor", "enable404Monitor"]);
//!
//! // Unknown kinds are a lookup error
//! assert!(factory.build("InputfieldColor", &FieldMeta::new()).is_err());
//! # Ok(())
//! # }
//! ```

// Core modules
mod composer;
mod docs;
mod error;

// Grouped modules
pub mod config;
pub mod fields;

// Re-exports from core
pub use composer::{
    ADMIN_FLAG, COMPANION_FLAG, CapabilityQuery, Composer, RenderContext, RenderHost,
};
pub use docs::{DocsConfig, generate_docs};
pub use error::{Error, Result};

// Re-exports from config
pub use config::{
    JumplinksSettings, ModuleConfig, ModuleConfigBuilder, SCHEMA_VERSION, SCHEMA_VERSION_KEY,
    VersionedDefaults, WildcardCleaning, defaults, merge_with_defaults,
};

// Re-exports from fields
pub use fields::{
    Attr, AttrValue, Collapse, FieldDescriptor, FieldFactory, FieldGroup, FieldKind,
    FieldKindResolver, FieldMeta, FieldNode, KindRegistry, SelectOption, opt,
};
