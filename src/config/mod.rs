//! Settings defaults and module configuration
//!
//! This module contains the foundational types for the settings page:
//! - `JumplinksSettings` - Typed persisted settings and their defaults
//! - `VersionedDefaults` - Trait for supplying defaults tagged with a schema version
//! - `ModuleConfig` - Links, asset location and migration hook for the settings page

mod schema;
mod types;

pub use schema::{
    JumplinksSettings, SCHEMA_VERSION, SCHEMA_VERSION_KEY, VersionedDefaults, WildcardCleaning,
    defaults, keys, merge_with_defaults, persisted_version,
};

pub use types::{
    DOCS_HREF, DONATE_HREF, Migrator, ModuleConfig, ModuleConfigBuilder, SUPPORT_HREF,
};
