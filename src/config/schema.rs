//! Default settings and schema version
//!
//! # Overview
//!
//! Jumplinks persists a flat set of module settings. This module owns the
//! baseline values for those settings and the schema version they belong to:
//!
//! - [`JumplinksSettings`] - typed view of the persisted settings
//! - [`defaults`] - the defaults as a JSON map, keyed by setting name
//! - [`merge_with_defaults`] - overlay persisted values on the defaults
//!
//! Key names never change within a schema version. Renaming or removing a key
//! requires bumping [`SCHEMA_VERSION`].
//!
//! ```rust
//! use jumplinks_config::{defaults, SCHEMA_VERSION_KEY};
//! use serde_json::json;
//!
//! let values = defaults();
//! assert_eq!(values.len(), 9);
//! assert_eq!(values[SCHEMA_VERSION_KEY], json!(1));
//! assert_eq!(values["statusCodes"], json!("200 301 302"));
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use log::warn;
use serde_json::{Map, Value};

// =============================================================================
// Schema Version
// =============================================================================

/// Current settings schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Key under which the schema version is persisted
pub const SCHEMA_VERSION_KEY: &str = "_schemaVersion";

/// Well-known setting keys
pub mod keys {
    pub const ENHANCED_WILDCARD_CLEANING: &str = "enhancedWildcardCleaning";
    pub const LEGACY_DOMAIN: &str = "legacyDomain";
    pub const ENABLE_404_MONITOR: &str = "enable404Monitor";
    pub const DISABLE_INDEX_PHP_MATCHING: &str = "disableIndexPhpMatching";
    pub const MODULE_DEBUG: &str = "moduleDebug";
    /// Set by the importer once legacy redirects have been pulled in; never shown on the page
    pub const REDIRECTS_IMPORTED: &str = "redirectsImported";
    pub const STATUS_CODES: &str = "statusCodes";
    pub const WILDCARD_CLEANING: &str = "wildcardCleaning";
}

// =============================================================================
// Wildcard Cleaning Mode
// =============================================================================

/// How captured wildcard segments are normalized before substitution
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum WildcardCleaning {
    /// Lower-case and hyphenate
    #[default]
    FullClean,
    /// Hyphenate but keep case
    SemiClean,
    /// Leave segments untouched
    NoClean,
}

impl WildcardCleaning {
    /// All modes in display order
    pub const ALL: [WildcardCleaning; 3] = [Self::FullClean, Self::SemiClean, Self::NoClean];

    /// Persisted key for this mode
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullClean => "fullClean",
            Self::SemiClean => "semiClean",
            Self::NoClean => "noClean",
        }
    }

    /// Whether this mode cleans at all (enhanced cleaning only applies when it does)
    #[must_use]
    pub fn is_cleaning(&self) -> bool {
        !matches!(self, Self::NoClean)
    }
}

// =============================================================================
// Versioned Defaults
// =============================================================================

/// Types that supply a versioned set of default settings
///
/// Migration between versions is not defined here. Hosts that need it register
/// a migrator on [`ModuleConfig`](crate::ModuleConfig).
pub trait VersionedDefaults {
    /// Schema version the defaults belong to
    fn schema_version() -> u32;

    /// Default values keyed by setting name, including the version key
    fn defaults() -> Map<String, Value>;
}

// =============================================================================
// Typed Settings
// =============================================================================

/// Typed view of the persisted Jumplinks settings
///
/// Missing keys fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JumplinksSettings {
    #[serde(rename = "_schemaVersion")]
    pub schema_version: u32,
    pub enhanced_wildcard_cleaning: bool,
    pub legacy_domain: String,
    #[serde(rename = "enable404Monitor")]
    pub enable_404_monitor: bool,
    pub disable_index_php_matching: bool,
    pub module_debug: bool,
    pub redirects_imported: bool,
    /// Space-separated HTTP status codes, passed through unvalidated
    pub status_codes: String,
    pub wildcard_cleaning: WildcardCleaning,
}

impl Default for JumplinksSettings {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            enhanced_wildcard_cleaning: false,
            legacy_domain: String::new(),
            enable_404_monitor: false,
            disable_index_php_matching: false,
            module_debug: false,
            redirects_imported: false,
            status_codes: "200 301 302".into(),
            wildcard_cleaning: WildcardCleaning::FullClean,
        }
    }
}

impl JumplinksSettings {
    /// Read typed settings from a (merged) settings map
    ///
    /// Keys this struct does not know are ignored.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        serde_json::from_value(Value::Object(map.clone())).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Convert back into a settings map
    pub fn to_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::Parse(format!("expected an object, got {other}"))),
        }
    }
}

impl VersionedDefaults for JumplinksSettings {
    fn schema_version() -> u32 {
        SCHEMA_VERSION
    }

    fn defaults() -> Map<String, Value> {
        let defaults = Self::default();
        let mut map = Map::new();
        map.insert(SCHEMA_VERSION_KEY.into(), Value::from(defaults.schema_version));
        map.insert(
            keys::ENHANCED_WILDCARD_CLEANING.into(),
            Value::Bool(defaults.enhanced_wildcard_cleaning),
        );
        map.insert(keys::LEGACY_DOMAIN.into(), Value::String(defaults.legacy_domain));
        map.insert(
            keys::ENABLE_404_MONITOR.into(),
            Value::Bool(defaults.enable_404_monitor),
        );
        map.insert(
            keys::DISABLE_INDEX_PHP_MATCHING.into(),
            Value::Bool(defaults.disable_index_php_matching),
        );
        map.insert(keys::MODULE_DEBUG.into(), Value::Bool(defaults.module_debug));
        map.insert(
            keys::REDIRECTS_IMPORTED.into(),
            Value::Bool(defaults.redirects_imported),
        );
        map.insert(keys::STATUS_CODES.into(), Value::String(defaults.status_codes));
        map.insert(
            keys::WILDCARD_CLEANING.into(),
            Value::String(defaults.wildcard_cleaning.as_str().into()),
        );
        map
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Default settings for the current schema version
#[must_use]
pub fn defaults() -> Map<String, Value> {
    JumplinksSettings::defaults()
}

/// Overlay persisted values on the defaults
///
/// Persisted keys win, unknown keys are kept, and values are not validated.
/// The result carries the current schema version, or the persisted one if it
/// is newer. The version never moves backwards.
#[must_use]
pub fn merge_with_defaults(persisted: &Map<String, Value>) -> Map<String, Value> {
    let version = persisted_version(persisted).max(SCHEMA_VERSION);
    let mut merged = defaults();
    for (key, value) in persisted {
        merged.insert(key.clone(), value.clone());
    }
    merged.insert(SCHEMA_VERSION_KEY.into(), Value::from(version));
    merged
}

/// Read the schema version a persisted map was written with
///
/// Both numbers and numeric strings (`"1"`) are accepted. Maps written
/// before versioning existed report version 0, as do unreadable versions.
#[must_use]
pub fn persisted_version(persisted: &Map<String, Value>) -> u32 {
    let Some(raw) = persisted.get(SCHEMA_VERSION_KEY) else {
        return 0;
    };
    let version = match raw {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    version.unwrap_or_else(|| {
        warn!("Ignoring unreadable {SCHEMA_VERSION_KEY} value {raw}; treating as 0");
        0
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_contents() {
        let values = defaults();

        assert_eq!(values.len(), 9);
        assert_eq!(values["_schemaVersion"], json!(1));
        assert_eq!(values["enhancedWildcardCleaning"], json!(false));
        assert_eq!(values["legacyDomain"], json!(""));
        assert_eq!(values["enable404Monitor"], json!(false));
        assert_eq!(values["disableIndexPhpMatching"], json!(false));
        assert_eq!(values["moduleDebug"], json!(false));
        assert_eq!(values["redirectsImported"], json!(false));
        assert_eq!(values["statusCodes"], json!("200 301 302"));
        assert_eq!(values["wildcardCleaning"], json!("fullClean"));
    }

    #[test]
    fn test_defaults_match_serialized_struct() {
        let from_struct = JumplinksSettings::default().to_map().unwrap();
        assert_eq!(from_struct, defaults());
    }

    #[test]
    fn test_wildcard_cleaning_serialization() {
        assert_eq!(
            serde_json::to_value(WildcardCleaning::SemiClean).unwrap(),
            json!("semiClean")
        );
        for mode in WildcardCleaning::ALL {
            assert_eq!(serde_json::to_value(mode).unwrap(), json!(mode.as_str()));
        }
        assert!(WildcardCleaning::FullClean.is_cleaning());
        assert!(!WildcardCleaning::NoClean.is_cleaning());
    }

    #[test]
    fn test_merge_keeps_overrides_and_unknown_keys() {
        let persisted = json!({
            "legacyDomain": "http://legacy.example.com/",
            "statusCodes": "not codes at all",
            "somethingElse": 42
        });
        let merged = merge_with_defaults(persisted.as_object().unwrap());

        assert_eq!(merged["legacyDomain"], json!("http://legacy.example.com/"));
        assert_eq!(merged["statusCodes"], json!("not codes at all"));
        assert_eq!(merged["somethingElse"], json!(42));
        assert_eq!(merged["moduleDebug"], json!(false));
        assert_eq!(merged[SCHEMA_VERSION_KEY], json!(SCHEMA_VERSION));
    }

    #[test]
    fn test_from_map_type_mismatch() {
        let mut map = defaults();
        map.insert("moduleDebug".into(), json!("yes"));

        let result = JumplinksSettings::from_map(&map);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_from_map_fills_missing_keys() {
        let partial = json!({ "wildcardCleaning": "noClean" });
        let settings = JumplinksSettings::from_map(partial.as_object().unwrap()).unwrap();

        assert_eq!(settings.wildcard_cleaning, WildcardCleaning::NoClean);
        assert_eq!(settings.status_codes, "200 301 302");
    }

    #[test]
    fn test_persisted_version() {
        assert_eq!(persisted_version(&Map::new()), 0);
        assert_eq!(persisted_version(&defaults()), SCHEMA_VERSION);
    }

    #[test]
    fn test_persisted_version_from_string() {
        let stored = json!({ "_schemaVersion": "1" });
        assert_eq!(persisted_version(stored.as_object().unwrap()), 1);

        let padded = json!({ "_schemaVersion": " 3 " });
        assert_eq!(persisted_version(padded.as_object().unwrap()), 3);

        for bad in [json!("v1"), json!(-1), json!(1.5), json!(true)] {
            let mut map = Map::new();
            map.insert(SCHEMA_VERSION_KEY.into(), bad);
            assert_eq!(persisted_version(&map), 0);
        }
    }

    #[test]
    fn test_merge_never_lowers_schema_version() {
        let newer = json!({ "_schemaVersion": SCHEMA_VERSION + 1, "moduleDebug": true });
        let merged = merge_with_defaults(newer.as_object().unwrap());
        assert_eq!(merged[SCHEMA_VERSION_KEY], json!(SCHEMA_VERSION + 1));
        assert_eq!(merged["moduleDebug"], json!(true));

        let stringly = json!({ "_schemaVersion": "1" });
        let merged = merge_with_defaults(stringly.as_object().unwrap());
        assert_eq!(merged[SCHEMA_VERSION_KEY], json!(SCHEMA_VERSION));
    }
}
