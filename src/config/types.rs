//! Core configuration types for jumplinks-config

use crate::config::schema::{SCHEMA_VERSION, merge_with_defaults, persisted_version};
use log::{debug, warn};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Documentation link
pub const DOCS_HREF: &str = "https://github.com/rockettpw/jumplinks";

/// Support thread link
pub const SUPPORT_HREF: &str = "https://processwire.com/talk/topic/8697-jumplinks/";

/// Donation link
pub const DONATE_HREF: &str =
    "https://www.paypal.com/cgi-bin/webscr?cmd=_s-xclick&hosted_button_id=L8F6FFYK6ENBQ";

/// Migration function applied to persisted settings written by an older schema
pub type Migrator = Arc<dyn Fn(Map<String, Value>) -> Map<String, Value> + Send + Sync>;

/// Configuration for the settings page
#[derive(Clone)]
pub struct ModuleConfig {
    /// Public URL of the module's asset directory (no trailing slash)
    pub assets_url: String,

    /// Documentation root, used for "learn more" links
    pub docs_href: String,

    /// Support thread link
    pub support_href: String,

    /// Donation link shown in the support section
    pub donate_href: String,

    /// Companion module whose presence is published to the client
    pub companion_module: String,

    /// Optional migration for settings persisted by an older schema version
    pub migrator: Option<Migrator>,
}

impl std::fmt::Debug for ModuleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleConfig")
            .field("assets_url", &self.assets_url)
            .field("docs_href", &self.docs_href)
            .field("support_href", &self.support_href)
            .field("donate_href", &self.donate_href)
            .field("companion_module", &self.companion_module)
            .field("migrator", &self.migrator.as_ref().map(|_| "Some(Fn)"))
            .finish()
    }
}

impl Default for ModuleConfig {
    fn default() -> Self {
        ModuleConfigBuilder::new().build()
    }
}

impl ModuleConfig {
    /// Create a new builder for `ModuleConfig`
    ///
    /// # Example
    /// ```rust
    /// use jumplinks_config::ModuleConfig;
    ///
    /// let config = ModuleConfig::builder()
    ///     .assets_url("/site/modules/ProcessJumplinks/Assets")
    ///     .build();
    /// assert_eq!(config.companion_module, "ProcessRedirects");
    /// ```
    #[must_use]
    pub fn builder() -> ModuleConfigBuilder {
        ModuleConfigBuilder::new()
    }

    /// URL of the settings page script
    #[must_use]
    pub fn script_url(&self) -> String {
        format!("{}/ProcessJumplinks.min.js", self.assets_url)
    }

    /// URL of the settings page stylesheet
    #[must_use]
    pub fn style_url(&self) -> String {
        format!("{}/ProcessJumplinks.css", self.assets_url)
    }

    /// Link into the configuration section of the documentation
    #[must_use]
    pub fn docs_section(&self, anchor: &str) -> String {
        format!("{}/Configuration#{anchor}", self.docs_href)
    }

    /// Merge persisted settings with the defaults
    ///
    /// Settings written by an older schema version run through the migrator
    /// first. Without a migrator they are merged as they are. Settings from a
    /// newer schema keep their version.
    #[must_use]
    pub fn merge_persisted(&self, persisted: Map<String, Value>) -> Map<String, Value> {
        let version = persisted_version(&persisted);
        if version > SCHEMA_VERSION {
            warn!(
                "Persisted settings use schema {version}, newer than {SCHEMA_VERSION}; merging without migration"
            );
        }
        let persisted = if version < SCHEMA_VERSION {
            match &self.migrator {
                Some(migrate) => {
                    debug!("Migrating persisted settings from schema {version} to {SCHEMA_VERSION}");
                    migrate(persisted)
                }
                None => {
                    if !persisted.is_empty() {
                        warn!(
                            "Persisted settings use schema {version}, current is {SCHEMA_VERSION}; no migrator registered"
                        );
                    }
                    persisted
                }
            }
        } else {
            persisted
        };
        merge_with_defaults(&persisted)
    }
}

/// Builder for creating `ModuleConfig` with a fluent API
#[derive(Clone)]
pub struct ModuleConfigBuilder {
    assets_url: String,
    docs_href: String,
    support_href: String,
    donate_href: String,
    companion_module: String,
    migrator: Option<Migrator>,
}

impl Default for ModuleConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleConfigBuilder {
    /// Create a builder with the stock links and asset location
    #[must_use]
    pub fn new() -> Self {
        Self {
            assets_url: "/site/modules/ProcessJumplinks/Assets".into(),
            docs_href: DOCS_HREF.into(),
            support_href: SUPPORT_HREF.into(),
            donate_href: DONATE_HREF.into(),
            companion_module: "ProcessRedirects".into(),
            migrator: None,
        }
    }

    /// Set the asset directory URL
    ///
    /// A trailing slash is stripped.
    #[must_use]
    pub fn assets_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.assets_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the documentation root
    #[must_use]
    pub fn docs_href(mut self, href: impl Into<String>) -> Self {
        self.docs_href = href.into();
        self
    }

    /// Set the support thread link
    #[must_use]
    pub fn support_href(mut self, href: impl Into<String>) -> Self {
        self.support_href = href.into();
        self
    }

    /// Set the donation link
    #[must_use]
    pub fn donate_href(mut self, href: impl Into<String>) -> Self {
        self.donate_href = href.into();
        self
    }

    /// Set the companion module whose install state is published to the client
    #[must_use]
    pub fn companion_module(mut self, name: impl Into<String>) -> Self {
        self.companion_module = name.into();
        self
    }

    /// Set a migration function for settings written by an older schema
    ///
    /// # Example
    ///
    /// ```rust
    /// use jumplinks_config::ModuleConfig;
    /// use serde_json::{json, Value};
    ///
    /// let config = ModuleConfig::builder()
    ///     .with_migrator(|mut values| {
    ///         // Pre-versioned installs stored the codes as a list
    ///         if let Some(Value::Array(codes)) = values.remove("statusCodes") {
    ///             let joined: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
    ///             values.insert("statusCodes".into(), json!(joined.join(" ")));
    ///         }
    ///         values
    ///     })
    ///     .build();
    ///
    /// let old = json!({ "statusCodes": [200, 301] });
    /// let merged = config.merge_persisted(old.as_object().unwrap().clone());
    /// assert_eq!(merged["statusCodes"], json!("200 301"));
    /// ```
    #[must_use]
    pub fn with_migrator<F>(mut self, migrator: F) -> Self
    where
        F: Fn(Map<String, Value>) -> Map<String, Value> + Send + Sync + 'static,
    {
        self.migrator = Some(Arc::new(migrator));
        self
    }

    /// Build the `ModuleConfig`
    #[must_use]
    pub fn build(self) -> ModuleConfig {
        ModuleConfig {
            assets_url: self.assets_url,
            docs_href: self.docs_href,
            support_href: self.support_href,
            donate_href: self.donate_href,
            companion_module: self.companion_module,
            migrator: self.migrator,
        }
    }
}
