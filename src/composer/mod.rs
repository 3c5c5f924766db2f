//! Settings page composer
//!
//! This module contains the [`Composer`] which lays out the settings page as a
//! tree of [`FieldGroup`]s and [`FieldDescriptor`]s. The layout is fixed:
//!
//! 1. "Wildcard Cleaning" fieldset
//! 2. "Legacy Domain" fieldset
//! 3. "404 Monitor" checkbox
//! 4. "Disable index.php matching" checkbox
//! 5. "Info & Support" fieldset
//!
//! # Example
//!
//! ```rust
//! use jumplinks_config::{Composer, KindRegistry, ModuleConfig, RenderContext, defaults};
//!
//! let config = ModuleConfig::default();
//! let registry = KindRegistry::standard();
//! let composer = Composer::new(&config, &registry);
//!
//! let mut ctx = RenderContext::new();
//! let tree = composer.input_fields(&defaults(), &|_: &str| false, &mut ctx)?;
//!
//! assert_eq!(tree.len(), 5);
//! assert_eq!(ctx.flag("pjOldRedirectsInstalled"), Some(false));
//! # Ok::<(), jumplinks_config::Error>(())
//! ```

mod host;
mod text;

pub use host::{ADMIN_FLAG, COMPANION_FLAG, CapabilityQuery, RenderContext, RenderHost};

use crate::config::{ModuleConfig, WildcardCleaning, keys};
use crate::error::Result;
use crate::fields::{
    Attr, Collapse, FieldDescriptor, FieldFactory, FieldGroup, FieldKind, FieldKindResolver,
    FieldMeta, opt,
};
use log::{debug, info};
use serde_json::{Map, Value};

/// Builds the settings page field tree
///
/// Every call builds a fresh tree; nothing is cached between calls.
pub struct Composer<'a, R: FieldKindResolver + ?Sized> {
    config: &'a ModuleConfig,
    factory: FieldFactory<'a, R>,
}

impl<'a, R: FieldKindResolver + ?Sized> Composer<'a, R> {
    pub fn new(config: &'a ModuleConfig, resolver: &'a R) -> Self {
        Self {
            config,
            factory: FieldFactory::new(resolver),
        }
    }

    /// Render entry point for the settings page
    ///
    /// Composes the tree, fills each setting field with its value from
    /// `values` (normally the output of [`ModuleConfig::merge_persisted`]),
    /// then registers the page assets and client flags on `host`. Nothing is
    /// registered when composition fails.
    ///
    /// The companion-module lookup only feeds the client flag; it never
    /// changes the tree.
    pub fn input_fields<C, H>(
        &self,
        values: &Map<String, Value>,
        capabilities: &C,
        host: &mut H,
    ) -> Result<FieldGroup>
    where
        C: CapabilityQuery + ?Sized,
        H: RenderHost + ?Sized,
    {
        let mut tree = self.compose()?;
        let filled = tree.populate(values);

        host.add_script(&self.config.script_url());
        host.add_style(&self.config.style_url());

        let companion = capabilities.is_installed(&self.config.companion_module);
        host.publish_flag(ADMIN_FLAG, true);
        host.publish_flag(COMPANION_FLAG, companion);

        info!(
            "Rendered Jumplinks settings: {} fields, {filled} populated, {} installed: {companion}",
            tree.fields().len(),
            self.config.companion_module
        );
        Ok(tree)
    }

    /// Compose the settings tree without values
    pub fn compose(&self) -> Result<FieldGroup> {
        let mut root = FieldGroup::new();
        root.collapsed = Collapse::Never;

        root.add(self.wildcard_cleaning()?)
            .add(self.legacy_domain()?)
            .add(self.monitor_404()?)
            .add(self.index_php_matching()?)
            .add(self.info_support()?);

        debug!("Composed settings tree with {} top-level entries", root.len());
        Ok(root)
    }

    fn checkbox(&self, meta: FieldMeta) -> Result<FieldDescriptor> {
        self.factory.build(FieldKind::Checkbox.as_str(), &meta)
    }

    fn wildcard_cleaning(&self) -> Result<FieldGroup> {
        let mut fieldset = self.factory.group(
            &FieldMeta::new()
                .set(Attr::Label, text::WILDCARD_CLEANING)
                .set(Attr::Collapsed, Collapse::Never),
        )?;

        let labels = [text::FULL_CLEAN, text::SEMI_CLEAN, text::NO_CLEAN];
        let options = WildcardCleaning::ALL
            .iter()
            .zip(labels)
            .map(|(mode, label)| opt(mode.as_str(), label))
            .collect::<Vec<_>>();

        fieldset.add(self.factory.build(
            FieldKind::Radios.as_str(),
            &FieldMeta::new()
                .set_all([Attr::Name, Attr::Id], keys::WILDCARD_CLEANING)
                .set(Attr::Description, text::WILDCARD_CLEANING_DESCRIPTION)
                .set(Attr::Notes, text::wildcard_cleaning_notes(self.config))
                .set(Attr::Options, options)
                .set(Attr::ColumnWidth, 50)
                .set(Attr::Collapsed, Collapse::Never)
                .set(Attr::SkipLabel, true),
        )?);

        fieldset.add(
            self.checkbox(
                FieldMeta::new()
                    .set_all([Attr::Name, Attr::Id], keys::ENHANCED_WILDCARD_CLEANING)
                    .set(Attr::Label, text::ENHANCED_CLEANING)
                    .set(Attr::Description, text::ENHANCED_CLEANING_DESCRIPTION)
                    .set(Attr::Label2, text::ENHANCED_CLEANING_LABEL2)
                    .set(Attr::Notes, text::ENHANCED_CLEANING_NOTES)
                    .set(Attr::ColumnWidth, 50)
                    .set(Attr::Collapsed, Collapse::Never)
                    .set(Attr::Autocheck, true),
            )?,
        );

        Ok(fieldset)
    }

    fn legacy_domain(&self) -> Result<FieldGroup> {
        let mut fieldset = self.factory.group(
            &FieldMeta::new()
                .set(Attr::Label, text::LEGACY_DOMAIN)
                .set(Attr::Description, text::legacy_domain_description(self.config))
                .set(Attr::Collapsed, Collapse::Yes),
        )?;

        fieldset.add(self.factory.build(
            FieldKind::Text.as_str(),
            &FieldMeta::new()
                .set_all([Attr::Name, Attr::Id], keys::LEGACY_DOMAIN)
                .set(Attr::ColumnWidth, 50)
                .set(Attr::Description, text::LEGACY_DOMAIN_FIELD_DESCRIPTION)
                .set(Attr::Notes, text::LEGACY_DOMAIN_NOTES)
                .set(Attr::Placeholder, text::LEGACY_DOMAIN_PLACEHOLDER)
                .set(Attr::Collapsed, Collapse::Never)
                .set(Attr::SkipLabel, true)
                .set(Attr::Spellcheck, false),
        )?);

        fieldset.add(self.factory.build(
            FieldKind::Text.as_str(),
            &FieldMeta::new()
                .set_all([Attr::Name, Attr::Id], keys::STATUS_CODES)
                .set(Attr::ColumnWidth, 50)
                .set(Attr::Description, text::STATUS_CODES_DESCRIPTION)
                .set(Attr::Notes, text::status_codes_notes())
                .set(Attr::Collapsed, Collapse::Never)
                .set(Attr::SkipLabel, true)
                .set(Attr::Spellcheck, false),
        )?);

        Ok(fieldset)
    }

    fn monitor_404(&self) -> Result<FieldDescriptor> {
        self.checkbox(
            FieldMeta::new()
                .set_all([Attr::Name, Attr::Id], keys::ENABLE_404_MONITOR)
                .set(Attr::Label, text::MONITOR_404)
                .set(Attr::Description, text::MONITOR_404_DESCRIPTION)
                .set(Attr::Label2, text::MONITOR_404_LABEL2)
                .set(Attr::Notes, text::MONITOR_404_NOTES)
                .set(Attr::Collapsed, Collapse::Blank)
                .set(Attr::Autocheck, true),
        )
    }

    fn index_php_matching(&self) -> Result<FieldDescriptor> {
        self.checkbox(
            FieldMeta::new()
                .set_all([Attr::Name, Attr::Id], keys::DISABLE_INDEX_PHP_MATCHING)
                .set(Attr::Label, text::INDEX_PHP)
                .set(Attr::Description, text::INDEX_PHP_DESCRIPTION)
                .set(Attr::Label2, text::INDEX_PHP_LABEL2)
                .set(Attr::Notes, text::INDEX_PHP_NOTES)
                .set(Attr::Collapsed, Collapse::Blank)
                .set(Attr::Autocheck, true),
        )
    }

    fn info_support(&self) -> Result<FieldGroup> {
        // Label is hidden on the page; kept for screen readers and docs
        let mut fieldset = self.factory.group(
            &FieldMeta::new()
                .set(Attr::Label, text::INFO_SUPPORT)
                .set(Attr::Collapsed, Collapse::No)
                .set(Attr::SkipLabel, true),
        )?;

        fieldset.add(
            self.checkbox(
                FieldMeta::new()
                    .set_all([Attr::Name, Attr::Id], keys::MODULE_DEBUG)
                    .set(Attr::Label, text::DEBUG_MODE)
                    .set(Attr::Description, text::DEBUG_MODE_DESCRIPTION)
                    .set(Attr::Label2, text::DEBUG_MODE_LABEL2)
                    .set(Attr::Notes, text::DEBUG_MODE_NOTES)
                    .set(Attr::Collapsed, Collapse::Blank)
                    .set(Attr::Autocheck, true),
            )?,
        );

        let markup = [
            (
                "docsSupport",
                text::DOCS_SUPPORT,
                text::docs_support_markup(self.config),
                Collapse::Yes,
            ),
            (
                "moduleRecommendations",
                text::MODULE_RECOMMENDATIONS,
                text::module_recommendations_markup(),
                Collapse::Yes,
            ),
            (
                "supportDevelopment",
                text::SUPPORT_DEVELOPMENT,
                text::support_development_markup(self.config),
                Collapse::No,
            ),
        ];
        for (id, label, body, collapsed) in markup {
            fieldset.add(self.factory.build(
                FieldKind::Markup.as_str(),
                &FieldMeta::new()
                    .set(Attr::Id, id)
                    .set(Attr::Label, label)
                    .set(Attr::Value, body)
                    .set(Attr::Collapsed, collapsed),
            )?);
        }

        Ok(fieldset)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldNode, KindRegistry};

    #[test]
    fn test_markup_leaves_have_no_name() {
        let config = ModuleConfig::default();
        let registry = KindRegistry::standard();
        let tree = Composer::new(&config, &registry).compose().unwrap();

        let info = tree.children()[4].as_group().unwrap();
        let markup: Vec<_> = info
            .children()
            .iter()
            .filter_map(FieldNode::as_field)
            .filter(|f| f.kind == FieldKind::Markup)
            .collect();

        assert_eq!(markup.len(), 3);
        assert!(markup.iter().all(|f| f.name.is_none() && f.value.is_some()));
        assert_eq!(
            markup.iter().map(|f| f.collapsed).collect::<Vec<_>>(),
            vec![Collapse::Yes, Collapse::Yes, Collapse::No]
        );
    }

    #[test]
    fn test_links_follow_config() {
        let config = ModuleConfig::builder()
            .docs_href("https://docs.example.com/jumplinks")
            .assets_url("/static/pj")
            .build();
        let registry = KindRegistry::standard();
        let tree = Composer::new(&config, &registry).compose().unwrap();

        let notes = tree.find(keys::WILDCARD_CLEANING).unwrap().notes.clone().unwrap();
        assert!(notes.contains("https://docs.example.com/jumplinks/Configuration#wildcard-cleaning"));

        let donate = tree.find("supportDevelopment").unwrap();
        let body = donate.value.as_ref().and_then(Value::as_str).unwrap();
        assert!(body.contains("/static/pj/DonateButton.png"));
    }

    #[test]
    fn test_missing_markup_kind_fails_whole_compose() {
        let config = ModuleConfig::default();
        let mut registry = KindRegistry::standard();
        registry.unregister("InputfieldMarkup");

        let err = Composer::new(&config, &registry).compose().unwrap_err();
        assert!(err.is_lookup_error());
    }

    #[test]
    fn test_failed_render_registers_nothing() {
        let config = ModuleConfig::default();
        let mut registry = KindRegistry::standard();
        registry.unregister("InputfieldRadios");

        let mut ctx = RenderContext::new();
        let result = Composer::new(&config, &registry).input_fields(
            &crate::config::defaults(),
            &|_: &str| true,
            &mut ctx,
        );

        assert!(result.unwrap_err().is_lookup_error());
        assert!(ctx.scripts.is_empty());
        assert!(ctx.styles.is_empty());
        assert!(ctx.flags.is_empty());
    }
}
