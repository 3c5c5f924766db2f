//! Common test utilities for jumplinks-config integration tests
//!
//! Provides shared fixtures and helper functions.

#![allow(dead_code)]

use jumplinks_config::{
    Composer, FieldGroup, KindRegistry, ModuleConfig, RenderContext, defaults,
};
use serde_json::{Map, Value};
use std::collections::HashSet;

// =============================================================================
// Test Fixtures
// =============================================================================

/// Test fixture holding a module config, a kind registry and the installed module list
pub struct TestFixture {
    pub config: ModuleConfig,
    pub registry: KindRegistry,
    pub installed: HashSet<String>,
}

impl TestFixture {
    /// Create a new test fixture with default configuration
    pub fn new() -> Self {
        init_logging();
        Self {
            config: ModuleConfig::default(),
            registry: KindRegistry::standard(),
            installed: HashSet::new(),
        }
    }

    /// Create a fixture where the companion redirects module is installed
    pub fn with_companion() -> Self {
        let mut fixture = Self::new();
        fixture.installed.insert("ProcessRedirects".to_string());
        fixture
    }

    pub fn composer(&self) -> Composer<'_, KindRegistry> {
        Composer::new(&self.config, &self.registry)
    }

    /// Compose the tree without values
    pub fn compose(&self) -> FieldGroup {
        self.composer().compose().expect("Failed to compose settings tree")
    }

    /// Run the full render entry point against the given persisted values
    pub fn render(&self, persisted: Value) -> (FieldGroup, RenderContext) {
        let values = self.config.merge_persisted(object(persisted));
        let mut ctx = RenderContext::new();
        let tree = self
            .composer()
            .input_fields(&values, &self.installed, &mut ctx)
            .expect("Failed to render settings page");
        (tree, ctx)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Initialize env_logger once for the test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Unwrap a JSON object literal into a map
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Defaults with a handful of keys overridden
pub fn defaults_with(overrides: Value) -> Map<String, Value> {
    let mut values = defaults();
    values.extend(object(overrides));
    values
}
