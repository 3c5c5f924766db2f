//! Collaborators supplied by the rendering host

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::hash::BuildHasher;

/// Client flag telling the page script it runs on the module settings screen
pub const ADMIN_FLAG: &str = "pjModuleAdmin";

/// Client flag carrying whether the companion redirects module is installed
pub const COMPANION_FLAG: &str = "pjOldRedirectsInstalled";

/// Answers whether a module is installed on the host
pub trait CapabilityQuery {
    fn is_installed(&self, module: &str) -> bool;
}

impl<F> CapabilityQuery for F
where
    F: Fn(&str) -> bool,
{
    fn is_installed(&self, module: &str) -> bool {
        self(module)
    }
}

impl<S: BuildHasher> CapabilityQuery for HashSet<String, S> {
    fn is_installed(&self, module: &str) -> bool {
        self.contains(module)
    }
}

/// Receives the page assets and client flags the settings page needs
pub trait RenderHost {
    fn add_script(&mut self, url: &str);
    fn add_style(&mut self, url: &str);
    fn publish_flag(&mut self, name: &str, value: bool);
}

/// In-memory [`RenderHost`] that records what was registered
///
/// Hosts that batch their page head can render from this after the call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub scripts: Vec<String>,
    pub styles: Vec<String>,
    pub flags: BTreeMap<String, bool>,
}

impl RenderContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a published client flag
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.flags.get(name).copied()
    }
}

impl RenderHost for RenderContext {
    fn add_script(&mut self, url: &str) {
        if !self.scripts.iter().any(|s| s == url) {
            self.scripts.push(url.to_string());
        }
    }

    fn add_style(&mut self, url: &str) {
        if !self.styles.iter().any(|s| s == url) {
            self.styles.push(url.to_string());
        }
    }

    fn publish_flag(&mut self, name: &str, value: bool) {
        self.flags.insert(name.to_string(), value);
    }
}
