use std::collections::BTreeMap;

pub const GO111MODULE: &str = "GO111MODULE";
pub const KUBECONFIG: &str = "KUBECONFIG";

/// Value that cannot resolve to a cluster. The scaffolding binary falls back to
/// static default RBAC rules when discovery fails, which keeps output stable
/// across machines.
pub const BROKEN_KUBECONFIG: &str = "broken_so_we_generate_static_default_rules";

/// Environment overrides applied on top of the inherited environment for a
/// single scaffolding invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolEnvironment {
    vars: BTreeMap<String, String>,
}

impl ToolEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides used for every sample: module mode on, cluster unreachable.
    pub fn deterministic() -> Self {
        Self::new().with(GO111MODULE, "on").with(KUBECONFIG, BROKEN_KUBECONFIG)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `KEY=value` assignments, sorted by key.
    pub fn assignments(&self) -> Vec<String> {
        self.iter().map(|(k, v)| format!("{k}={v}")).collect()
    }
}
