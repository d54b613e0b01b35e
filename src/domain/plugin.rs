//! Plugin identifiers understood by the scaffolding binary.

/// Project layout combining Go and Helm APIs.
pub const HYBRID_PLUGIN: &str = "hybrid/v1-alpha";

/// Go API with kubebuilder controller scaffolding.
pub const GO_PLUGIN: &str = "base.go.kubebuilder.io/v3";

/// Helm-chart backed API.
pub const HELM_PLUGIN: &str = "base.helm.sdk.operatorframework.io/v1";

/// Default location of the scaffolding binary, relative to the repository root.
pub const DEFAULT_BINARY_PATH: &str = "bin/helm-operator-plugins";
