//! Extra RBAC rules spliced into the Helm sample's manager role.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, GroupVersionKind};

/// Marker left by the scaffolding binary where further rules may be added.
pub const SCAFFOLD_RULES_MARKER: &str = "#+kubebuilder:scaffold:rules";

/// Rules granted on top of the scaffolded defaults. Only the header comment is
/// parameterized; the marker is re-inserted after the rules.
const POLICY_ROLES_TEMPLATE: &str = r#"
##
## Rules customized for {{ group }}.{{ domain }}/{{ version }}, Kind: {{ kind }}
##
- apiGroups:
  - policy
  resources:
  - events
  - poddisruptionbudgets
  verbs:
  - create
  - delete
  - get
  - list
  - patch
  - update
  - watch
- apiGroups:
  - ""
  resources:
  - serviceaccounts
  - services
  verbs:
  - create
  - delete
  - get
  - list
  - patch
  - update
  - watch
#+kubebuilder:scaffold:rules
"#;

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Render the policy fragment for the given resource and project domain.
pub fn policy_roles_fragment(gvk: &GroupVersionKind, domain: &str) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env
    });

    env.render_str(
        POLICY_ROLES_TEMPLATE,
        context! {
            group => gvk.group(),
            domain => domain,
            version => gvk.version(),
            kind => gvk.kind(),
        },
    )
    .map_err(|err| AppError::config_error(format!("Failed to render RBAC policy fragment: {err}")))
}
