use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Shell script standing in for `helm-operator-plugins`.
///
/// Every call appends its arguments to `calls.log` and its working directory
/// plus relevant environment to `env.log`. Setting `FAKE_TOOL_FAIL_ON=<subcommand>`
/// makes that subcommand exit 3, reporting on stderr, or on stdout when
/// `FAKE_TOOL_FAIL_STREAM=stdout`.
pub struct FakeTool {
    pub path: PathBuf,
    pub calls_log: PathBuf,
    pub env_log: PathBuf,
}

impl FakeTool {
    pub fn install(bin_dir: &Path, log_dir: &Path) -> Self {
        fs::create_dir_all(bin_dir).expect("Failed to create bin dir");
        fs::create_dir_all(log_dir).expect("Failed to create log dir");
        let path = bin_dir.join("fake-tool");
        let calls_log = log_dir.join("calls.log");
        let env_log = log_dir.join("env.log");

        let script = format!(
            r##"#!/bin/sh
echo "$*" >> "{calls}"
echo "cwd=$(pwd) GO111MODULE=$GO111MODULE KUBECONFIG=$KUBECONFIG" >> "{env}"

if [ -n "$FAKE_TOOL_FAIL_ON" ] && [ "$1" = "$FAKE_TOOL_FAIL_ON" ]; then
    if [ "$FAKE_TOOL_FAIL_STREAM" = "stdout" ]; then
        echo "FATA unable to scaffold: go.mod missing"
    else
        echo "fake tool refused $1" >&2
    fi
    exit 3
fi

sub="$1"
plugins=""
kind=""
while [ $# -gt 0 ]; do
    case "$1" in
        --plugins) plugins="$2"; shift ;;
        --kind) kind="$2"; shift ;;
    esac
    shift
done

case "$sub" in
    init)
        mkdir -p config/default config/rbac
        cat > config/default/kustomization.yaml <<'YAML'
resources:
- ../crd
- ../rbac
- ../manager
#- ../prometheus
YAML
        cat > config/rbac/role.yaml <<'YAML'
---
apiVersion: rbac.authorization.k8s.io/v1
kind: ClusterRole
metadata:
  name: manager-role
rules:
- apiGroups:
  - ""
  resources:
  - secrets
  verbs:
  - get
#+kubebuilder:scaffold:rules
YAML
        echo "layout: $plugins" > PROJECT
        ;;
    create)
        echo "$plugins $kind" >> PROJECT
        mkdir -p "apis/$kind"
        echo "plugin: $plugins" > "apis/$kind/scaffold.txt"
        ;;
esac
exit 0
"##,
            calls = calls_log.display(),
            env = env_log.display(),
        );

        fs::write(&path, script).expect("Failed to write fake tool script");
        let mut perms = fs::metadata(&path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to set permissions");

        Self { path, calls_log, env_log }
    }

    pub fn calls(&self) -> Vec<String> {
        read_lines(&self.calls_log)
    }

    pub fn env_lines(&self) -> Vec<String> {
        read_lines(&self.env_log)
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path).unwrap_or_default().lines().map(str::to_owned).collect()
}
