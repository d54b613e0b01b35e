use std::fs::{self, OpenOptions};
use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{ScaffoldRunner, ToolInvocation, ToolOutput};

const DEFAULT_KUSTOMIZATION: &str = "\
resources:
- ../crd
- ../rbac
- ../manager
#- ../prometheus
";

const DEFAULT_ROLE: &str = "\
---
apiVersion: rbac.authorization.k8s.io/v1
kind: ClusterRole
metadata:
  name: manager-role
rules:
- apiGroups:
  - \"\"
  resources:
  - secrets
  verbs:
  - get
#+kubebuilder:scaffold:rules
";

/// In-process stand-in for the scaffolding binary.
///
/// Records every invocation and writes a minimal project: `init` creates the
/// kustomize overlay and manager role, `create api` appends `<plugin> <kind>`
/// to `PROJECT`.
#[derive(Debug, Clone)]
pub struct FakeScaffoldRunner {
    invocations: Arc<Mutex<Vec<ToolInvocation>>>,
    fail_on: Option<String>,
    kustomization: String,
    role: String,
}

impl Default for FakeScaffoldRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeScaffoldRunner {
    pub fn new() -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            fail_on: None,
            kustomization: DEFAULT_KUSTOMIZATION.to_string(),
            role: DEFAULT_ROLE.to_string(),
        }
    }

    /// Fail every invocation whose first argument is `subcommand`.
    pub fn failing_on(mut self, subcommand: &str) -> Self {
        self.fail_on = Some(subcommand.to_string());
        self
    }

    pub fn with_kustomization(mut self, content: &str) -> Self {
        self.kustomization = content.to_string();
        self
    }

    pub fn with_role(mut self, content: &str) -> Self {
        self.role = content.to_string();
        self
    }

    pub fn invocations(&self) -> Vec<ToolInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// Arguments of each invocation joined by spaces.
    pub fn recorded_args(&self) -> Vec<String> {
        self.invocations().iter().map(|i| i.args.join(" ")).collect()
    }
}

impl ScaffoldRunner for FakeScaffoldRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());

        let subcommand = invocation.args.first().map(String::as_str).unwrap_or_default();
        if self.fail_on.as_deref() == Some(subcommand) {
            return Err(AppError::ExternalToolFailure {
                command: invocation.command_line(),
                details: "exit status: 1: simulated failure".to_string(),
                stdout: String::new(),
                stderr: "simulated failure\n".to_string(),
            });
        }

        let plugins = flag_value(&invocation.args, "--plugins").unwrap_or_default();
        let dir = &invocation.cwd;
        match subcommand {
            "init" => {
                fs::create_dir_all(dir.join("config/default"))?;
                fs::create_dir_all(dir.join("config/rbac"))?;
                fs::write(dir.join("config/default/kustomization.yaml"), &self.kustomization)?;
                fs::write(dir.join("config/rbac/role.yaml"), &self.role)?;
                fs::write(dir.join("PROJECT"), format!("layout: {plugins}\n"))?;
            }
            "create" => {
                let kind = flag_value(&invocation.args, "--kind").unwrap_or_default();
                let mut project = OpenOptions::new().append(true).open(dir.join("PROJECT"))?;
                writeln!(project, "{plugins} {kind}")?;
            }
            _ => {}
        }

        Ok(ToolOutput::default())
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter().position(|a| a == flag).and_then(|i| args.get(i + 1)).map(String::as_str)
}
