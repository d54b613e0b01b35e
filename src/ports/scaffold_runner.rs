use std::path::PathBuf;

use crate::domain::{AppError, ToolEnvironment};

/// One execution of the scaffolding binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub env: ToolEnvironment,
}

impl ToolInvocation {
    /// Shell-like rendering used in logs and error messages.
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Captured output of a successful invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs the scaffolding binary and waits for it to exit.
pub trait ScaffoldRunner {
    /// Execute `invocation`, returning `AppError::ExternalToolFailure` when the
    /// process cannot be started or exits unsuccessfully.
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError>;
}
