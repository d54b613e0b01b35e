use std::process::Command;

use crate::domain::AppError;
use crate::ports::{ScaffoldRunner, ToolInvocation, ToolOutput};

/// Runs the scaffolding binary as a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldCommandAdapter;

impl ScaffoldCommandAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ScaffoldRunner for ScaffoldCommandAdapter {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError> {
        let command_line = invocation.command_line();
        tracing::debug!(
            command = %command_line,
            cwd = %invocation.cwd.display(),
            env = ?invocation.env.assignments(),
            "running scaffolding binary"
        );

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        command.current_dir(&invocation.cwd);
        command.envs(invocation.env.iter());

        let output = command.output().map_err(|e| AppError::ExternalToolFailure {
            command: command_line.clone(),
            details: format!("failed to start: {e}"),
            stdout: String::new(),
            stderr: String::new(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            // The scaffolding binary reports most failures on stdout.
            let combined = [stdout.trim(), stderr.trim()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            let details = if combined.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {}", output.status, combined)
            };
            return Err(AppError::ExternalToolFailure {
                command: command_line,
                details,
                stdout,
                stderr,
            });
        }

        Ok(ToolOutput { stdout, stderr })
    }
}
