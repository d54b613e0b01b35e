use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, SamplePhase, ToolEnvironment};
use crate::ports::{ScaffoldRunner, ToolInvocation, ToolOutput};

/// Working directory and scaffolding binary for one sample.
///
/// Every invocation runs inside `dir` with `env` layered over the inherited
/// environment; the generator's own environment is never modified.
#[derive(Debug, Clone)]
pub struct SampleContext<R: ScaffoldRunner> {
    dir: PathBuf,
    binary_path: PathBuf,
    env: ToolEnvironment,
    runner: R,
    phase: SamplePhase,
}

impl<R: ScaffoldRunner> SampleContext<R> {
    pub fn new(
        binary_path: impl Into<PathBuf>,
        dir: impl Into<PathBuf>,
        env: ToolEnvironment,
        runner: R,
    ) -> Self {
        Self {
            dir: dir.into(),
            binary_path: binary_path.into(),
            env,
            runner,
            phase: SamplePhase::Unprepared,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    pub fn env(&self) -> &ToolEnvironment {
        &self.env
    }

    pub fn phase(&self) -> SamplePhase {
        self.phase
    }

    /// Create the working directory. It must not exist yet.
    pub fn prepare(&mut self) -> Result<(), AppError> {
        if self.dir.exists() {
            return Err(AppError::directory_conflict(
                &self.dir,
                io::Error::new(io::ErrorKind::AlreadyExists, "sample directory already exists"),
            ));
        }
        if let Some(parent) = self.dir.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::directory_conflict(parent, e))?;
        }
        fs::create_dir(&self.dir).map_err(|e| AppError::directory_conflict(&self.dir, e))?;

        self.phase = SamplePhase::Prepared;
        Ok(())
    }

    /// Remove the working directory tree. Absent directories are not an error.
    pub fn destroy(&mut self) -> Result<(), AppError> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(AppError::directory_conflict(&self.dir, e)),
        }
        self.phase = SamplePhase::Unprepared;
        Ok(())
    }

    /// `<binary> init <args>`
    pub fn init(&self, args: &[&str]) -> Result<ToolOutput, AppError> {
        self.invoke(&["init"], args)
    }

    /// `<binary> create api <args>`
    pub fn create_api(&self, args: &[&str]) -> Result<ToolOutput, AppError> {
        self.invoke(&["create", "api"], args)
    }

    pub(crate) fn mark_generated(&mut self) {
        self.phase = SamplePhase::Generated;
    }

    fn invoke(&self, subcommand: &[&str], args: &[&str]) -> Result<ToolOutput, AppError> {
        if !self.dir.is_dir() {
            return Err(AppError::directory_conflict(
                &self.dir,
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "sample directory does not exist; prepare the sample first",
                ),
            ));
        }

        let invocation = ToolInvocation {
            program: self.binary_path.clone(),
            args: subcommand.iter().chain(args).map(|a| a.to_string()).collect(),
            cwd: self.dir.clone(),
            env: self.env.clone(),
        };
        self.runner.run(&invocation)
    }
}
