use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for sample generation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Invalid flag, path, or sample configuration.
    #[error("{0}")]
    Configuration(String),

    /// The sample working directory could not be created, removed, or used.
    #[error("Directory conflict at {}: {source}", path.display())]
    DirectoryConflict {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The scaffolding binary failed to start or exited unsuccessfully.
    #[error("External tool failed running '{command}': {details}")]
    ExternalToolFailure { command: String, details: String, stdout: String, stderr: String },

    /// Expected marker text is missing from a generated file.
    #[error("Unable to find '{target}' in {}", path.display())]
    PatchTargetNotFound { path: PathBuf, target: String },

    /// Another error annotated with what was being attempted.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn directory_conflict<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        AppError::DirectoryConflict { path: path.into(), source }
    }

    /// Wrap this error with a short description of the failed step.
    pub fn context<S: Into<String>>(self, context: S) -> Self {
        AppError::Context { context: context.into(), source: Box::new(self) }
    }

    /// The innermost error beneath any `Context` wrappers.
    pub fn root_cause(&self) -> &AppError {
        match self {
            AppError::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on filesystem semantics.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::DirectoryConflict { source, .. } => source.kind(),
            AppError::Configuration(_) => io::ErrorKind::InvalidInput,
            AppError::PatchTargetNotFound { .. } => io::ErrorKind::NotFound,
            AppError::ExternalToolFailure { .. } => io::ErrorKind::Other,
            AppError::Context { source, .. } => source.kind(),
        }
    }
}

/// Attach step context to fallible results.
pub trait ResultExt<T> {
    fn context<S: Into<String>>(self, context: S) -> Result<T, AppError>;
}

impl<T, E: Into<AppError>> ResultExt<T> for Result<T, E> {
    fn context<S: Into<String>>(self, context: S) -> Result<T, AppError> {
        self.map_err(|err| Into::<AppError>::into(err).context(context))
    }
}
