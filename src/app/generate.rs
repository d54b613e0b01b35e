//! Regenerate every selected sample under `<testdata>/hybrid/`.

use std::path::{Component, Path, PathBuf};

use crate::app::samples::{Sample, build_sample};
use crate::domain::{AppError, SampleConfig, SampleFlavor};
use crate::ports::ScaffoldRunner;

/// Resolved inputs for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Scaffolding binary; absolute unless it is a bare command name.
    pub binary_path: PathBuf,
    /// Root of the fixture tree, usually `<repo>/testdata`.
    pub testdata_dir: PathBuf,
    /// Flavors to generate, in generation order.
    pub flavors: Vec<SampleFlavor>,
}

impl GenerateOptions {
    /// Resolve raw flag values against `cwd`.
    ///
    /// An empty `flavors` selection means every flavor. Generation order is
    /// always go, helm, go-helm regardless of selection order.
    pub fn resolve(
        binary_path: &str,
        testdata_dir: Option<&Path>,
        flavors: &[SampleFlavor],
        cwd: &Path,
    ) -> Result<Self, AppError> {
        let binary_path = resolve_binary_path(binary_path, cwd)?;
        let testdata_dir = match testdata_dir {
            Some(dir) => absolutize(dir, cwd),
            None => cwd.join("testdata"),
        };
        let flavors = if flavors.is_empty() {
            SampleFlavor::ALL.to_vec()
        } else {
            SampleFlavor::ALL.into_iter().filter(|f| flavors.contains(f)).collect()
        };

        Ok(Self { binary_path, testdata_dir, flavors })
    }

    /// Directory holding samples of `flavor`.
    pub fn samples_path(&self, flavor: SampleFlavor) -> PathBuf {
        self.testdata_dir.join("hybrid").join(flavor.dir_name())
    }
}

/// Make a binary path with a directory component absolute.
///
/// Bare names such as `helm-operator-plugins` are left untouched so they are
/// looked up on `PATH`.
pub fn resolve_binary_path(raw: &str, cwd: &Path) -> Result<PathBuf, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::config_error("Binary path must not be empty"));
    }

    let path = Path::new(raw);
    let has_dir = raw.contains('/') || raw.contains(std::path::MAIN_SEPARATOR);
    if !has_dir {
        return Ok(path.to_path_buf());
    }
    if !cwd.is_absolute() {
        return Err(AppError::config_error(format!(
            "Failed to make binary path '{raw}' absolute: working directory {} is relative",
            cwd.display()
        )));
    }
    Ok(absolutize(path, cwd))
}

/// Join `path` onto `cwd` when relative and drop `.`/`..` segments lexically.
fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) };

    let mut clean = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                clean.pop();
            }
            other => clean.push(other.as_os_str()),
        }
    }
    clean
}

/// Construct the samples for `options`, sharing one runner.
pub fn build_samples<R>(
    options: &GenerateOptions,
    runner: R,
) -> Result<Vec<Box<dyn Sample>>, AppError>
where
    R: ScaffoldRunner + Clone + 'static,
{
    options
        .flavors
        .iter()
        .map(|&flavor| {
            let config = SampleConfig::builder(flavor)
                .binary_path(&options.binary_path)
                .samples_path(options.samples_path(flavor))
                .build()?;
            Ok(build_sample(config, runner.clone()))
        })
        .collect()
}

/// Generate every sample in order, stopping at the first failure.
///
/// Returns the generated sample directories.
pub fn execute<R>(options: &GenerateOptions, runner: R) -> Result<Vec<PathBuf>, AppError>
where
    R: ScaffoldRunner + Clone + 'static,
{
    tracing::info!(path = %options.testdata_dir.display(), "writing sample directories");

    let mut generated = Vec::new();
    for mut sample in build_samples(options, runner)? {
        tracing::info!(path = %sample.path().display(), "creating sample");
        sample.generate()?;
        generated.push(sample.path().to_path_buf());
    }
    Ok(generated)
}
