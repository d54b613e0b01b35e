//! Immutable configuration for a single sample project.

use std::path::{Path, PathBuf};

use crate::domain::plugin::DEFAULT_BINARY_PATH;
use crate::domain::{AppError, GroupVersionKind, SampleFlavor};

pub const DEFAULT_SAMPLE_NAME: &str = "memcached-operator";
pub const DEFAULT_REPO: &str = "github.com/example/memcached-operator";
pub const DEFAULT_DOMAIN: &str = "example.com";

/// Everything a sample needs to drive the scaffolding binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    flavor: SampleFlavor,
    binary_path: PathBuf,
    samples_path: PathBuf,
    sample_name: String,
    gvk: GroupVersionKind,
    secondary_gvk: Option<GroupVersionKind>,
    repo: String,
    domain: Option<String>,
}

impl SampleConfig {
    /// Start from the defaults of the given flavor.
    pub fn builder(flavor: SampleFlavor) -> SampleConfigBuilder {
        SampleConfigBuilder::new(flavor)
    }

    pub fn flavor(&self) -> SampleFlavor {
        self.flavor
    }

    /// Scaffolding binary, exactly as configured.
    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    pub fn samples_path(&self) -> &Path {
        &self.samples_path
    }

    pub fn sample_name(&self) -> &str {
        &self.sample_name
    }

    /// Primary resource. For the hybrid flavor this is the Helm API.
    pub fn gvk(&self) -> &GroupVersionKind {
        &self.gvk
    }

    /// Go API of the hybrid flavor.
    pub fn secondary_gvk(&self) -> Option<&GroupVersionKind> {
        self.secondary_gvk.as_ref()
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Working directory of the sample: `samples_path/sample_name`.
    pub fn sample_dir(&self) -> PathBuf {
        self.samples_path.join(&self.sample_name)
    }
}

/// Builder for [`SampleConfig`] seeded with per-flavor defaults.
#[derive(Debug, Clone)]
pub struct SampleConfigBuilder {
    config: SampleConfig,
}

impl SampleConfigBuilder {
    fn new(flavor: SampleFlavor) -> Self {
        let memcached = GroupVersionKind::new("cache", "v1alpha1", "Memcached");
        let (secondary_gvk, domain) = match flavor {
            SampleFlavor::Go => (None, None),
            SampleFlavor::Helm => (None, Some(DEFAULT_DOMAIN.to_string())),
            SampleFlavor::GoHelm => {
                (Some(GroupVersionKind::new("cache", "v1", "MemcachedBackup")), None)
            }
        };

        Self {
            config: SampleConfig {
                flavor,
                binary_path: PathBuf::from(DEFAULT_BINARY_PATH),
                samples_path: Path::new("testdata").join("hybrid").join(flavor.dir_name()),
                sample_name: DEFAULT_SAMPLE_NAME.to_string(),
                gvk: memcached,
                secondary_gvk,
                repo: DEFAULT_REPO.to_string(),
                domain,
            },
        }
    }

    /// Scaffolding binary. A relative path with a directory component is
    /// resolved by the OS from the sample directory, not the caller's working
    /// directory, so pass an absolute path (see `resolve_binary_path`).
    pub fn binary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.binary_path = path.into();
        self
    }

    pub fn samples_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.samples_path = path.into();
        self
    }

    pub fn sample_name(mut self, name: impl Into<String>) -> Self {
        self.config.sample_name = name.into();
        self
    }

    pub fn gvk(mut self, gvk: GroupVersionKind) -> Self {
        self.config.gvk = gvk;
        self
    }

    pub fn secondary_gvk(mut self, gvk: GroupVersionKind) -> Self {
        self.config.secondary_gvk = Some(gvk);
        self
    }

    pub fn repo(mut self, repo: impl Into<String>) -> Self {
        self.config.repo = repo.into();
        self
    }

    pub fn domain(mut self, domain: Option<String>) -> Self {
        self.config.domain = domain;
        self
    }

    pub fn build(self) -> Result<SampleConfig, AppError> {
        let config = self.config;

        if config.binary_path.as_os_str().is_empty() {
            return Err(AppError::config_error("Binary path must not be empty"));
        }
        validate_sample_name(&config.sample_name)?;
        if config.repo.trim().is_empty() {
            return Err(AppError::config_error("Repository module path must not be empty"));
        }

        match config.flavor {
            SampleFlavor::Helm if config.domain.as_deref().is_none_or(str::is_empty) => {
                return Err(AppError::config_error("Helm samples require a domain"));
            }
            SampleFlavor::GoHelm => match &config.secondary_gvk {
                None => {
                    return Err(AppError::config_error("GoHelm samples require a Go resource"));
                }
                Some(go) if *go == config.gvk => {
                    return Err(AppError::config_error(format!(
                        "GoHelm samples need distinct Helm and Go resources, both are {go}"
                    )));
                }
                Some(_) => {}
            },
            _ => {}
        }

        Ok(config)
    }
}

fn validate_sample_name(name: &str) -> Result<(), AppError> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\']);
    if !valid {
        return Err(AppError::config_error(format!(
            "Invalid sample name '{name}': must be a single directory name"
        )));
    }
    Ok(())
}
