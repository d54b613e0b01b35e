use std::path::Path;

use crate::adapters::ScaffoldCommandAdapter;
use crate::app::{SampleContext, patch};
use crate::domain::rbac::{SCAFFOLD_RULES_MARKER, policy_roles_fragment};
use crate::domain::{AppError, ResultExt, SampleConfig, SampleFlavor, SamplePhase};
use crate::ports::ScaffoldRunner;

use super::{Sample, helm_api_args, init_args, reset_directory, sample_context};

/// Commented-out prometheus include in the default kustomize overlay.
pub const PROMETHEUS_MARKER: &str = "#- ../prometheus";

/// Kustomize overlay, relative to the sample directory.
pub const KUSTOMIZATION_FILE: &str = "config/default/kustomization.yaml";

/// Manager role, relative to the sample directory.
pub const ROLE_FILE: &str = "config/rbac/role.yaml";

/// Memcached operator backed by a Helm chart, with metrics enabled and
/// additional RBAC rules.
pub struct HelmSample<R: ScaffoldRunner = ScaffoldCommandAdapter> {
    config: SampleConfig,
    ctx: SampleContext<R>,
}

impl HelmSample {
    pub fn new(config: SampleConfig) -> Self {
        Self::with_runner(config, ScaffoldCommandAdapter::new())
    }
}

impl<R: ScaffoldRunner> HelmSample<R> {
    pub fn with_runner(config: SampleConfig, runner: R) -> Self {
        let ctx = sample_context(&config, runner);
        Self { config, ctx }
    }

    pub fn config(&self) -> &SampleConfig {
        &self.config
    }
}

impl<R: ScaffoldRunner> Sample for HelmSample<R> {
    fn flavor(&self) -> SampleFlavor {
        SampleFlavor::Helm
    }

    fn path(&self) -> &Path {
        self.ctx.dir()
    }

    fn phase(&self) -> SamplePhase {
        self.ctx.phase()
    }

    fn prepare(&mut self) -> Result<(), AppError> {
        reset_directory(&mut self.ctx, SampleFlavor::Helm)
    }

    fn run(&mut self) -> Result<(), AppError> {
        let domain = self
            .config
            .domain()
            .ok_or_else(|| AppError::config_error("Helm samples require a domain"))?;

        tracing::info!("using init command and scaffolding the project");
        let mut args = init_args(&self.config);
        args.extend(["--domain", domain]);
        self.ctx.init(&args).context("creating the project")?;

        let gvk = self.config.gvk();
        tracing::info!(%gvk, "creating helm api");
        self.ctx.create_api(&helm_api_args(gvk)).context("creating helm api")?;

        tracing::info!("enabling prometheus metrics");
        let kustomization = self.ctx.dir().join(KUSTOMIZATION_FILE);
        patch::uncomment_in_file(&kustomization, PROMETHEUS_MARKER, "#")
            .context("enabling prometheus metrics")?;

        tracing::info!("adding customized roles");
        let role = self.ctx.dir().join(ROLE_FILE);
        let fragment = policy_roles_fragment(gvk, domain)?;
        patch::replace_in_file(&role, SCAFFOLD_RULES_MARKER, &fragment)
            .context("adding customized roles")?;

        self.ctx.mark_generated();
        Ok(())
    }
}
