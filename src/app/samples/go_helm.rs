use std::path::Path;

use crate::adapters::ScaffoldCommandAdapter;
use crate::app::SampleContext;
use crate::domain::{AppError, ResultExt, SampleConfig, SampleFlavor, SamplePhase};
use crate::ports::ScaffoldRunner;

use super::{Sample, go_api_args, helm_api_args, init_args, reset_directory, sample_context};

/// Memcached operator mixing a Helm API with a second, Go-based API.
///
/// The Helm API is created first; the hybrid plugin expects the Go API to be
/// layered on top of an existing Helm project.
pub struct GoHelmSample<R: ScaffoldRunner = ScaffoldCommandAdapter> {
    config: SampleConfig,
    ctx: SampleContext<R>,
}

impl GoHelmSample {
    pub fn new(config: SampleConfig) -> Self {
        Self::with_runner(config, ScaffoldCommandAdapter::new())
    }
}

impl<R: ScaffoldRunner> GoHelmSample<R> {
    pub fn with_runner(config: SampleConfig, runner: R) -> Self {
        let ctx = sample_context(&config, runner);
        Self { config, ctx }
    }

    pub fn config(&self) -> &SampleConfig {
        &self.config
    }
}

impl<R: ScaffoldRunner> Sample for GoHelmSample<R> {
    fn flavor(&self) -> SampleFlavor {
        SampleFlavor::GoHelm
    }

    fn path(&self) -> &Path {
        self.ctx.dir()
    }

    fn phase(&self) -> SamplePhase {
        self.ctx.phase()
    }

    fn prepare(&mut self) -> Result<(), AppError> {
        reset_directory(&mut self.ctx, SampleFlavor::GoHelm)
    }

    fn run(&mut self) -> Result<(), AppError> {
        let helm_gvk = self.config.gvk();
        let go_gvk = self
            .config
            .secondary_gvk()
            .ok_or_else(|| AppError::config_error("GoHelm samples require a Go resource"))?;

        tracing::info!("using init command and scaffolding the project");
        self.ctx.init(&init_args(&self.config)).context("creating the project")?;

        tracing::info!(gvk = %helm_gvk, "creating helm api");
        self.ctx.create_api(&helm_api_args(helm_gvk)).context("creating helm api")?;

        tracing::info!(gvk = %go_gvk, "creating go api");
        self.ctx.create_api(&go_api_args(go_gvk)).context("creating go api")?;

        self.ctx.mark_generated();
        Ok(())
    }
}
