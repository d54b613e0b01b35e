use std::path::Path;

use crate::adapters::ScaffoldCommandAdapter;
use crate::app::SampleContext;
use crate::domain::{AppError, ResultExt, SampleConfig, SampleFlavor, SamplePhase};
use crate::ports::ScaffoldRunner;

use super::{Sample, go_api_args, init_args, reset_directory, sample_context};

/// Memcached operator with a single Go API and controller.
pub struct GoSample<R: ScaffoldRunner = ScaffoldCommandAdapter> {
    config: SampleConfig,
    ctx: SampleContext<R>,
}

impl GoSample {
    pub fn new(config: SampleConfig) -> Self {
        Self::with_runner(config, ScaffoldCommandAdapter::new())
    }
}

impl<R: ScaffoldRunner> GoSample<R> {
    pub fn with_runner(config: SampleConfig, runner: R) -> Self {
        let ctx = sample_context(&config, runner);
        Self { config, ctx }
    }

    pub fn config(&self) -> &SampleConfig {
        &self.config
    }
}

impl<R: ScaffoldRunner> Sample for GoSample<R> {
    fn flavor(&self) -> SampleFlavor {
        SampleFlavor::Go
    }

    fn path(&self) -> &Path {
        self.ctx.dir()
    }

    fn phase(&self) -> SamplePhase {
        self.ctx.phase()
    }

    fn prepare(&mut self) -> Result<(), AppError> {
        reset_directory(&mut self.ctx, SampleFlavor::Go)
    }

    fn run(&mut self) -> Result<(), AppError> {
        tracing::info!("using init command and scaffolding the project");
        self.ctx.init(&init_args(&self.config)).context("creating the project")?;

        let gvk = self.config.gvk();
        tracing::info!(%gvk, "creating go api");
        self.ctx.create_api(&go_api_args(gvk)).context("creating go api")?;

        self.ctx.mark_generated();
        Ok(())
    }
}
