//! Sample projects generated into `testdata/`.
//!
//! Each sample follows the same lifecycle: `prepare` wipes and recreates its
//! working directory, `run` drives the scaffolding binary inside it, and
//! `generate` does both. Only `run` is meant to be reused against an
//! externally prepared directory.

mod go;
mod go_helm;
mod helm;

use std::path::Path;

use crate::app::SampleContext;
use crate::domain::plugin::{GO_PLUGIN, HELM_PLUGIN, HYBRID_PLUGIN};
use crate::domain::{
    AppError, GroupVersionKind, ResultExt, SampleConfig, SampleFlavor, SamplePhase, ToolEnvironment,
};
use crate::ports::ScaffoldRunner;

pub use go::GoSample;
pub use go_helm::GoHelmSample;
pub use helm::HelmSample;

/// A sample project that can be regenerated from scratch.
pub trait Sample {
    fn flavor(&self) -> SampleFlavor;

    /// Directory the sample is generated into.
    fn path(&self) -> &Path;

    fn phase(&self) -> SamplePhase;

    /// Remove any previous output and recreate an empty working directory.
    fn prepare(&mut self) -> Result<(), AppError>;

    /// Scaffold the project into the prepared directory.
    fn run(&mut self) -> Result<(), AppError>;

    fn generate(&mut self) -> Result<(), AppError> {
        self.prepare()?;
        self.run()
    }
}

/// Build the sample matching `config.flavor()`.
pub fn build_sample<R>(config: SampleConfig, runner: R) -> Box<dyn Sample>
where
    R: ScaffoldRunner + 'static,
{
    match config.flavor() {
        SampleFlavor::Go => Box::new(GoSample::with_runner(config, runner)),
        SampleFlavor::Helm => Box::new(HelmSample::with_runner(config, runner)),
        SampleFlavor::GoHelm => Box::new(GoHelmSample::with_runner(config, runner)),
    }
}

fn sample_context<R: ScaffoldRunner>(config: &SampleConfig, runner: R) -> SampleContext<R> {
    SampleContext::new(
        config.binary_path(),
        config.sample_dir(),
        ToolEnvironment::deterministic(),
        runner,
    )
}

/// Shared `prepare` body: best-effort destroy, then create.
fn reset_directory<R: ScaffoldRunner>(
    ctx: &mut SampleContext<R>,
    flavor: SampleFlavor,
) -> Result<(), AppError> {
    tracing::info!("destroying directory for memcached {} samples", flavor.display_name());
    if let Err(err) = ctx.destroy() {
        tracing::warn!(
            path = %ctx.dir().display(),
            error = %err,
            "failed to remove sample directory"
        );
    }

    tracing::info!(path = %ctx.dir().display(), "creating directory");
    ctx.prepare().context("creating directory")
}

/// `init` arguments shared by every flavor.
fn init_args(config: &SampleConfig) -> Vec<&str> {
    vec!["--plugins", HYBRID_PLUGIN, "--repo", config.repo()]
}

/// `create api` arguments for a Go API with controller scaffolding.
fn go_api_args(gvk: &GroupVersionKind) -> Vec<&str> {
    let mut args = vec!["--plugins", GO_PLUGIN];
    args.extend(gvk.create_api_args());
    args.extend(["--resource", "--controller"]);
    args
}

/// `create api` arguments for a Helm-chart API.
fn helm_api_args(gvk: &GroupVersionKind) -> Vec<&str> {
    let mut args = vec!["--plugins", HELM_PLUGIN];
    args.extend(gvk.create_api_args());
    args
}
