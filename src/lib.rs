//! samplegen: regenerate the hybrid operator sample fixtures under `testdata/`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use adapters::ScaffoldCommandAdapter;

pub use app::generate::GenerateOptions;
pub use app::samples::{GoHelmSample, GoSample, HelmSample, Sample};
pub use app::SampleContext;
pub use domain::{AppError, GroupVersionKind, SampleConfig, SampleFlavor, SamplePhase};

/// Generate every sample selected by `options` using the scaffolding binary.
///
/// Samples are generated one after another; the first failure aborts the run
/// so a partial fixture set is never reported as success. Returns the sample
/// directories in generation order.
pub fn generate_testdata(options: &GenerateOptions) -> Result<Vec<PathBuf>, AppError> {
    app::generate::execute(options, ScaffoldCommandAdapter::new())
}
