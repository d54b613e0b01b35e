pub mod error;
pub mod gvk;
pub mod plugin;
pub mod rbac;
pub mod sample_config;
pub mod sample_flavor;
pub mod sample_phase;
pub mod text_patch;
pub mod tool_environment;

pub use error::{AppError, ResultExt};
pub use gvk::GroupVersionKind;
pub use sample_config::{SampleConfig, SampleConfigBuilder};
pub use sample_flavor::SampleFlavor;
pub use sample_phase::SamplePhase;
pub use tool_environment::ToolEnvironment;
