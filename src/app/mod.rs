pub mod cli;
mod context;
pub mod generate;
pub mod patch;
pub mod samples;

pub use context::SampleContext;
