mod scaffold_runner;

pub use scaffold_runner::{ScaffoldRunner, ToolInvocation, ToolOutput};
