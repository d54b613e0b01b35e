/// Lifecycle position of a sample's working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplePhase {
    /// Directory not yet created by this process.
    #[default]
    Unprepared,
    /// Directory exists and is empty.
    Prepared,
    /// Scaffolding (and any patches) completed.
    Generated,
}
