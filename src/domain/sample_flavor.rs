use std::fmt;

use clap::ValueEnum;

/// The kinds of hybrid sample projects that can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum SampleFlavor {
    /// Go API with a controller.
    Go,
    /// Helm-chart API with customized RBAC.
    Helm,
    /// Helm API followed by a Go API in one project.
    GoHelm,
}

impl SampleFlavor {
    /// All flavors in generation order.
    pub const ALL: [SampleFlavor; 3] = [SampleFlavor::Go, SampleFlavor::Helm, SampleFlavor::GoHelm];

    /// Directory under `testdata/hybrid/` holding samples of this flavor.
    pub fn dir_name(self) -> &'static str {
        match self {
            SampleFlavor::Go => "go",
            SampleFlavor::Helm => "helm",
            SampleFlavor::GoHelm => "go-helm",
        }
    }

    /// Human-readable label used in log lines.
    pub fn display_name(self) -> &'static str {
        match self {
            SampleFlavor::Go => "Go",
            SampleFlavor::Helm => "Helm",
            SampleFlavor::GoHelm => "GoHelm",
        }
    }
}

impl fmt::Display for SampleFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
