mod fake_scaffold_runner;

pub use fake_scaffold_runner::FakeScaffoldRunner;
