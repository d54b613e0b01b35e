mod scaffold_command;

pub use scaffold_command::ScaffoldCommandAdapter;
