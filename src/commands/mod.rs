// Command implementations, one module per subcommand.

pub mod details;
pub mod due;
pub mod invalidate;
pub mod projects;
pub mod rebuild;
pub mod tasks;
