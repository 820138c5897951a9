pub mod cli;
pub mod output;

pub use cli::Cli;
pub use output::ConsoleOutput;
