// actions crate
//
// Everything that talks to the surrounding execution environment: reading
// inputs, log lines, step outputs, the job summary and the failure status.

mod commands;
mod console;
mod inputs;
mod memory;

pub use commands::{escape_data, escape_property, GithubActionsReporter};
pub use console::ConsoleReporter;
pub use inputs::ActionInputs;
pub use memory::MemoryReporter;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionsError {
    #[error("Input required and not supplied: {0}")]
    InputRequired(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unable to find environment variable for ${0}. Check if your runtime environment supports {1}.")]
    MissingEnv(&'static str, &'static str),

    #[error("Unexpected input: name or value for output '{0}' contains the delimiter")]
    DelimiterCollision(String),
}

/// The single channel through which a run reports to its host.
pub trait Reporter {
    fn info(&mut self, message: &str);

    /// A non-fatal problem; the run continues.
    fn warning(&mut self, message: &str);

    /// Mark the run as failed with `message`.
    fn fail(&mut self, message: &str);

    fn set_output(&mut self, name: &str, value: &str) -> Result<(), ActionsError>;

    /// Append markdown to the job level report.
    fn write_summary(&mut self, markdown: &str) -> Result<(), ActionsError>;

    /// Make sure `secret` never shows up in the host's logs.
    fn mask_secret(&mut self, secret: &str);
}

/// True when running inside a GitHub Actions job
pub fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}
