use crate::{ActionsError, Reporter};
use colored::Colorize;

/// Reporter for running outside of a GitHub Actions job.
///
/// Log lines go through the `logging` crate; outputs and the job summary
/// are printed to stdout so a local run shows everything a workflow would
/// have received.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    secrets: Vec<String>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn redact(&self, message: &str) -> String {
        self.secrets
            .iter()
            .fold(message.to_string(), |acc, secret| acc.replace(secret.as_str(), "***"))
    }
}

impl Reporter for ConsoleReporter {
    fn info(&mut self, message: &str) {
        logging::info(&self.redact(message));
    }

    fn warning(&mut self, message: &str) {
        logging::warning(&self.redact(message));
    }

    fn fail(&mut self, message: &str) {
        logging::error(&self.redact(message));
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<(), ActionsError> {
        println!("{}={}", name.cyan().bold(), self.redact(value));
        Ok(())
    }

    fn write_summary(&mut self, markdown: &str) -> Result<(), ActionsError> {
        println!("\n{}", self.redact(markdown));
        Ok(())
    }

    fn mask_secret(&mut self, secret: &str) {
        if !secret.is_empty() {
            self.secrets.push(secret.to_string());
        }
    }
}
