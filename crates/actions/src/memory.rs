use crate::{ActionsError, Reporter};
use std::io;

/// Reporter that records every call, for exercising a run without a host.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub infos: Vec<String>,
    pub warnings: Vec<String>,
    pub failures: Vec<String>,
    pub outputs: Vec<(String, String)>,
    pub summaries: Vec<String>,
    pub masked: Vec<String>,
    reject_writes: bool,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A reporter whose output and summary writes fail with an I/O error
    pub fn rejecting_writes() -> Self {
        MemoryReporter {
            reject_writes: true,
            ..Self::default()
        }
    }

    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_failed(&self) -> bool {
        !self.failures.is_empty()
    }

    fn check_writable(&self) -> Result<(), ActionsError> {
        if self.reject_writes {
            return Err(ActionsError::IoError(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "output file is not writable",
            )));
        }
        Ok(())
    }
}

impl Reporter for MemoryReporter {
    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn fail(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<(), ActionsError> {
        self.check_writable()?;
        self.outputs.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn write_summary(&mut self, markdown: &str) -> Result<(), ActionsError> {
        self.check_writable()?;
        self.summaries.push(markdown.to_string());
        Ok(())
    }

    fn mask_secret(&mut self, secret: &str) {
        self.masked.push(secret.to_string());
    }
}
