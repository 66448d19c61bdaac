use crate::{ActionsError, Reporter};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Escape the data part of a workflow command
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Reporter speaking the GitHub Actions runner protocol.
///
/// Log lines and workflow commands go to `out` (stdout on a real runner).
/// Outputs are appended to the `GITHUB_OUTPUT` file when the runner provides
/// one, and the job summary to `GITHUB_STEP_SUMMARY`.
pub struct GithubActionsReporter<W: Write = io::Stdout> {
    out: W,
    output_file: Option<PathBuf>,
    summary_file: Option<PathBuf>,
}

impl GithubActionsReporter<io::Stdout> {
    pub fn from_env() -> Self {
        Self::new(
            io::stdout(),
            env_path("GITHUB_OUTPUT"),
            env_path("GITHUB_STEP_SUMMARY"),
        )
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

impl<W: Write> GithubActionsReporter<W> {
    pub fn new(out: W, output_file: Option<PathBuf>, summary_file: Option<PathBuf>) -> Self {
        GithubActionsReporter {
            out,
            output_file,
            summary_file,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one line to the command stream. A failed write cannot be
    /// reported to the runner, so it goes to the local log instead.
    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            logging::error(&format!("Failed to write to the runner: {}", e));
        }
    }

    fn issue_command(&mut self, command: &str, message: &str) {
        self.write_line(&format!("::{}::{}", command, escape_data(message)));
    }
}

fn append(path: &Path, content: &str) -> Result<(), ActionsError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// `name<<delimiter` heredoc entry understood by the runner's file commands
fn file_command_entry(name: &str, value: &str) -> Result<String, ActionsError> {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());

    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(ActionsError::DelimiterCollision(name.to_string()));
    }

    Ok(format!(
        "{}<<{}\n{}\n{}\n",
        name, delimiter, value, delimiter
    ))
}

impl<W: Write> Reporter for GithubActionsReporter<W> {
    fn info(&mut self, message: &str) {
        self.write_line(message);
    }

    fn warning(&mut self, message: &str) {
        self.issue_command("warning", message);
    }

    fn fail(&mut self, message: &str) {
        self.issue_command("error", message);
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<(), ActionsError> {
        match &self.output_file {
            Some(path) => append(path, &file_command_entry(name, value)?),
            None => {
                // Runners without file commands still accept the legacy form
                writeln!(self.out)?;
                writeln!(
                    self.out,
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(value)
                )?;
                Ok(())
            }
        }
    }

    fn write_summary(&mut self, markdown: &str) -> Result<(), ActionsError> {
        let path = self
            .summary_file
            .as_ref()
            .ok_or(ActionsError::MissingEnv("GITHUB_STEP_SUMMARY", "job summaries"))?;
        append(path, markdown)
    }

    fn mask_secret(&mut self, secret: &str) {
        if !secret.is_empty() {
            self.issue_command("add-mask", secret);
        }
    }
}
