use crate::batch::validate_all;
use actions::{ActionInputs, ActionsError, Reporter};
use client::VatValidator;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("No VAT numbers provided")]
    NoVatNumbers,

    #[error("Failed to serialize results: {0}")]
    SerializeError(#[from] serde_json::Error),

    #[error(transparent)]
    Actions(#[from] ActionsError),
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Passed,
    Failed(String),
}

impl CheckStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckStatus::Passed)
    }
}

/// Report a fatal error and mark the run as failed.
pub fn fail_run<R: Reporter + ?Sized>(reporter: &mut R, error: &CheckError) -> CheckStatus {
    let message = match error {
        CheckError::NoVatNumbers => error.to_string(),
        other => format!("Action failed: {}", other),
    };
    reporter.fail(&message);
    CheckStatus::Failed(message)
}

/// Validate the configured numbers and publish outputs and the job summary.
///
/// Per-number lookup failures are absorbed by the batch. Only an empty
/// input list or a failure to publish the results ends the run early, in
/// which case no further outputs are written.
pub async fn run_check<V, R>(inputs: &ActionInputs, validator: &V, reporter: &mut R) -> CheckStatus
where
    V: VatValidator + ?Sized,
    R: Reporter + ?Sized,
{
    match execute(inputs, validator, reporter).await {
        Ok(status) => status,
        Err(e) => fail_run(reporter, &e),
    }
}

async fn execute<V, R>(
    inputs: &ActionInputs,
    validator: &V,
    reporter: &mut R,
) -> Result<CheckStatus, CheckError>
where
    V: VatValidator + ?Sized,
    R: Reporter + ?Sized,
{
    let vat_numbers = parser::parse_vat_numbers(&inputs.vat_numbers);
    if vat_numbers.is_empty() {
        return Err(CheckError::NoVatNumbers);
    }

    let outcome = validate_all(validator, reporter, &vat_numbers).await;
    let summary = outcome.summary;
    let table = report::build_summary_table(&outcome.results);

    reporter.set_output("results", &serde_json::to_string(&outcome.results)?)?;
    reporter.set_output("valid-count", &summary.valid_count.to_string())?;
    reporter.set_output("invalid-count", &summary.invalid_count.to_string())?;
    reporter.set_output("summary", &table)?;

    reporter.write_summary(&report::job_summary_markdown(&outcome.results, &summary))?;
    reporter.info(&report::summary_line(&summary));

    if inputs.fail_on_invalid && summary.invalid_count > 0 {
        let message = format!("{} VAT number(s) are invalid", summary.invalid_count);
        reporter.fail(&message);
        return Ok(CheckStatus::Failed(message));
    }

    Ok(CheckStatus::Passed)
}
