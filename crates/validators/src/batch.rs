use actions::Reporter;
use client::VatValidator;
use models::{ValidationResult, ValidationSummary};

/// Results of one batch, in input order, plus their counts
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub results: Vec<ValidationResult>,
    pub summary: ValidationSummary,
}

/// Look up a single number, substituting the fallback result on failure.
async fn check_one<V, R>(validator: &V, reporter: &mut R, tax_id: &str) -> ValidationResult
where
    V: VatValidator + ?Sized,
    R: Reporter + ?Sized,
{
    reporter.info(&format!("  Checking {}...", tax_id));

    match validator.validate(tax_id).await {
        Ok(result) => {
            reporter.info(&format!("  {}: {}", tax_id, result.classification()));
            result
        }
        Err(e) => {
            reporter.warning(&format!("Failed to validate {}: {}", tax_id, e));
            ValidationResult::fallback(tax_id)
        }
    }
}

/// Validate every number in order, one request at a time.
///
/// A failed lookup never stops the batch; it is reported as a warning and
/// recorded with the fallback result.
pub async fn validate_all<V, R>(validator: &V, reporter: &mut R, vat_numbers: &[String]) -> BatchOutcome
where
    V: VatValidator + ?Sized,
    R: Reporter + ?Sized,
{
    reporter.info(&format!("Validating {} VAT number(s)...", vat_numbers.len()));

    let mut results = Vec::with_capacity(vat_numbers.len());
    for tax_id in vat_numbers {
        results.push(check_one(validator, reporter, tax_id).await);
    }

    let summary = ValidationSummary::from_results(&results);
    BatchOutcome { results, summary }
}
