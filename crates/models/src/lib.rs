use serde::{Deserialize, Serialize};
use std::fmt;

/// Confirmed registration status of a VAT number.
///
/// `Unknown` means the status could not be determined, either because the
/// remote call failed or because the service did not report one. It is kept
/// separate from `Invalid`, which is a confirmed negative answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum VatStatus {
    Valid,
    Invalid,
    #[default]
    Unknown,
}

impl From<Option<bool>> for VatStatus {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => VatStatus::Valid,
            Some(false) => VatStatus::Invalid,
            None => VatStatus::Unknown,
        }
    }
}

impl From<VatStatus> for Option<bool> {
    fn from(status: VatStatus) -> Self {
        match status {
            VatStatus::Valid => Some(true),
            VatStatus::Invalid => Some(false),
            VatStatus::Unknown => None,
        }
    }
}

/// The outcome of validating a single VAT number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// The identifier exactly as it was submitted
    pub tax_id: String,
    /// Country code reported by the service
    pub country: String,
    /// Whether the identifier is syntactically well formed
    pub format_valid: bool,
    /// Whether the identifier is an active registration
    #[serde(default)]
    pub vat_valid: VatStatus,
    /// Registered company name, when the service resolves one
    #[serde(default)]
    pub company_name: Option<String>,
}

impl ValidationResult {
    /// Build the result recorded when the remote lookup for `tax_id` failed.
    ///
    /// The country falls back to the first two characters of the identifier,
    /// which may be shorter (or empty) for very short input.
    pub fn fallback(tax_id: &str) -> Self {
        ValidationResult {
            tax_id: tax_id.to_string(),
            country: tax_id.chars().take(2).collect(),
            format_valid: false,
            vat_valid: VatStatus::Unknown,
            company_name: None,
        }
    }

    pub fn classification(&self) -> Classification {
        if self.vat_valid == VatStatus::Valid {
            Classification::Valid
        } else if self.format_valid {
            Classification::FormatOnly
        } else {
            Classification::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        self.vat_valid == VatStatus::Valid
    }

    /// A result counts as invalid when either the format check or the
    /// registration check came back negative.
    ///
    /// The service is trusted to only confirm well formed numbers; a
    /// `format_valid: false, vat_valid: true` answer counts as both valid and
    /// invalid.
    pub fn is_invalid(&self) -> bool {
        !self.format_valid || self.vat_valid == VatStatus::Invalid
    }
}

/// Human readable verdict for a single result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Valid,
    FormatOnly,
    Invalid,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Valid => write!(f, "valid"),
            Classification::FormatOnly => write!(f, "format ok, VAT not confirmed"),
            Classification::Invalid => write!(f, "invalid"),
        }
    }
}

/// Aggregate counts over a batch of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationSummary {
    pub valid_count: usize,
    pub invalid_count: usize,
    pub unclassified_count: usize,
    pub total: usize,
}

impl ValidationSummary {
    pub fn from_results(results: &[ValidationResult]) -> Self {
        ValidationSummary {
            valid_count: results.iter().filter(|r| r.is_valid()).count(),
            invalid_count: results.iter().filter(|r| r.is_invalid()).count(),
            unclassified_count: results
                .iter()
                .filter(|r| !r.is_valid() && !r.is_invalid())
                .count(),
            total: results.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(format_valid: bool, vat_valid: VatStatus) -> ValidationResult {
        ValidationResult {
            tax_id: "DE123456789".to_string(),
            country: "DE".to_string(),
            format_valid,
            vat_valid,
            company_name: None,
        }
    }

    #[test]
    fn test_vat_status_serializes_as_nullable_bool() {
        assert_eq!(serde_json::to_value(VatStatus::Valid).unwrap(), json!(true));
        assert_eq!(serde_json::to_value(VatStatus::Invalid).unwrap(), json!(false));
        assert_eq!(serde_json::to_value(VatStatus::Unknown).unwrap(), json!(null));
    }

    #[test]
    fn test_deserialize_api_response() {
        let body = r#"{
            "tax_id": "FR987654321",
            "country": "FR",
            "format_valid": true,
            "vat_valid": false,
            "company_name": "ACME SARL",
            "checked_at": "2024-01-01T00:00:00Z"
        }"#;

        let parsed: ValidationResult = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.tax_id, "FR987654321");
        assert_eq!(parsed.vat_valid, VatStatus::Invalid);
        assert_eq!(parsed.company_name.as_deref(), Some("ACME SARL"));
    }

    #[test]
    fn test_missing_vat_valid_is_unknown() {
        let body = r#"{"tax_id": "NL1", "country": "NL", "format_valid": true}"#;
        let parsed: ValidationResult = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.vat_valid, VatStatus::Unknown);
        assert_eq!(parsed.company_name, None);
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let body = r#"{"tax_id": "NL1", "format_valid": true}"#;
        assert!(serde_json::from_str::<ValidationResult>(body).is_err());
    }

    #[test]
    fn test_fallback_result() {
        let fallback = ValidationResult::fallback("XX000000000");
        assert_eq!(
            serde_json::to_value(&fallback).unwrap(),
            json!({
                "tax_id": "XX000000000",
                "country": "XX",
                "format_valid": false,
                "vat_valid": null,
                "company_name": null
            })
        );
    }

    #[test]
    fn test_fallback_country_for_short_identifiers() {
        assert_eq!(ValidationResult::fallback("D").country, "D");
        assert_eq!(ValidationResult::fallback("").country, "");
    }

    #[test]
    fn test_classification() {
        assert_eq!(
            result(true, VatStatus::Valid).classification(),
            Classification::Valid
        );
        assert_eq!(
            result(true, VatStatus::Invalid).classification(),
            Classification::FormatOnly
        );
        assert_eq!(
            result(true, VatStatus::Unknown).classification(),
            Classification::FormatOnly
        );
        assert_eq!(
            result(false, VatStatus::Invalid).classification(),
            Classification::Invalid
        );
        assert_eq!(
            Classification::FormatOnly.to_string(),
            "format ok, VAT not confirmed"
        );
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            result(true, VatStatus::Valid),
            result(true, VatStatus::Invalid),
            result(false, VatStatus::Unknown),
            result(true, VatStatus::Unknown),
        ];

        let summary = ValidationSummary::from_results(&results);
        assert_eq!(summary.valid_count, 1);
        assert_eq!(summary.invalid_count, 2);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.unclassified_count, 1);
    }

    #[test]
    fn test_valid_and_invalid_overlap_only_on_inconsistent_data() {
        let statuses = [VatStatus::Valid, VatStatus::Invalid, VatStatus::Unknown];
        for format_valid in [true, false] {
            for vat_valid in statuses {
                let r = result(format_valid, vat_valid);
                let inconsistent = !format_valid && vat_valid == VatStatus::Valid;
                assert_eq!(
                    r.is_valid() && r.is_invalid(),
                    inconsistent,
                    "format_valid={} vat_valid={:?}",
                    format_valid,
                    vat_valid
                );
            }
        }
    }

    #[test]
    fn test_confirmed_number_with_bad_format_counts_as_invalid() {
        let summary = ValidationSummary::from_results(&[result(false, VatStatus::Valid)]);
        assert_eq!(summary.valid_count, 1);
        assert_eq!(summary.invalid_count, 1);
        assert_eq!(summary.unclassified_count, 0);
        assert_eq!(summary.total, 1);
    }
}
