use crate::ActionsError;
use std::fmt;

/// Resolved action inputs.
pub struct ActionInputs {
    /// Raw multi-line `vat-numbers` input, not yet split
    pub vat_numbers: String,
    pub api_key: String,
    pub fail_on_invalid: bool,
}

impl fmt::Debug for ActionInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionInputs")
            .field("vat_numbers", &self.vat_numbers)
            .field("api_key", &"<redacted>")
            .field("fail_on_invalid", &self.fail_on_invalid)
            .finish()
    }
}

impl ActionInputs {
    /// Check required inputs as the runner hands them over.
    ///
    /// `vat-numbers` only has to be present: an empty list is reported later
    /// as "No VAT numbers provided". `api-key` must be present and non-blank.
    pub fn resolve(
        vat_numbers: Option<String>,
        api_key: Option<String>,
        fail_on_invalid: Option<String>,
    ) -> Result<Self, ActionsError> {
        let vat_numbers = vat_numbers.ok_or(ActionsError::InputRequired("vat-numbers"))?;

        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ActionsError::InputRequired("api-key"))?;

        Ok(ActionInputs {
            vat_numbers,
            api_key,
            fail_on_invalid: parser::parse_bool_input(fail_on_invalid.as_deref()),
        })
    }
}
