// parser crate

/// Split the raw `vat-numbers` input into the identifiers to check.
///
/// Lines are trimmed and blank lines dropped. Order is preserved and
/// repeated identifiers are kept, so each one is checked (and reported) as
/// many times as it was listed. An empty result is the caller's problem to
/// report.
pub fn parse_vat_numbers(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Boolean action inputs are only enabled by the exact string `true`.
pub fn parse_bool_input(raw: Option<&str>) -> bool {
    matches!(raw.map(str::trim), Some("true"))
}
