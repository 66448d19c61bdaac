use actions::{ActionInputs, ConsoleReporter, GithubActionsReporter, Reporter};
use clap::Parser;
use client::VericorpClient;
use validators::{CheckError, CheckStatus};

#[derive(Debug, Parser)]
#[command(
    name = "vatcheck",
    about = "Validate VAT numbers against the VeriCorp API",
    version,
    long_about = "Validates a list of VAT numbers against the VeriCorp API and reports a summary.\n\nInside a GitHub Actions job the inputs come from the action's `with:` block and results are\npublished as step outputs and a job summary. Locally everything is printed to the console.\n\nExamples:\n  vatcheck --vat-numbers DE123456789 --api-key $RAPIDAPI_KEY\n  vatcheck --vat-numbers \"$(cat vat-numbers.txt)\" --api-key $RAPIDAPI_KEY --fail-on-invalid true"
)]
struct Vatcheck {
    /// VAT numbers to validate, one per line
    #[arg(long, env = "INPUT_VAT-NUMBERS")]
    vat_numbers: Option<String>,

    /// RapidAPI key for the VeriCorp API
    #[arg(long, env = "INPUT_API-KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Exit with a failure when any number is invalid (enabled only by "true")
    #[arg(long, env = "INPUT_FAIL-ON-INVALID")]
    fail_on_invalid: Option<String>,

    /// Base URL of the validation API
    #[arg(long, env = "VERICORP_API_URL", default_value = client::DEFAULT_BASE_URL)]
    api_url: String,

    /// Only show warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Show debug output
    #[arg(short, long)]
    debug: bool,
}

async fn run<R: Reporter>(cli: Vatcheck, reporter: &mut R) -> CheckStatus {
    let inputs = match ActionInputs::resolve(cli.vat_numbers, cli.api_key, cli.fail_on_invalid) {
        Ok(inputs) => inputs,
        Err(e) => return validators::fail_run(reporter, &CheckError::from(e)),
    };

    reporter.mask_secret(&inputs.api_key);
    logging::debug(&format!("Using validation API at {}", cli.api_url));

    let client = VericorpClient::with_base_url(inputs.api_key.clone(), &cli.api_url);
    validators::run_check(&inputs, &client, reporter).await
}

#[tokio::main]
async fn main() {
    let cli = Vatcheck::parse();

    logging::set_log_level(logging::LogLevel::from_flags(cli.quiet, cli.debug));

    let status = if actions::is_github_actions() {
        run(cli, &mut GithubActionsReporter::from_env()).await
    } else {
        logging::debug("Not running inside GitHub Actions, reporting to the console");
        run(cli, &mut ConsoleReporter::new()).await
    };

    if !status.is_success() {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Vatcheck::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Vatcheck::try_parse_from([
            "vatcheck",
            "--vat-numbers",
            "DE123456789\nFR987654321",
            "--api-key",
            "key",
            "--fail-on-invalid",
            "true",
            "--api-url",
            "http://localhost:8080",
            "-q",
        ])
        .unwrap();

        assert_eq!(cli.vat_numbers.as_deref(), Some("DE123456789\nFR987654321"));
        assert_eq!(cli.fail_on_invalid.as_deref(), Some("true"));
        assert_eq!(cli.api_url, "http://localhost:8080");
        assert!(cli.quiet);
        assert!(!cli.debug);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_the_run() {
        let cli = Vatcheck {
            vat_numbers: Some("DE123456789".to_string()),
            api_key: None,
            fail_on_invalid: None,
            api_url: client::DEFAULT_BASE_URL.to_string(),
            quiet: false,
            debug: false,
        };
        let mut reporter = actions::MemoryReporter::new();

        let status = run(cli, &mut reporter).await;

        assert_eq!(
            status,
            CheckStatus::Failed("Action failed: Input required and not supplied: api-key".to_string())
        );
        assert!(reporter.outputs.is_empty());
        assert!(reporter.masked.is_empty());
    }
}
