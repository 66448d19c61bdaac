// validators crate

mod batch;
mod check;

pub use batch::{validate_all, BatchOutcome};
pub use check::{fail_run, run_check, CheckError, CheckStatus};
