use std::process::ExitCode;

use field_validator::cli::run;

fn main() -> ExitCode {
    match run() {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
