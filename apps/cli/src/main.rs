use std::process::ExitCode;

use manywords::RunOutcome;

fn main() -> anyhow::Result<ExitCode> {
    match manywords::run()? {
        RunOutcome::Studied(_) => Ok(ExitCode::SUCCESS),
        RunOutcome::Rejected(_) => Ok(ExitCode::FAILURE),
    }
}
