//! Parlance CLI entrypoint.
//!
//! Renders messages from the bundle described by a configuration file and
//! lists the languages each country serves.

use clap::Parser;
use parlance_cli::cli::Cli;
use parlance_cli::commands::run;
use parlance_cli::error::Result;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort reporting; ignore write failures.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlance_cli::error::CliError;

    #[test]
    fn exit_code_for_run_result_returns_zero_on_success() {
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Ok(()), &mut stderr);
        assert_eq!(exit_code, 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn exit_code_for_run_result_prints_error_and_returns_one() {
        let err = CliError::UnknownCountry {
            country: "DE".to_owned(),
        };

        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Err(err), &mut stderr);
        assert_eq!(exit_code, 1);

        let stderr_text =
            String::from_utf8(stderr).unwrap_or_else(|error| panic!("stderr was not UTF-8: {error}"));
        assert!(stderr_text.contains("country `DE` has no registered languages"));
    }
}
