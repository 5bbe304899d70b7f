use anyhow::{anyhow, Context, Result};
use std::ffi::OsStr;
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// Runs a command to completion and captures its output.
///
/// ### Arguments
/// - `program` - the program to execute
/// - `arguments` - the arguments passed to the program
///
/// ### Returns
/// - `Output` - the exit status together with the captured stdout and stderr
pub fn run_command<I: IntoIterator<Item = S>, S: AsRef<OsStr>>(
    program: &str,
    arguments: I,
) -> Result<Output> {
    let mut command = Command::new(program);
    command
        .args(arguments)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    debug!("Running command: {command:?}");

    command
        .output()
        .with_context(|| format!("failed to execute command '{program}'"))
}

/// Runs a command and returns its stdout, failing if the command exits with a non-zero status.
///
/// ### Arguments
/// - `program` - the program to execute
/// - `arguments` - the arguments passed to the program
///
/// ### Returns
/// - `String` - the (lossily decoded) stdout of the command
pub fn run_command_checked<I: IntoIterator<Item = S>, S: AsRef<OsStr>>(
    program: &str,
    arguments: I,
) -> Result<String> {
    let output = run_command(program, arguments)?;

    if !output.status.success() {
        return Err(anyhow!(
            "'{program}' exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(all(test, unix))]
mod tests {
    use super::{run_command, run_command_checked};

    #[test]
    fn test_captures_stdout() {
        let stdout = run_command_checked("echo", ["status: active"]).unwrap();

        assert_eq!(stdout.trim(), "status: active");
    }

    #[test]
    fn test_non_zero_exit_is_an_error() {
        let err = run_command_checked("sh", ["-c", "echo broken >&2; exit 3"]).unwrap_err();

        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_unchecked_run_keeps_failed_status() {
        let output = run_command("sh", ["-c", "exit 1"]).unwrap();

        assert!(!output.status.success());
    }

    #[test]
    fn test_missing_program_is_an_error() {
        assert!(run_command("dnsetter-no-such-program", ["x"]).is_err());
    }
}
