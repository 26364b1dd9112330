//! Command execution utilities

use crate::error::{Result, WinfetchError};
use std::env;
use std::process::Command;

/// Execute a command and return stdout as String
pub fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program).args(args).output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(WinfetchError::Detection(format!(
            "Command '{}' failed with exit code: {:?}",
            program,
            output.status.code()
        )))
    }
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    let Some(path) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&path).any(|dir| {
        let full_path = dir.join(program);
        full_path.is_file() || (cfg!(windows) && full_path.with_extension("exe").is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_an_error() {
        assert!(run_command("winfetch-definitely-not-a-command", &[]).is_err());
        assert!(!command_exists("winfetch-definitely-not-a-command"));
    }

    #[cfg(unix)]
    #[test]
    fn captures_trimmed_stdout() {
        assert_eq!(run_command("echo", &["  hi  "]).unwrap(), "hi");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_detection_error() {
        let err = run_command("false", &[]).unwrap_err();
        assert!(matches!(err, WinfetchError::Detection(_)));
    }
}
