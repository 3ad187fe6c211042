use std::io;
use std::process::Command;

use crate::error::{Result, RsyncBackupError};
use crate::types::RunMode;

/// Executes a prepared command and reports its exit code.
pub trait CommandRunner {
    fn status(&mut self, cmd: &mut Command) -> io::Result<i32>;
}

pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn status(&mut self, cmd: &mut Command) -> io::Result<i32> {
        let status = cmd.status()?;
        Ok(status.code().unwrap_or(1))
    }
}

pub fn command_line(cmd: &Command) -> String {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<String> = cmd
        .get_args()
        .map(|a| a.to_string_lossy().to_string())
        .collect();
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Echoes the command, then runs it unless this is a dry run.
pub fn run_command(
    cmd: &mut Command,
    run_mode: RunMode,
    runner: &mut dyn CommandRunner,
) -> Result<i32> {
    println!("{}", command_line(cmd));
    if run_mode.dry_run {
        return Ok(0);
    }
    runner.status(cmd).map_err(|e| {
        RsyncBackupError::message(format!("{}: {}", cmd.get_program().to_string_lossy(), e))
    })
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingRunner;
    use super::*;

    #[test]
    fn dry_run_does_not_invoke_runner() {
        let mut runner = RecordingRunner::with_exit_codes(&[5]);
        let mut cmd = Command::new("rsync");
        cmd.arg("-av");
        let run_mode = RunMode {
            dry_run: true,
            verbose: false,
        };
        let code = run_command(&mut cmd, run_mode, &mut runner).expect("dry run");
        assert_eq!(code, 0);
        assert!(runner.calls.is_empty());
    }

    #[test]
    fn spawn_failure_names_the_program() {
        let mut runner = RecordingRunner::new().failing_spawn();
        let mut cmd = Command::new("rsync");
        let err = run_command(&mut cmd, RunMode::default(), &mut runner).unwrap_err();
        assert!(err.to_string().starts_with("rsync: "));
    }

    #[test]
    fn command_line_joins_arguments() {
        let mut cmd = Command::new("rsync");
        cmd.arg("-av").arg("--delete");
        assert_eq!(command_line(&cmd), "rsync -av --delete");
        assert_eq!(command_line(&Command::new("sync")), "sync");
    }
}
