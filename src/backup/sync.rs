use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::command::Rsync;
use crate::config::BackupSection;
use crate::error::SectionError;
use crate::signal_handler::CancelFlag;
use crate::types::{RunMode, SectionOutcome};
use crate::util::command::{run_command, CommandRunner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

/// Mirrors every sub-directory of `section` in order, stopping at the first
/// one that cannot be completed.
pub fn sync_section(
    section: &BackupSection,
    run_mode: RunMode,
    runner: &mut dyn CommandRunner,
    cancel: &CancelFlag,
) -> Result<SectionOutcome, Interrupted> {
    match mirror_sub_directories(section, run_mode, runner, cancel) {
        Ok(()) => Ok(SectionOutcome::Success),
        Err(SectionError::Interrupted) => Err(Interrupted),
        Err(SectionError::DestinationUnavailable(dest)) => {
            println!(
                "WARNING: skipping unavailable destination : {}",
                dest.display()
            );
            Ok(SectionOutcome::Skipped)
        }
        Err(err) => {
            println!("ERROR: backup {} failed: {}", section.name, err);
            Ok(SectionOutcome::Failed)
        }
    }
}

fn mirror_sub_directories(
    section: &BackupSection,
    run_mode: RunMode,
    runner: &mut dyn CommandRunner,
    cancel: &CancelFlag,
) -> Result<(), SectionError> {
    for sub in &section.sub_directories {
        if cancel.is_cancelled() {
            return Err(SectionError::Interrupted);
        }
        let dest = ensure_dest(&section.destination, sub, run_mode)?;
        let source = section.source.join(sub);
        let mut cmd: Command = Rsync {
            source: &source,
            dest: &dest,
        }
        .into();
        let code = run_command(&mut cmd, run_mode, runner)
            .map_err(|e| SectionError::Tool(e.to_string()))?;
        if code != 0 {
            return Err(SectionError::Tool(format!(
                "error executing rsync: {}",
                code
            )));
        }
    }
    Ok(())
}

fn ensure_dest(root: &Path, sub: &Path, run_mode: RunMode) -> Result<PathBuf, SectionError> {
    if !root.is_dir() {
        return Err(SectionError::DestinationUnavailable(root.to_path_buf()));
    }
    let path = root.join(sub);
    if !path.is_dir() {
        println!("mkdir -p {}", path.display());
        if !run_mode.dry_run {
            fs::create_dir_all(&path).map_err(|source| SectionError::CreateDestination {
                path: path.clone(),
                source,
            })?;
        }
    }
    Ok(path)
}
