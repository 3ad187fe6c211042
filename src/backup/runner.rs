use chrono::Local;

use crate::backup::summary::Summary;
use crate::backup::sync::{sync_section, Interrupted};
use crate::config::BackupSection;
use crate::error::Result;
use crate::signal_handler::CancelFlag;
use crate::state::{BackupState, StateStore};
use crate::types::RunMode;
use crate::util::command::CommandRunner;

#[derive(Debug, Clone)]
pub struct BackupRun {
    pub summary: Summary,
    pub interrupted: bool,
}

/// Runs every section in order. A section's failure never stops the others;
/// only an interrupt ends the loop early.
pub fn run_sections(
    sections: &[BackupSection],
    run_mode: RunMode,
    runner: &mut dyn CommandRunner,
    cancel: &CancelFlag,
) -> BackupRun {
    let mut summary = Summary::new(sections);
    for section in sections {
        if cancel.is_cancelled() {
            return BackupRun {
                summary,
                interrupted: true,
            };
        }
        println!("Backup {}:", section.name);
        match sync_section(section, run_mode, runner, cancel) {
            Ok(outcome) => summary.record(&section.name, outcome),
            Err(Interrupted) => {
                return BackupRun {
                    summary,
                    interrupted: true,
                }
            }
        }
    }
    BackupRun {
        summary,
        interrupted: cancel.is_cancelled(),
    }
}

/// Stamps every successful section of `summary` with `timestamp`.
pub fn record_successes(
    state: &mut BackupState,
    summary: &Summary,
    timestamp: chrono::DateTime<Local>,
) -> usize {
    let mut recorded = 0;
    for name in summary.successes() {
        state.record_success(name, timestamp);
        recorded += 1;
    }
    recorded
}

/// Full backup pass: mirror, print the summary, then persist the new
/// timestamps. An interrupted pass prints what it has and writes nothing.
pub fn run_backup(
    sections: &[BackupSection],
    store: &StateStore,
    run_mode: RunMode,
    runner: &mut dyn CommandRunner,
    cancel: &CancelFlag,
) -> Result<BackupRun> {
    let mut state = store.load();
    let run = run_sections(sections, run_mode, runner, cancel);
    if run.interrupted {
        println!("ctrl-c received: aborted");
        run.summary.print();
        return Ok(run);
    }
    run.summary.print();

    let recorded = record_successes(&mut state, &run.summary, Local::now());
    tracing::debug!("recording {} successful backup(s)", recorded);
    store.save(&state)?;
    Ok(run)
}
