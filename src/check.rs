use std::process::Command;

use chrono::{DateTime, Duration, Local};

use crate::command::NotifySend;
use crate::config::BackupSection;
use crate::state::BackupState;
use crate::types::RunMode;
use crate::util::command::{run_command, CommandRunner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdueSection {
    pub name: String,
    pub last_success: Option<DateTime<Local>>,
}

impl OverdueSection {
    pub fn message(&self) -> String {
        format!("backup {} is outdated: need to backup now!", self.name)
    }
}

/// A section that never succeeded is always overdue. Without an interval it
/// is never overdue otherwise, nor when its due date lies beyond what a
/// timestamp can represent.
pub fn is_overdue(
    last_success: Option<DateTime<Local>>,
    interval_days: Option<u32>,
    now: DateTime<Local>,
) -> bool {
    match (last_success, interval_days) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(last), Some(days)) => Duration::try_days(i64::from(days))
            .and_then(|interval| last.checked_add_signed(interval))
            .map_or(false, |due| due < now),
    }
}

pub fn find_overdue(
    sections: &[BackupSection],
    state: &BackupState,
    now: DateTime<Local>,
) -> Vec<OverdueSection> {
    sections
        .iter()
        .filter_map(|section| {
            let last_success = state.last_success(&section.name);
            is_overdue(last_success, section.interval_days, now).then(|| OverdueSection {
                name: section.name.clone(),
                last_success,
            })
        })
        .collect()
}

/// Prints each overdue section and, when `notify` is set, raises a desktop
/// notification for it. Notification failures are logged and skipped.
pub fn report_overdue(
    overdue: &[OverdueSection],
    notify: bool,
    run_mode: RunMode,
    runner: &mut dyn CommandRunner,
) {
    for section in overdue {
        let message = section.message();
        println!("{}", message);
        if !notify {
            continue;
        }
        let mut cmd: Command = NotifySend(&message).into();
        match run_command(&mut cmd, run_mode, runner) {
            Ok(0) => {}
            Ok(code) => tracing::warn!(
                "notify-send for {} exited with status {}",
                section.name,
                code
            ),
            Err(err) => tracing::warn!("notification for {} failed: {}", section.name, err),
        }
    }
}
