use std::path::Path;

use chrono::Local;

use crate::check::{find_overdue, report_overdue};
use crate::config::{load_config, select_sections};
use crate::error::Result;
use crate::state::StateStore;
use crate::types::RunMode;
use crate::util::command::SystemRunner;

pub fn run_check_command(
    config_path: &Path,
    state_path: &Path,
    selected: &[String],
    notify: bool,
    run_mode: RunMode,
) -> Result<()> {
    let state = StateStore::new(state_path, run_mode).load();
    let sections = select_sections(load_config(config_path)?, selected)?;

    let overdue = find_overdue(&sections, &state, Local::now());
    if overdue.is_empty() {
        tracing::debug!("all {} backup(s) are up to date", sections.len());
    }
    let mut runner = SystemRunner;
    report_overdue(&overdue, notify, run_mode, &mut runner);
    Ok(())
}
