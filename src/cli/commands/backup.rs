use std::path::Path;

use chrono::Local;

use crate::backup::run_backup;
use crate::config::{load_config, select_sections};
use crate::error::Result;
use crate::signal_handler::CancelFlag;
use crate::state::StateStore;
use crate::types::RunMode;
use crate::util::command::SystemRunner;

pub fn run_backup_command(
    config_path: &Path,
    state_path: &Path,
    selected: &[String],
    run_mode: RunMode,
    cancel: &CancelFlag,
) -> Result<()> {
    println!("{}", Local::now().format("%d-%m-%Y %H:%M"));

    let sections = select_sections(load_config(config_path)?, selected)?;
    if run_mode.verbose {
        println!(
            "loaded config {} with {} backup(s)",
            config_path.display(),
            sections.len()
        );
    }

    let store = StateStore::new(state_path, run_mode);
    let mut runner = SystemRunner;
    run_backup(&sections, &store, run_mode, &mut runner, cancel)?;

    println!("{}", Local::now().format("%d-%m-%Y %H:%M"));
    Ok(())
}
