use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use crate::cli::args::Cli;
use crate::cli::commands::{backup, check};
use crate::signal_handler::{signal_handler, CancelFlag};
use crate::types::RunMode;
use crate::util::paths::{default_config_path, default_state_path};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const LICENSE_NAME: &str = "GNU GPL v3 or later";

pub mod args;
pub mod commands;

pub fn run() -> Result<()> {
    let cli = parse_cli();
    init_tracing(cli.verbose);

    if cli.help {
        print_banner();
        print_help();
        return Ok(());
    }
    if cli.version {
        print_banner();
        println!("License: {}", LICENSE_NAME);
        return Ok(());
    }

    let run_mode = RunMode {
        dry_run: cli.dry_run,
        verbose: cli.verbose,
    };
    // Run-level failures are reported, not turned into an exit status.
    if cli.check_need_backup {
        if let Err(err) = run_check(&cli, run_mode) {
            tracing::error!("Error checking backup state: {}", err);
        }
        return Ok(());
    }

    let cancel = CancelFlag::new();
    signal_handler(&cancel);
    if let Err(err) = run_backup(&cli, run_mode, &cancel) {
        tracing::error!("Error executing backup: {}", err);
    }
    Ok(())
}

fn run_check(cli: &Cli, run_mode: RunMode) -> crate::error::Result<()> {
    let config_path = resolve(cli.config.as_deref(), default_config_path)?;
    let state_path = resolve(cli.state.as_deref(), default_state_path)?;
    check::run_check_command(
        &config_path,
        &state_path,
        &cli.section,
        cli.use_notify_send,
        run_mode,
    )
}

fn run_backup(cli: &Cli, run_mode: RunMode, cancel: &CancelFlag) -> crate::error::Result<()> {
    let config_path = resolve(cli.config.as_deref(), default_config_path)?;
    let state_path = resolve(cli.state.as_deref(), default_state_path)?;
    backup::run_backup_command(&config_path, &state_path, &cli.section, run_mode, cancel)
}

fn resolve(
    explicit: Option<&Path>,
    default: fn() -> crate::error::Result<PathBuf>,
) -> crate::error::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default(),
    }
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if err.kind() == ErrorKind::UnknownArgument {
                if let Some(arg) = err.context().find_map(|c| {
                    if let clap::error::ContextKind::InvalidArg = c.0 {
                        Some(c.1.to_string())
                    } else {
                        None
                    }
                }) {
                    println!("unknown option {}", arg);
                    std::process::exit(2);
                }
            }
            println!("{}", err);
            std::process::exit(2);
        }
    }
}

fn print_banner() {
    println!("rsync-backup {}", VERSION);
}

fn print_help() {
    println!("Usage:");
    println!("  rsync-backup [options]");
    println!("  rsync-backup --check-need-backup [--use-notify-send] [options]");
    println!();
    println!("Options:");
    println!("  --dry-run              Print commands, change nothing");
    println!("  --check-need-backup    Report backups older than their everyDays");
    println!("  --use-notify-send      Also raise a desktop notification (check mode)");
    println!("  --config <path>        Config file (default ~/.rsync-backup/config.yaml)");
    println!("  --state <path>         State file (default ~/.rsync-backup/state.yaml)");
    println!("  --section <name>       Only handle the named backup(s)");
    println!("  --verbose              Verbose logging");
    println!("  --version              Print version");
}

fn init_tracing(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(if verbose { "debug" } else { "info" })
        .try_init();
}
