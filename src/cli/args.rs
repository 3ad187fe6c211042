use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rsync-backup", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    #[arg(long)]
    pub dry_run: bool,
    #[arg(long)]
    pub check_need_backup: bool,
    #[arg(long)]
    pub use_notify_send: bool,
    #[arg(long, short = 'v')]
    pub verbose: bool,

    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub state: Option<PathBuf>,
    #[arg(long)]
    pub section: Vec<String>,

    #[arg(long, short = 'h')]
    pub help: bool,
    #[arg(long)]
    pub version: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_plain_backup() {
        let cli = Cli::try_parse_from(["rsync-backup"]).expect("parse");
        assert!(!cli.dry_run);
        assert!(!cli.check_need_backup);
        assert!(!cli.use_notify_send);
        assert!(cli.section.is_empty());
        assert!(cli.config.is_none());
    }

    #[test]
    fn check_mode_flags() {
        let cli = Cli::try_parse_from([
            "rsync-backup",
            "--check-need-backup",
            "--use-notify-send",
            "--dry-run",
            "--section",
            "docs",
            "--section",
            "photos",
            "--state",
            "/tmp/state.yaml",
        ])
        .expect("parse");
        assert!(cli.check_need_backup);
        assert!(cli.use_notify_send);
        assert!(cli.dry_run);
        assert_eq!(cli.section, vec!["docs".to_string(), "photos".to_string()]);
        assert_eq!(cli.state, Some(PathBuf::from("/tmp/state.yaml")));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["rsync-backup", "--everything"]).is_err());
    }
}
