use std::path::Path;
use std::process::Command;

use crate::util::paths::as_dir_arg;

const APP_NAME: &str = "rsync-backup";

/// Mirrors the contents of one directory into another, deleting
/// destination-only files.
pub struct Rsync<'a> {
    pub source: &'a Path,
    pub dest: &'a Path,
}

/// Desktop notification through `notify-send`.
pub struct NotifySend<'a>(pub &'a str);

impl<'a> From<Rsync<'a>> for Command {
    fn from(rsync: Rsync<'a>) -> Self {
        let mut cmd = Command::new("rsync");
        cmd.arg("-av")
            .arg("--delete")
            .arg(as_dir_arg(rsync.source))
            .arg(as_dir_arg(rsync.dest));
        cmd
    }
}

impl<'a> From<NotifySend<'a>> for Command {
    fn from(notify: NotifySend<'a>) -> Self {
        let mut cmd = Command::new("notify-send");
        cmd.arg("-u")
            .arg("critical")
            .arg("-a")
            .arg(APP_NAME)
            .arg(notify.0);
        cmd
    }
}
