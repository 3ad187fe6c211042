use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub backups: Vec<SectionConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SectionConfig {
    pub name: String,
    pub src: String,
    #[serde(rename = "srcDirs")]
    pub src_dirs: Vec<String>,
    pub dest: String,
    #[serde(default, rename = "everyDays", skip_serializing_if = "Option::is_none")]
    pub every_days: Option<u32>,
}

/// One named unit of work: each entry of `sub_directories` is mirrored from
/// `source` into `destination` on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupSection {
    pub name: String,
    pub source: PathBuf,
    pub sub_directories: Vec<PathBuf>,
    pub destination: PathBuf,
    pub interval_days: Option<u32>,
}
