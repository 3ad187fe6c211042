use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{BackupSection, Config};
use crate::error::{ConfigError, Result};
use crate::util::paths::{expand_home, path_has_parent_dir};

pub fn load_config(path: &Path) -> Result<Vec<BackupSection>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;
    let cfg: Config =
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
    let home = dirs::home_dir();
    let sections = parse_sections(cfg, home.as_deref())?;
    tracing::debug!(
        "loaded config {} with {} section(s)",
        path.display(),
        sections.len()
    );
    Ok(sections)
}

fn parse_sections(cfg: Config, home: Option<&Path>) -> Result<Vec<BackupSection>> {
    let mut sections = Vec::new();
    let mut names = HashSet::new();

    for section in cfg.backups {
        if section.name.trim().is_empty() {
            return Err(ConfigError::Invalid("backup name is required".to_string()).into());
        }
        if !names.insert(section.name.clone()) {
            return Err(ConfigError::Invalid(format!("duplicate backup name {}", section.name)).into());
        }
        if section.src.trim().is_empty() {
            return Err(invalid(&section.name, "src path is empty"));
        }
        if section.dest.trim().is_empty() {
            return Err(invalid(&section.name, "dest path is empty"));
        }
        if section.every_days == Some(0) {
            return Err(invalid(&section.name, "everyDays must be at least 1"));
        }
        let mut sub_directories = Vec::new();
        for sub in &section.src_dirs {
            let sub_path = PathBuf::from(sub);
            if sub.trim().is_empty() {
                return Err(invalid(&section.name, "srcDirs entry is empty"));
            }
            if sub_path.is_absolute() {
                return Err(invalid(
                    &section.name,
                    &format!("srcDirs entry {} must be relative", sub),
                ));
            }
            if path_has_parent_dir(&sub_path) {
                return Err(invalid(
                    &section.name,
                    &format!("srcDirs entry {} must not contain ..", sub),
                ));
            }
            sub_directories.push(sub_path);
        }
        sections.push(BackupSection {
            name: section.name,
            source: expand_home(section.src.trim(), home),
            sub_directories,
            destination: expand_home(section.dest.trim(), home),
            interval_days: section.every_days,
        });
    }

    Ok(sections)
}

fn invalid(name: &str, msg: &str) -> crate::error::RsyncBackupError {
    ConfigError::Invalid(format!("backup {}: {}", name, msg)).into()
}

/// Narrows `sections` to the requested names, keeping configuration order.
/// An empty selection keeps everything.
pub fn select_sections(
    sections: Vec<BackupSection>,
    selected: &[String],
) -> Result<Vec<BackupSection>> {
    if selected.is_empty() {
        return Ok(sections);
    }
    for name in selected {
        if !sections.iter().any(|s| &s.name == name) {
            return Err(ConfigError::Invalid(format!("no such backup {}", name)).into());
        }
    }
    Ok(sections
        .into_iter()
        .filter(|s| selected.contains(&s.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RsyncBackupError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(yaml: &str) -> Result<Vec<BackupSection>> {
        let cfg: Config = serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        parse_sections(cfg, Some(Path::new("/home/alice")))
    }

    fn assert_invalid(yaml: &str, needle: &str) {
        match parse(yaml) {
            Err(RsyncBackupError::Config(ConfigError::Invalid(msg))) => {
                assert!(msg.contains(needle), "unexpected message {msg}")
            }
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn load_config_from_file() {
        let mut file = NamedTempFile::new().expect("tempfile");
        let yaml = r#"
backups:
  - name: "docs"
    src: "/srv/docs"
    srcDirs: ["a", "b"]
    dest: "/mnt/backup"
    everyDays: 7
  - name: "music"
    src: "/srv/music"
    srcDirs: ["flac"]
    dest: "/mnt/music"
"#;
        file.write_all(yaml.as_bytes()).expect("write");
        let sections = load_config(file.path()).expect("load");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "docs");
        assert_eq!(
            sections[0].sub_directories,
            vec![PathBuf::from("a"), PathBuf::from("b")]
        );
        assert_eq!(sections[0].interval_days, Some(7));
        assert_eq!(sections[1].name, "music");
        assert_eq!(sections[1].interval_days, None);
    }

    #[test]
    fn home_relative_paths_are_expanded() {
        let sections = parse(
            r#"
backups:
  - name: "docs"
    src: "~/docs"
    srcDirs: ["a"]
    dest: "~/backup"
"#,
        )
        .expect("parse");
        assert_eq!(sections[0].source, PathBuf::from("/home/alice/docs"));
        assert_eq!(sections[0].destination, PathBuf::from("/home/alice/backup"));
    }

    #[test]
    fn missing_required_field_is_a_parse_error() {
        let err = parse(
            r#"
backups:
  - name: "docs"
    src: "/srv/docs"
    dest: "/mnt/backup"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, RsyncBackupError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn unreadable_file_is_a_config_error() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let err = load_config(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, RsyncBackupError::Config(ConfigError::Read(_))));
    }

    #[test]
    fn rejects_invalid_sections() {
        assert_invalid(
            r#"
backups:
  - { name: "docs", src: "/a", srcDirs: ["x"], dest: "/b" }
  - { name: "docs", src: "/c", srcDirs: ["y"], dest: "/d" }
"#,
            "duplicate backup name docs",
        );
        assert_invalid(
            r#"
backups:
  - { name: "docs", src: "/a", srcDirs: ["/etc"], dest: "/b" }
"#,
            "must be relative",
        );
        assert_invalid(
            r#"
backups:
  - { name: "docs", src: "/a", srcDirs: ["x/../../y"], dest: "/b" }
"#,
            "must not contain ..",
        );
        assert_invalid(
            r#"
backups:
  - { name: "docs", src: "/a", srcDirs: ["x"], dest: "/b", everyDays: 0 }
"#,
            "everyDays",
        );
        assert_invalid(
            r#"
backups:
  - { name: "docs", src: "", srcDirs: ["x"], dest: "/b" }
"#,
            "src path is empty",
        );
    }

    #[test]
    fn select_sections_keeps_config_order() {
        let sections = parse(
            r#"
backups:
  - { name: "a", src: "/a", srcDirs: ["x"], dest: "/b" }
  - { name: "b", src: "/a", srcDirs: ["x"], dest: "/b" }
  - { name: "c", src: "/a", srcDirs: ["x"], dest: "/b" }
"#,
        )
        .expect("parse");
        let picked = select_sections(sections.clone(), &["c".to_string(), "a".to_string()])
            .expect("select");
        let names: Vec<_> = picked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);

        let err = select_sections(sections, &["zzz".to_string()]).unwrap_err();
        assert!(matches!(err, RsyncBackupError::Config(ConfigError::Invalid(_))));
    }
}
