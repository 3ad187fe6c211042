use std::fmt;

use crate::config::BackupSection;
use crate::types::SectionOutcome;

/// Per-section result of one run, in configuration order. Sections the run
/// never reached stay `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    entries: Vec<(String, Option<SectionOutcome>)>,
}

impl Summary {
    pub fn new(sections: &[BackupSection]) -> Self {
        Self {
            entries: sections.iter().map(|s| (s.name.clone(), None)).collect(),
        }
    }

    pub fn record(&mut self, name: &str, outcome: SectionOutcome) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = Some(outcome);
        }
    }

    pub fn outcome(&self, name: &str) -> Option<SectionOutcome> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, outcome)| *outcome)
    }

    pub fn successes(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, outcome)| *outcome == Some(SectionOutcome::Success))
            .map(|(name, _)| name.as_str())
    }

    pub fn print(&self) {
        println!("\n--- SUMMARY ---");
        print!("{}", self);
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, outcome) in &self.entries {
            let label = outcome.map(|o| o.as_str()).unwrap_or("not done");
            writeln!(f, "{}: {}", name, label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn named(name: &str) -> BackupSection {
        BackupSection {
            name: name.to_string(),
            source: PathBuf::from("/src"),
            sub_directories: vec![PathBuf::from("a")],
            destination: PathBuf::from("/dest"),
            interval_days: None,
        }
    }

    #[test]
    fn renders_every_section_in_order() {
        let mut summary = Summary::new(&[named("docs"), named("photos"), named("music"), named("mail")]);
        summary.record("docs", SectionOutcome::Success);
        summary.record("photos", SectionOutcome::Skipped);
        summary.record("music", SectionOutcome::Failed);
        assert_eq!(
            summary.to_string(),
            "docs: done\nphotos: SKIPPED\nmusic: FAILED\nmail: not done\n"
        );
        assert_eq!(summary.successes().collect::<Vec<_>>(), vec!["docs"]);
        assert_eq!(summary.outcome("mail"), None);
    }
}
