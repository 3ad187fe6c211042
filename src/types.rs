use std::fmt;

#[derive(Debug, Clone, Copy, Default)]
pub struct RunMode {
    pub dry_run: bool,
    pub verbose: bool,
}

/// Result of mirroring one section in the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOutcome {
    /// Every sub-directory was mirrored.
    Success,
    /// The destination root was missing.
    Skipped,
    /// The tool failed on a sub-directory; the rest were not attempted.
    Failed,
}

impl SectionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionOutcome::Success => "done",
            SectionOutcome::Skipped => "SKIPPED",
            SectionOutcome::Failed => "FAILED",
        }
    }
}

impl fmt::Display for SectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
