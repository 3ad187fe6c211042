pub mod runner;
pub mod summary;
pub mod sync;

pub use runner::{run_backup, BackupRun};
pub use summary::Summary;
pub use sync::sync_section;
