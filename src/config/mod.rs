pub mod load;
pub mod model;

pub use load::{load_config, select_sections};
pub use model::BackupSection;
