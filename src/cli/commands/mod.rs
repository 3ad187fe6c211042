pub mod backup;
pub mod check;
