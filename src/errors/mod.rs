pub mod types;
pub mod classification;

pub use types::ReportsError;
pub use classification::ErrorClassification;
