pub mod catalog;
pub mod runner;

pub use catalog::MockCatalog;
pub use runner::SearchRunner;
