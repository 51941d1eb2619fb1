pub mod catalog;
pub mod model;

pub use catalog::ScannerCatalog;
pub use model::{ScanSpecPoint, ScannerModel};
