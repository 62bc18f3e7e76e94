//! Name catalogs: domains, organizations, academic levels and fields

pub mod model;
pub mod repository;

pub use model::{CatalogEntry, CatalogKind};
pub use repository::CatalogRepository;
