//! Infrastructure layer - catalog loaders, listing persistence

pub mod catalog_loader;
pub mod persistence;

pub use catalog_loader::CatalogLoader;
