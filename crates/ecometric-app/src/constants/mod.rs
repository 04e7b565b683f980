//! Built-in certification and LCCA catalogs

pub mod catalogs;

pub use catalogs::{builtin_certifications, builtin_materials, get_certification, get_material};
