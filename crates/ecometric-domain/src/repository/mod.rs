//! Repository trait definitions for catalog and listing data

use ecometric_types::Error;

use crate::model::{CertificationCatalog, Feed, Listing, MaterialCatalog};

/// Source of the static certification and material catalogs
pub trait CatalogRepository {
    /// Load every certification system
    fn certifications(&self) -> Result<CertificationCatalog, Error>;

    /// Load LCCA material records
    fn materials(&self) -> Result<MaterialCatalog, Error>;
}

/// Source of published listings
pub trait ListingRepository {
    /// Load the items of a feed, in document order
    fn find_by_feed(&self, feed: Feed) -> Result<Vec<Listing>, Error>;
}
