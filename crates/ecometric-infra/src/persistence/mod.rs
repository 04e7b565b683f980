//! Persistence implementations
//!
//! File-based implementations of the repository traits.

mod file_listing_repo;

pub use file_listing_repo::FileListingRepository;
