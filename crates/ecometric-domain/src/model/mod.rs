//! Domain model types

pub mod appraisal;
pub mod certification;
pub mod habitability;
pub mod investment;
pub mod listing;
pub mod material;

pub use appraisal::{AppraisalRequest, PropertyDetails, PropertyKind};
pub use certification::{
    Area, Aspect, Certification, CertificationCatalog, Credit, CriterionInfo, Level, Regulation,
    Solution, WeightTables,
};
pub use habitability::PoeInputs;
pub use investment::{
    FieldDefinition, FieldSection, NewConstructionInputs, ProjectType, RestorationInputs,
};
pub use listing::{Feed, JobPosting, Listing, ListingImage};
pub use material::{LccaMaterial, MaterialCatalog};
