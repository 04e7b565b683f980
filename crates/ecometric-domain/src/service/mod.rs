//! Domain services

pub mod appraisal;
pub mod discount;
pub mod habitability;
pub mod lcca;
pub mod pro_forma;
pub mod restoration;
pub mod sustainability;

pub use appraisal::{appraise, AppraisalResult, Swot};
pub use habitability::{evaluate_poe, EnergyStatus, MaintenanceAlert, PoeResult};
pub use lcca::{calculate_lcca, LccaBreakdown, LccaParams, LccaResult, LccaYear};
pub use pro_forma::{
    calculate_new_construction, new_construction_sensitivity, NewConstructionResult,
    NewConstructionSensitivity,
};
pub use restoration::{
    calculate_restoration, restoration_sensitivity, RestorationResult, RestorationSensitivity,
};
pub use sustainability::{level_for, progress_percent, AspectScore, EvaluationState, ScoreSummary};
