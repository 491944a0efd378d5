//! Settings model: pricing scalars, assumptions, and factor tables

pub mod factors;
pub mod patch;
pub mod types;

pub use factors::{FactorTable, FactorTablePatch, LocationTier, QualityTier, Tier};
pub use patch::{AssumptionsPatch, FieldChange, SettingsPatch};
pub use types::{Assumptions, Settings};

// vim: ts=4
