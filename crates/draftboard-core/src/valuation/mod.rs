// Valuation engine: tiers, needs, scarcity, player value, ranking, grading.

pub mod catalog;
pub mod grading;
pub mod needs;
pub mod ranking;
pub mod reasoning;
pub mod scarcity;
pub mod tiers;
pub mod value;
