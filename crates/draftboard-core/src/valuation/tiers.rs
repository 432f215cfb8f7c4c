// Tier classification from ADP rank.
//
// Tier is derived purely from rank; position plays no part.

use crate::config::TierBreakpoints;

/// Deepest tier with the default four breakpoints.
pub const DEEPEST_TIER: u8 = 5;

/// Classify an ADP rank into a tier (1 = best).
///
/// A rank belongs to the first tier whose inclusive upper breakpoint it does
/// not exceed; ranks past the last breakpoint fall into the tier after it.
pub fn classify(adp_rank: f64, tiers: &TierBreakpoints) -> u8 {
    let idx = tiers
        .breakpoints
        .iter()
        .position(|&upper| adp_rank <= upper)
        .unwrap_or(tiers.breakpoints.len());
    (idx + 1).min(u8::MAX as usize) as u8
}
