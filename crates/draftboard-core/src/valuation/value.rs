// Single-number player valuation for pick recommendations.
//
// value = round((base - adp) * need multiplier * scarcity multiplier
//               + tier bonus + value-pick bonus)
//
// The base term goes negative for players ranked deeper than `base`; it is
// not clamped, so the result has no fixed range.

use crate::config::ValuationWeights;
use crate::valuation::catalog::CatalogPlayer;
use crate::valuation::needs::NeedLevel;
use crate::valuation::scarcity::ScarcityLevel;

/// The team- and draft-specific inputs a candidate is judged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateContext {
    /// The caller's need at the candidate's position.
    pub need: NeedLevel,
    /// Scarcity at the candidate's position.
    pub scarcity: ScarcityLevel,
    /// The overall pick number about to be made.
    pub next_pick: u32,
}

/// Picks a player has slid past his ADP at `next_pick`; zero when he has not.
pub fn slide(adp_rank: f64, next_pick: u32) -> f64 {
    (f64::from(next_pick) - adp_rank).max(0.0)
}

pub fn need_multiplier(need: NeedLevel, weights: &ValuationWeights) -> f64 {
    let m = &weights.need_multipliers;
    match need {
        NeedLevel::Critical => m.critical,
        NeedLevel::Strong => m.strong,
        NeedLevel::Depth => m.depth,
        NeedLevel::None => m.none,
    }
}

pub fn scarcity_multiplier(level: ScarcityLevel, weights: &ValuationWeights) -> f64 {
    let m = &weights.scarcity_multipliers;
    match level {
        ScarcityLevel::High => m.high,
        ScarcityLevel::Medium => m.medium,
        ScarcityLevel::Low => m.low,
    }
}

pub fn tier_bonus(tier: u8, weights: &ValuationWeights) -> f64 {
    match tier {
        1 => weights.tier1_bonus,
        2 => weights.tier2_bonus,
        _ => 0.0,
    }
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Score a candidate. Deterministic in its inputs.
pub fn player_value(player: &CatalogPlayer, ctx: &CandidateContext, weights: &ValuationWeights) -> i64 {
    let base = weights.base - player.adp_rank;
    let adjusted = base * need_multiplier(ctx.need, weights) * scarcity_multiplier(ctx.scarcity, weights);
    let total = adjusted
        + tier_bonus(player.tier, weights)
        + slide(player.adp_rank, ctx.next_pick) * weights.value_pick_factor;
    round_half_up(total)
}
