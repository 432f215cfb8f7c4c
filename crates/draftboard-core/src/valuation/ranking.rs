// Recommendation ranking over the undrafted pool.

use serde::Serialize;

use crate::config::EngineConfig;
use crate::valuation::catalog::CatalogPlayer;
use crate::valuation::needs::PositionalNeeds;
use crate::valuation::reasoning::generate_reasoning;
use crate::valuation::scarcity::{ScarcityLevel, ScarcitySummary};
use crate::valuation::value::{CandidateContext, player_value};

/// One ranked candidate. `value` is only comparable with other
/// recommendations from the same request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub player: CatalogPlayer,
    pub value: i64,
    pub reasoning: Vec<String>,
    pub tier: u8,
    pub scarcity_level: ScarcityLevel,
}

/// Value and explain every available player, best first.
///
/// The sort is stable, so equal values keep ADP order. The full list is
/// returned; truncation is up to the caller.
pub fn rank_recommendations(
    available: &[&CatalogPlayer],
    needs: &PositionalNeeds,
    scarcity: &ScarcitySummary,
    next_pick: u32,
    config: &EngineConfig,
) -> Vec<Recommendation> {
    let mut ranked: Vec<Recommendation> = available
        .iter()
        .map(|&player| {
            let ctx = CandidateContext {
                need: needs.level(player.position),
                scarcity: scarcity.level(player.position),
                next_pick,
            };
            Recommendation {
                player: player.clone(),
                value: player_value(player, &ctx, &config.valuation),
                reasoning: generate_reasoning(player, &ctx, &config.reasoning),
                tier: player.tier,
                scarcity_level: ctx.scarcity,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked
}
