// Human-readable reasons behind a recommendation.
//
// Mirrors the valuation inputs: tier, need, scarcity, how far the player has
// slid past ADP, and bye week. Every applicable reason is emitted, in that
// order.

use crate::config::ReasoningThresholds;
use crate::valuation::catalog::CatalogPlayer;
use crate::valuation::needs::NeedLevel;
use crate::valuation::scarcity::ScarcityLevel;
use crate::valuation::value::CandidateContext;

pub const FALLBACK_REASON: &str = "Solid option available";

fn tier_reason(tier: u8) -> Option<String> {
    match tier {
        1 => Some("Elite tier 1 player".into()),
        2 => Some("High-end starter".into()),
        _ => None,
    }
}

fn need_reason(need: NeedLevel, position: &str) -> Option<String> {
    match need {
        NeedLevel::Critical => Some(format!("Critical need at {position}")),
        NeedLevel::Strong => Some(format!("Strong need at {position}")),
        NeedLevel::Depth => Some(format!("Depth needed at {position}")),
        NeedLevel::None => None,
    }
}

fn scarcity_reason(level: ScarcityLevel, position: &str) -> Option<String> {
    match level {
        ScarcityLevel::High => Some(format!("High scarcity at {position}")),
        ScarcityLevel::Medium => Some(format!("Moderate scarcity at {position}")),
        ScarcityLevel::Low => None,
    }
}

fn value_reason(adp_rank: f64, next_pick: u32, thresholds: &ReasoningThresholds) -> Option<String> {
    let pick = f64::from(next_pick);
    if pick > adp_rank + thresholds.significant_value_margin {
        Some("Significant value pick".into())
    } else if pick > adp_rank + thresholds.good_value_margin {
        Some("Good value".into())
    } else {
        None
    }
}

fn bye_reason(bye_week: Option<u8>, thresholds: &ReasoningThresholds) -> Option<String> {
    let [first, last] = thresholds.manageable_bye_weeks;
    bye_week
        .filter(|week| (first..=last).contains(week))
        .map(|_| "Manageable bye week".into())
}

/// Explain a candidate's value, most important reason first.
pub fn generate_reasoning(
    player: &CatalogPlayer,
    ctx: &CandidateContext,
    thresholds: &ReasoningThresholds,
) -> Vec<String> {
    let position = player.position.display_str();
    let reasons: Vec<String> = [
        tier_reason(player.tier),
        need_reason(ctx.need, position),
        scarcity_reason(ctx.scarcity, position),
        value_reason(player.adp_rank, ctx.next_pick, thresholds),
        bye_reason(player.bye_week, thresholds),
    ]
    .into_iter()
    .flatten()
    .collect();

    if reasons.is_empty() {
        vec![FALLBACK_REASON.to_string()]
    } else {
        reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TierBreakpoints;
    use crate::draft::pick::Position;

    fn make_player(pos: Position, rank: f64, bye: Option<u8>) -> CatalogPlayer {
        CatalogPlayer::new("Test Player", "TST", pos, rank, bye, &TierBreakpoints::default())
    }

    fn reasons(player: &CatalogPlayer, need: NeedLevel, scarcity: ScarcityLevel, next_pick: u32) -> Vec<String> {
        let ctx = CandidateContext {
            need,
            scarcity,
            next_pick,
        };
        generate_reasoning(player, &ctx, &ReasoningThresholds::default())
    }

    #[test]
    fn all_reasons_in_fixed_order() {
        let player = make_player(Position::WideReceiver, 10.0, Some(9));
        let r = reasons(&player, NeedLevel::Critical, ScarcityLevel::High, 30);
        assert_eq!(
            r,
            vec![
                "Elite tier 1 player",
                "Critical need at WR",
                "High scarcity at WR",
                "Significant value pick",
                "Manageable bye week",
            ]
        );
    }

    #[test]
    fn mid_level_messages() {
        let player = make_player(Position::TightEnd, 30.0, Some(14));
        let r = reasons(&player, NeedLevel::Strong, ScarcityLevel::Medium, 38);
        assert_eq!(
            r,
            vec![
                "High-end starter",
                "Strong need at TE",
                "Moderate scarcity at TE",
                "Good value",
            ]
        );
    }

    #[test]
    fn depth_need_message() {
        let player = make_player(Position::RunningBack, 80.0, None);
        let r = reasons(&player, NeedLevel::Depth, ScarcityLevel::Low, 50);
        assert_eq!(r, vec!["Depth needed at RB"]);
    }

    #[test]
    fn value_margins_are_strict() {
        let player = make_player(Position::Quarterback, 50.0, None);
        // exactly 12 past ADP is only good value
        let r = reasons(&player, NeedLevel::None, ScarcityLevel::Low, 62);
        assert_eq!(r, vec!["Good value"]);
        // exactly 6 past ADP is nothing
        let r = reasons(&player, NeedLevel::None, ScarcityLevel::Low, 56);
        assert_eq!(r, vec![FALLBACK_REASON]);
        let r = reasons(&player, NeedLevel::None, ScarcityLevel::Low, 63);
        assert_eq!(r, vec!["Significant value pick"]);
    }

    #[test]
    fn bye_week_range_inclusive() {
        for (week, expected) in [(5, false), (6, true), (11, true), (12, false)] {
            let player = make_player(Position::Kicker, 150.0, Some(week));
            let r = reasons(&player, NeedLevel::None, ScarcityLevel::Low, 1);
            assert_eq!(r.contains(&"Manageable bye week".to_string()), expected, "week {week}");
        }
    }

    #[test]
    fn fallback_when_nothing_applies() {
        let player = make_player(Position::Defense, 160.0, None);
        let r = reasons(&player, NeedLevel::None, ScarcityLevel::Low, 100);
        assert_eq!(r, vec![FALLBACK_REASON]);
    }
}
