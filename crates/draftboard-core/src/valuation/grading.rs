// Retrospective draft grading against market ADP.
//
// A pick's value is `pick_number - adp_rank`: positive when the player lasted
// longer than the market expected, negative for a reach. Picks whose player
// cannot be found in the catalog by case-insensitive name are left out of
// the grade entirely.

use serde::Serialize;
use tracing::debug;

use crate::config::GradingScale;
use crate::draft::pick::PickRecord;
use crate::valuation::catalog::{Catalog, CatalogPlayer};

/// A single graded pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedPick {
    pub player: CatalogPlayer,
    pub value: f64,
    pub reasoning: Vec<String>,
}

/// Summary of how the caller's picks compare with ADP.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftAnalysis {
    pub total_value: f64,
    pub best_picks: Vec<GradedPick>,
    pub reaches: Vec<GradedPick>,
    pub grade: String,
}

/// Value of taking a player with ADP `adp_rank` at `pick_number`.
pub fn pick_value(pick_number: u32, adp_rank: f64) -> f64 {
    f64::from(pick_number) - adp_rank
}

/// Letter grade for an average pick value. Thresholds are strict.
pub fn letter_grade(avg_value: f64, scale: &GradingScale) -> String {
    scale
        .steps
        .iter()
        .find(|step| avg_value > step.above)
        .map(|step| step.grade.clone())
        .unwrap_or_else(|| scale.floor_grade.clone())
}

fn value_reasoning(pick: &PickRecord, player: &CatalogPlayer, value: f64) -> Vec<String> {
    let direction = if value >= 0.0 { "after" } else { "before" };
    vec![
        format!("Taken at pick {} with ADP {:.1}", pick.pick_number, player.adp_rank),
        format!("{:.1} picks {direction} market consensus", value.abs()),
    ]
}

/// Grade `team_picks` against the catalog.
pub fn grade_draft(team_picks: &[&PickRecord], catalog: &Catalog, scale: &GradingScale) -> DraftAnalysis {
    let mut total_value = 0.0;
    let mut matched = 0usize;
    let mut best_picks = Vec::new();
    let mut reaches = Vec::new();

    for &pick in team_picks {
        let Some(player) = catalog.find(&pick.player_name) else {
            debug!("pick {} ({}) not in catalog, not graded", pick.pick_number, pick.player_name);
            continue;
        };
        let value = pick_value(pick.pick_number, player.adp_rank);
        total_value += value;
        matched += 1;

        if value > scale.best_pick_margin {
            best_picks.push(GradedPick {
                player: player.clone(),
                value,
                reasoning: value_reasoning(pick, player, value),
            });
        } else if value < -scale.reach_margin {
            reaches.push(GradedPick {
                player: player.clone(),
                value,
                reasoning: value_reasoning(pick, player, value),
            });
        }
    }

    let avg_value = total_value / matched.max(1) as f64;

    DraftAnalysis {
        total_value,
        best_picks,
        reaches,
        grade: letter_grade(avg_value, scale),
    }
}
