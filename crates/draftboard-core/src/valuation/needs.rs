// Positional need estimation from the caller's roster composition.
//
// Each position has a ladder of count thresholds (see `NeedRules`); the
// first threshold the rostered count falls below sets the need strength.
// Kickers and defenses stay at zero need until late in the draft.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{NeedLadder, NeedRules};
use crate::draft::pick::{ALL_POSITIONS, Position};
use crate::draft::roster::TeamComposition;

/// How urgently a position needs another player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NeedLevel {
    /// No need (strength 0).
    None,
    /// Bench depth (strength 1).
    Depth,
    /// Open starting spot (strength 2).
    Strong,
    /// Empty core starting spots (strength 3 or more).
    Critical,
}

impl NeedLevel {
    pub fn from_strength(strength: u8) -> Self {
        match strength {
            0 => NeedLevel::None,
            1 => NeedLevel::Depth,
            2 => NeedLevel::Strong,
            _ => NeedLevel::Critical,
        }
    }
}

/// Need strength per position for one team at one point in the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PositionalNeeds {
    strengths: BTreeMap<Position, u8>,
}

impl PositionalNeeds {
    /// Need strength at `pos` (0 when unknown).
    pub fn strength(&self, pos: Position) -> u8 {
        self.strengths.get(&pos).copied().unwrap_or(0)
    }

    pub fn level(&self, pos: Position) -> NeedLevel {
        NeedLevel::from_strength(self.strength(pos))
    }
}

/// The 1-based draft round a pick number falls in: `ceil(next_pick / league_size)`.
pub fn draft_round(next_pick: u32, league_size: u32) -> u32 {
    next_pick.div_ceil(league_size.max(1))
}

fn ladder_strength(ladder: &NeedLadder, count: u32, round: u32) -> u8 {
    if ladder.after_round.is_some_and(|gate| round <= gate) {
        return 0;
    }
    ladder
        .steps
        .iter()
        .find(|step| count < step.below)
        .map(|step| step.need)
        .unwrap_or(ladder.otherwise)
}

/// Compute need strength for every position.
pub fn compute_needs(composition: &TeamComposition, round: u32, rules: &NeedRules) -> PositionalNeeds {
    let strengths = ALL_POSITIONS
        .iter()
        .map(|&pos| {
            let strength = ladder_strength(rules.ladder(pos), composition.count(pos), round);
            (pos, strength)
        })
        .collect();
    PositionalNeeds { strengths }
}
