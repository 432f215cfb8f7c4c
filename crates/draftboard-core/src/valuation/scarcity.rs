// Positional scarcity estimation.
//
// For each skill position, counts how many top-tier players remain undrafted
// and classifies the depth against fixed per-position bands. Kickers and
// defenses are not tracked.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::config::{ScarcityBands, ScarcityThresholds};
use crate::draft::pick::Position;
use crate::valuation::catalog::CatalogPlayer;

// ---------------------------------------------------------------------------
// Scarcity levels
// ---------------------------------------------------------------------------

/// How depleted the top of a position's pool is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScarcityLevel {
    /// Plenty of top-tier players left.
    Low,
    /// Top tier is thinning.
    Medium,
    /// Few top-tier players remain.
    High,
}

impl ScarcityLevel {
    /// Classify a count of available top-tier players.
    pub fn from_count(available: usize, bands: &ScarcityBands) -> Self {
        if available < bands.high_below {
            ScarcityLevel::High
        } else if available < bands.medium_below {
            ScarcityLevel::Medium
        } else {
            ScarcityLevel::Low
        }
    }
}

// ---------------------------------------------------------------------------
// Scarcity summary
// ---------------------------------------------------------------------------

/// Scarcity analysis for a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScarcityEntry {
    /// Undrafted players at this position in the top tiers.
    pub available_count: usize,
    pub level: ScarcityLevel,
}

/// Scarcity for every tracked position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScarcitySummary {
    entries: BTreeMap<Position, ScarcityEntry>,
    /// Rounds remaining in a full draft from the next pick. Derived for
    /// callers that want draft-stage context; the level bands do not use it.
    #[serde(skip)]
    rounds_left: u32,
}

/// Positions with scarcity tracking.
const TRACKED_POSITIONS: &[Position] = &[
    Position::Quarterback,
    Position::RunningBack,
    Position::WideReceiver,
    Position::TightEnd,
];

impl ScarcitySummary {
    pub fn entry(&self, pos: Position) -> Option<&ScarcityEntry> {
        self.entries.get(&pos)
    }

    /// Scarcity level at `pos`; untracked positions are always low.
    pub fn level(&self, pos: Position) -> ScarcityLevel {
        self.entry(pos).map(|e| e.level).unwrap_or(ScarcityLevel::Low)
    }

    pub fn rounds_left(&self) -> u32 {
        self.rounds_left
    }
}

// ---------------------------------------------------------------------------
// Core computation
// ---------------------------------------------------------------------------

/// Rounds left in a `rounds`-round draft from `next_pick`:
/// `ceil((league_size * rounds - next_pick + 1) / league_size)`, floored at 0.
pub fn rounds_left(next_pick: u32, league_size: u32, rounds: u32) -> u32 {
    let league_size = league_size.max(1);
    let picks_left = (league_size * rounds + 1).saturating_sub(next_pick);
    picks_left.div_ceil(league_size)
}

/// Compute scarcity over the undrafted pool.
pub fn compute_scarcity(
    available: &[&CatalogPlayer],
    next_pick: u32,
    league_size: u32,
    rounds: u32,
    thresholds: &ScarcityThresholds,
) -> ScarcitySummary {
    let mut entries = BTreeMap::new();

    for &pos in TRACKED_POSITIONS {
        let Some(bands) = thresholds.bands(pos) else {
            continue;
        };
        let available_count = available
            .iter()
            .filter(|p| p.position == pos && p.tier <= thresholds.top_tier)
            .count();
        entries.insert(
            pos,
            ScarcityEntry {
                available_count,
                level: ScarcityLevel::from_count(available_count, bands),
            },
        );
    }

    let rounds_left = rounds_left(next_pick, league_size, rounds);
    debug!(next_pick, league_size, rounds_left, "computed positional scarcity");

    ScarcitySummary {
        entries,
        rounds_left,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
