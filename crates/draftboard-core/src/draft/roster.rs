// Team composition: how many players a team has rostered at each position.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::pick::{ALL_POSITIONS, PickRecord, Position};

/// Per-position player counts for one team.
///
/// Always carries an entry for every position, zero when nothing has been
/// drafted there. Rebuilt from the pick list on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TeamComposition {
    counts: BTreeMap<Position, u32>,
}

impl TeamComposition {
    /// An empty roster: zero at every position.
    pub fn new() -> Self {
        TeamComposition {
            counts: ALL_POSITIONS.iter().map(|&p| (p, 0)).collect(),
        }
    }

    /// Build the composition of the team owning `team_pick_numbers`.
    ///
    /// Picks whose number is not in `team_pick_numbers` belong to other
    /// teams and are ignored. The picks need not be validated first: a pick
    /// with an unrecognized position is skipped rather than rejected.
    pub fn from_picks(picks: &[PickRecord], team_pick_numbers: &[u32]) -> Self {
        let mut composition = TeamComposition::new();
        for pick in picks
            .iter()
            .filter(|p| team_pick_numbers.contains(&p.pick_number))
        {
            match pick.parsed_position() {
                Some(pos) => composition.add(pos),
                None => debug!(
                    "ignoring pick {} ({}): unknown position '{}'",
                    pick.pick_number, pick.player_name, pick.position
                ),
            }
        }
        composition
    }

    /// Record one more player at `pos`.
    pub fn add(&mut self, pos: Position) {
        *self.counts.entry(pos).or_insert(0) += 1;
    }

    /// Number of players rostered at `pos`.
    pub fn count(&self, pos: Position) -> u32 {
        self.counts.get(&pos).copied().unwrap_or(0)
    }

    /// Total players rostered across all positions.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

impl Default for TeamComposition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(number: u32, name: &str, position: &str) -> PickRecord {
        PickRecord {
            pick_number: number,
            round: 1,
            player_name: name.into(),
            position: position.into(),
            team: None,
            adp: None,
        }
    }

    #[test]
    fn empty_composition_has_every_position() {
        let comp = TeamComposition::new();
        for pos in ALL_POSITIONS {
            assert_eq!(comp.count(pos), 0);
        }
        assert_eq!(comp.total(), 0);
    }

    #[test]
    fn counts_only_team_picks() {
        let picks = vec![
            pick(1, "A", "RB"),
            pick(2, "B", "WR"),
            pick(24, "C", "RB"),
            pick(25, "D", "QB"),
        ];
        let comp = TeamComposition::from_picks(&picks, &[1, 24]);
        assert_eq!(comp.count(Position::RunningBack), 2);
        assert_eq!(comp.count(Position::WideReceiver), 0);
        assert_eq!(comp.count(Position::Quarterback), 0);
        assert_eq!(comp.total(), 2);
    }

    #[test]
    fn defense_aliases_counted_as_defense() {
        let picks = vec![pick(3, "Ravens D/ST", "DST"), pick(4, "Bills", "DEF")];
        let comp = TeamComposition::from_picks(&picks, &[3, 4]);
        assert_eq!(comp.count(Position::Defense), 2);
    }

    #[test]
    fn unknown_positions_ignored() {
        let picks = vec![pick(5, "Mystery", "FLEX")];
        let comp = TeamComposition::from_picks(&picks, &[5]);
        assert_eq!(comp.total(), 0);
    }

    #[test]
    fn serializes_as_position_map() {
        let mut comp = TeamComposition::new();
        comp.add(Position::TightEnd);
        let json = serde_json::to_value(&comp).unwrap();
        assert_eq!(json["TE"], 1);
        assert_eq!(json["DEF"], 0);
        assert_eq!(json.as_object().unwrap().len(), 6);
    }
}
