// Request and response documents exchanged with the host layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EngineConfig;
use crate::draft::pick::{PickRecord, Position};
use crate::draft::roster::TeamComposition;
use crate::valuation::grading::DraftAnalysis;
use crate::valuation::ranking::Recommendation;
use crate::valuation::scarcity::ScarcitySummary;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid request field `{field}`: {message}")]
    Validation { field: String, message: String },

    #[error("malformed request document: {0}")]
    Parse(#[from] serde_json::Error),
}

fn invalid(field: impl Into<String>, message: impl Into<String>) -> RequestError {
    RequestError::Validation {
        field: field.into(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// League scoring format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringType {
    #[default]
    Ppr,
    Half,
    Standard,
}

/// Everything the engine needs to rank the next pick and grade past ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    /// Teams in the league; the configured default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_size: Option<u32>,
    /// Every pick made so far, by any team.
    #[serde(default)]
    pub picks: Vec<PickRecord>,
    /// Pick numbers that belong to the caller's team.
    #[serde(default)]
    pub user_team_picks: Vec<u32>,
    /// The overall pick number about to be made.
    pub next_pick: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_type: Option<ScoringType>,
}

impl DraftRequest {
    pub fn from_json(text: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn league_size(&self, config: &EngineConfig) -> u32 {
        self.league_size.unwrap_or(config.league.default_size)
    }

    pub fn scoring_type(&self, config: &EngineConfig) -> ScoringType {
        self.scoring_type.unwrap_or(config.league.default_scoring)
    }

    /// The caller's own picks, in the order supplied.
    pub fn team_picks(&self) -> Vec<&PickRecord> {
        self.picks
            .iter()
            .filter(|p| self.user_team_picks.contains(&p.pick_number))
            .collect()
    }

    /// Check every field, reporting the first offending one.
    pub fn validate(&self, config: &EngineConfig) -> Result<(), RequestError> {
        let league = &config.league;
        let size = self.league_size(config);
        if !(league.min_size..=league.max_size).contains(&size) {
            return Err(invalid(
                "leagueSize",
                format!("must be between {} and {}, got {size}", league.min_size, league.max_size),
            ));
        }

        if self.next_pick < 1 {
            return Err(invalid("nextPick", "must be at least 1"));
        }

        for (i, pick) in self.picks.iter().enumerate() {
            if pick.pick_number < 1 {
                return Err(invalid(format!("picks[{i}].pick"), "must be at least 1"));
            }
            if pick.round < 1 {
                return Err(invalid(format!("picks[{i}].round"), "must be at least 1"));
            }
            if pick.player_name.trim().is_empty() {
                return Err(invalid(format!("picks[{i}].player"), "must not be empty"));
            }
            if Position::from_str_pos(&pick.position).is_none() {
                return Err(invalid(
                    format!("picks[{i}].position"),
                    format!("unknown position '{}'", pick.position),
                ));
            }
            if let Some(adp) = pick.adp {
                if !adp.is_finite() || adp <= 0.0 {
                    return Err(invalid(
                        format!("picks[{i}].adp"),
                        format!("must be a positive number, got {adp}"),
                    ));
                }
            }
        }

        if let Some(i) = self.user_team_picks.iter().position(|&n| n < 1) {
            return Err(invalid(format!("userTeamPicks[{i}]"), "must be at least 1"));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub recommendations: Vec<Recommendation>,
    pub team_composition: TeamComposition,
    pub scarcity_data: ScarcitySummary,
    pub analysis: DraftAnalysis,
    pub next_pick: u32,
    /// Picks made so far across the league.
    pub total_picks: usize,
    /// Undrafted catalog players, before truncation.
    pub available_players: usize,
    pub round: u32,
    pub scoring_type: ScoringType,
    /// Problems met while loading the ADP source; empty when it parsed cleanly.
    pub catalog_warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> DraftRequest {
        DraftRequest::from_json(json).unwrap()
    }

    fn expect_invalid(req: &DraftRequest, expected_field: &str) {
        match req.validate(&EngineConfig::default()).unwrap_err() {
            RequestError::Validation { field, .. } => assert_eq!(field, expected_field),
            other => panic!("expected Validation, got: {other}"),
        }
    }

    #[test]
    fn minimal_request_uses_defaults() {
        let req = request(r#"{"nextPick": 1}"#);
        let config = EngineConfig::default();
        assert_eq!(req.league_size(&config), 12);
        assert_eq!(req.scoring_type(&config), ScoringType::Ppr);
        assert!(req.picks.is_empty());
        assert!(req.user_team_picks.is_empty());
        req.validate(&config).unwrap();
    }

    #[test]
    fn full_request_parses() {
        let req = request(
            r#"{
                "leagueSize": 10,
                "picks": [
                    {"pick": 1, "round": 1, "player": "Ja'Marr Chase", "position": "WR", "team": "CIN", "adp": 1.2},
                    {"pick": 2, "round": 1, "player": "Bijan Robinson", "position": "RB"}
                ],
                "userTeamPicks": [2],
                "nextPick": 3,
                "scoringType": "half"
            }"#,
        );
        assert_eq!(req.league_size, Some(10));
        assert_eq!(req.scoring_type, Some(ScoringType::Half));
        assert_eq!(req.picks[0].team.as_deref(), Some("CIN"));
        let mine = req.team_picks();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].player_name, "Bijan Robinson");
        req.validate(&EngineConfig::default()).unwrap();
    }

    #[test]
    fn unknown_scoring_type_is_a_parse_error() {
        let err = DraftRequest::from_json(r#"{"nextPick": 1, "scoringType": "superflex"}"#).unwrap_err();
        assert!(matches!(err, RequestError::Parse(_)));
    }

    #[test]
    fn missing_next_pick_is_a_parse_error() {
        let err = DraftRequest::from_json(r#"{"leagueSize": 12}"#).unwrap_err();
        assert!(matches!(err, RequestError::Parse(_)));
    }

    #[test]
    fn rejects_league_size_out_of_range() {
        expect_invalid(&request(r#"{"nextPick": 1, "leagueSize": 7}"#), "leagueSize");
        expect_invalid(&request(r#"{"nextPick": 1, "leagueSize": 17}"#), "leagueSize");
    }

    #[test]
    fn rejects_zero_next_pick() {
        expect_invalid(&request(r#"{"nextPick": 0}"#), "nextPick");
    }

    #[test]
    fn rejects_bad_pick_fields() {
        expect_invalid(
            &request(r#"{"nextPick": 2, "picks": [{"pick": 0, "round": 1, "player": "A", "position": "RB"}]}"#),
            "picks[0].pick",
        );
        expect_invalid(
            &request(r#"{"nextPick": 2, "picks": [{"pick": 1, "round": 0, "player": "A", "position": "RB"}]}"#),
            "picks[0].round",
        );
        expect_invalid(
            &request(r#"{"nextPick": 2, "picks": [{"pick": 1, "round": 1, "player": "  ", "position": "RB"}]}"#),
            "picks[0].player",
        );
        expect_invalid(
            &request(r#"{"nextPick": 2, "picks": [{"pick": 1, "round": 1, "player": "A", "position": "FLEX"}]}"#),
            "picks[0].position",
        );
        expect_invalid(
            &request(r#"{"nextPick": 2, "picks": [{"pick": 1, "round": 1, "player": "A", "position": "RB", "adp": -3}]}"#),
            "picks[0].adp",
        );
    }

    #[test]
    fn rejects_zero_user_team_pick() {
        expect_invalid(&request(r#"{"nextPick": 2, "userTeamPicks": [1, 0]}"#), "userTeamPicks[1]");
    }
}
